pub mod control_bar;
pub mod empty_state;
pub mod form_input;
pub mod help_bar;
pub mod help_popup;
pub mod popup;
pub mod screen_title;
