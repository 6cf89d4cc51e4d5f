use caltrack::events::AppCommand;
use caltrack::input::{Key, KeyEvent};
use caltrack::store::{Calories, ItemId};
use caltrack::testing::TestApp;
use caltrack::ui::screens::Screen;
use caltrack::ui::view::{Focus, FormMode};

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    // Initially should not quit
    app.assert_not_quit();

    // 'q' in the form is just a character
    app.send_key(Key::Char('q'));
    app.assert_not_quit();
    assert_eq!(app.state().view.form.name, "q");

    // From the list it quits
    app.focus(Focus::List);
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = TestApp::new();

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    app.focus(Focus::List);

    // Initially help is hidden
    assert!(!app.state().help_visible);

    // Press '?' to show help
    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Keys other than the help toggles are swallowed
    assert_eq!(app.send_key(Key::Char('j')), None);

    // Press '?' again to hide
    app.send_key(Key::Char('?'));
    assert!(!app.state().help_visible);

    // Press '?' again to show, 'Esc' to hide
    app.send_key(Key::Char('?'));
    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_starts_empty_in_add_mode() {
    let app = TestApp::new();

    assert!(app.row_names().is_empty());
    assert_eq!(app.state().view.total_label, "0");
    assert_eq!(app.state().view.focus, Focus::Name);
    app.assert_mode(FormMode::Add);
    assert!(!app.state().view.controls.update);
    assert!(!app.state().view.controls.cancel);
}

#[test]
fn test_add_item_by_typing() {
    let mut app = TestApp::new();

    app.type_text("Apple");
    app.send_key(Key::Tab);
    app.type_text("95");
    assert_eq!(app.send_key(Key::Enter), Some(AppCommand::AddItem));

    assert_eq!(app.row_names(), vec!["Apple"]);
    assert_eq!(app.total(), Calories::Count(95));
    assert_eq!(app.state().view.total_label, "95");

    // Form is cleared for the next item
    assert!(app.state().view.form.name.is_empty());
    assert!(app.state().view.form.calories.is_empty());
}

#[test]
fn test_backspace_edits_focused_field() {
    let mut app = TestApp::new();

    app.type_text("Applf");
    app.send_key(Key::Backspace);
    app.type_text("e");
    app.send_key(Key::Tab);
    app.type_text("12");
    app.send_key(Key::Backspace);

    assert_eq!(app.state().view.form.name, "Apple");
    assert_eq!(app.state().view.form.calories, "1");
}

#[test]
fn test_items_and_total_scenario() {
    let mut app = TestApp::new();

    app.add_item("Apple", "95");
    app.add_item("Bread", "200");

    assert_eq!(app.row_names(), vec!["Apple", "Bread"]);
    assert_eq!(app.total(), Calories::Count(295));
    assert_eq!(app.state().view.total_label, "295");

    let ids: Vec<_> = app.store().get_all_items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![ItemId::FIRST, ItemId::new(2).unwrap()]);

    let rows = app.state().view.rows();
    assert_eq!(rows[0].element_id(), "item-1");
    assert_eq!(rows[1].element_id(), "item-2");
}

#[test]
fn test_non_numeric_calories_make_total_nan() {
    let mut app = TestApp::new();

    app.add_item("Apple", "95");
    app.add_item("Mystery", "lots");

    assert_eq!(app.total(), Calories::NotANumber);
    assert_eq!(app.state().view.total_label, "NaN");

    // Once NaN, further additions cannot recover the total
    app.add_item("Bread", "200");
    assert_eq!(app.state().view.total_label, "NaN");
}

#[test]
fn test_leading_digits_are_parsed() {
    let mut app = TestApp::new();

    app.add_item("Soup", "120kcal");
    app.add_item("Water", "");

    assert_eq!(app.total(), Calories::NotANumber);
    assert_eq!(
        app.store().get_all_items()[0].calories,
        Calories::Count(120)
    );
}

#[test]
fn test_edit_and_cancel_modes() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");
    app.add_item("Bread", "200");

    app.select_row(1);
    app.send_key(Key::Char('e'));

    app.assert_mode(FormMode::Edit);
    assert_eq!(app.state().view.form.name, "Bread");
    assert_eq!(app.state().view.form.calories, "200");
    assert_eq!(
        app.store().current_item().map(|item| item.name.as_str()),
        Some("Bread")
    );
    assert!(!app.state().view.controls.add);
    assert!(app.state().view.controls.update);
    assert!(app.state().view.controls.cancel);

    app.send_key(Key::Esc);

    app.assert_mode(FormMode::Add);
    assert!(app.store().current_item().is_none());
    assert!(app.state().view.form.name.is_empty());
    assert!(app.state().view.form.calories.is_empty());
    assert_eq!(app.row_names(), vec!["Apple", "Bread"]);
}

#[test]
fn test_enter_in_edit_mode_does_not_commit() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");

    app.select_row(0);
    app.send_key(Key::Char('e'));
    app.focus(Focus::Name);
    app.type_text(" pie");

    assert_eq!(app.send_key(Key::Enter), None);
    assert_eq!(app.row_names(), vec!["Apple"]);
    assert_eq!(app.store().get_all_items().len(), 1);
    assert_eq!(app.state().view.form.name, "Apple pie");
    app.assert_mode(FormMode::Edit);
}

#[test]
fn test_delete_keeps_total() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");
    app.add_item("Bread", "200");

    app.select_row(0);
    app.send_key(Key::Char('d'));

    assert_eq!(app.row_names(), vec!["Bread"]);
    assert_eq!(app.store().get_all_items().len(), 1);
    assert_eq!(app.total(), Calories::Count(295));
    assert_eq!(app.state().view.total_label, "295");
}

#[test]
fn test_delete_while_editing_keeps_edit_mode() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");
    app.add_item("Bread", "200");

    app.select_row(1);
    app.send_key(Key::Char('e'));
    app.select_row(0);
    app.send_key(Key::Delete);

    app.assert_mode(FormMode::Edit);
    assert_eq!(app.row_names(), vec!["Bread"]);
    assert_eq!(app.state().view.form.name, "Bread");
}

#[test]
fn test_deleting_last_row_clears_selection() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");

    app.select_row(0);
    app.send_key(Key::Char('d'));

    assert!(app.row_names().is_empty());
    assert_eq!(app.state().view.selected_row(), None);

    // Nothing left to act on
    assert_eq!(app.send_key(Key::Char('d')), None);
    assert_eq!(app.send_key(Key::Char('e')), None);
}

#[test]
fn test_ids_follow_last_item_after_delete() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");
    app.add_item("Bread", "200");
    app.add_item("Cheese", "110");

    // Remove the middle row, the next id still follows the last item
    app.select_row(1);
    app.send_key(Key::Char('d'));
    app.add_item("Dates", "66");

    let ids: Vec<_> = app.store().get_all_items().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(app.state().view.rows()[2].element_id(), "item-4");
}

#[test]
fn test_ids_restart_when_list_is_emptied() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");

    app.select_row(0);
    app.send_key(Key::Char('d'));
    app.add_item("Bread", "200");

    let items = app.store().get_all_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::FIRST);
}

#[test]
fn test_selection_wraps() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");
    app.add_item("Bread", "200");
    app.add_item("Cheese", "110");

    app.focus(Focus::List);
    assert_eq!(app.state().view.table_state.borrow().selected(), Some(0));

    app.send_key(Key::Char('k'));
    assert_eq!(app.state().view.table_state.borrow().selected(), Some(2));

    app.send_key(Key::Down);
    assert_eq!(app.state().view.table_state.borrow().selected(), Some(0));
}

#[test]
fn test_logs_navigation() {
    let mut app = TestApp::new();

    app.assert_screen_type(std::mem::discriminant(&Screen::Tracker));

    // 'L' is typed into the form, it only navigates from the list
    app.send_key(Key::Char('L'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Tracker));

    app.focus(Focus::List);
    app.send_key(Key::Char('L'));
    assert!(matches!(app.state().current_screen(), Screen::Logs(_)));
    assert_eq!(app.state().history.len(), 2);

    app.send_key(Key::Char('h'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Tracker));
    assert_eq!(app.state().history.len(), 1);
}

#[test]
fn test_form_survives_logs_round_trip() {
    let mut app = TestApp::new();
    app.add_item("Apple", "95");
    app.focus(Focus::Name);
    app.type_text("Bre");

    app.focus(Focus::List);
    app.send_key(Key::Char('L'));
    app.send_key(Key::Esc);

    assert_eq!(app.state().view.form.name, "Bre");
    assert_eq!(app.row_names(), vec!["Apple"]);
}

#[test]
fn test_end_to_end_add_add_delete() {
    let mut app = TestApp::new();

    app.add_item("Apple", "95");
    assert_eq!(app.total(), Calories::Count(95));

    app.add_item("Bread", "120");
    assert_eq!(app.total(), Calories::Count(215));

    app.select_row(0);
    app.send_key(Key::Char('d'));

    let items = app.store().get_all_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::new(2).unwrap());
    assert_eq!(items[0].name, "Bread");
    assert_eq!(items[0].calories, Calories::Count(120));
    assert_eq!(app.state().view.total_label, "215");
}
