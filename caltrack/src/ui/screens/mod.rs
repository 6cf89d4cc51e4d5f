pub mod logs_screen;
pub mod tracker_screen;

use crate::state::LogsState;

#[derive(Debug, Clone)]
pub enum Screen {
    Tracker,
    Logs(LogsState),
}
