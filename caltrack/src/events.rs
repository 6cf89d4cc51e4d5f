use crate::ui::view::RowKey;

/// Commands produced from user input and applied by the executor
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Tracker actions
    AddItem,
    EditItem { row: RowKey },
    DeleteItem { row: RowKey },
    CancelEdit,

    // Form editing
    FocusNextField,
    FocusPreviousField,
    AppendFormChar(char),
    DeleteFormChar,

    // List selection
    SelectNext,
    SelectPrevious,

    // Navigation
    NavigateBack,
    NavigateToLogs,

    // Log screen
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    ToggleHelp,

    // System
    Quit,
}
