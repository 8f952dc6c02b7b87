/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,

    // Palette operations
    AddColor,
    EditColor,
    DeleteColor,
    GrabColor,
    Reload,

    // Dialog / editor
    Confirm,
    Cancel,

    // Input
    InsertChar(char),
    DeleteChar,

    // Other
    Quit,
    ForceQuit,
}

impl Action {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveTop" => Some(Action::MoveTop),
            "MoveBottom" => Some(Action::MoveBottom),
            "AddColor" => Some(Action::AddColor),
            "EditColor" => Some(Action::EditColor),
            "DeleteColor" => Some(Action::DeleteColor),
            "GrabColor" => Some(Action::GrabColor),
            "Reload" => Some(Action::Reload),
            "Confirm" => Some(Action::Confirm),
            "Cancel" => Some(Action::Cancel),
            "DeleteChar" => Some(Action::DeleteChar),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            "None" | "ReceiveChar" => None, // Special actions to disable bindings
            _ => None,
        }
    }
}
