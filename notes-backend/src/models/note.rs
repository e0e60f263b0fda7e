pub use notes_types::Note;

/// Validated, trimmed fields for a new note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
}

/// Validated, trimmed fields for an update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
}

