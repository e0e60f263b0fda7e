mod note;

pub use note::{CreateNote, Note, UpdateNote};
