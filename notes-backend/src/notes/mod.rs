//! Notes core: payload validation and the in-memory note collection
//!
//! Write requests go through `validator` before they reach `NoteStore`;
//! reads go straight to the store.

pub mod errors;
pub mod payload;
pub mod store;
pub mod validator;

pub use errors::NoteError;
pub use store::NoteStore;
