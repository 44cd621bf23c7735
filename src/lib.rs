pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod tests;

// Main exports for external use
pub use application::services::NoteBoxService;
pub use domain::models::{CreateNoteBoxRequest, NoteBox, TransactionId};
pub use domain::services::{ContractError, NoteBoxContract};
