// Contract integration module
// This module handles all NoteBoxFactory interactions

pub mod abis;
pub mod addresses;
pub mod client;
pub mod config;
pub mod mock;
pub mod types;

pub use client::ContractClient;
pub use mock::MockNoteBoxFactory;
pub use types::*;
