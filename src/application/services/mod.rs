pub mod notebox_service;

pub use notebox_service::*;
