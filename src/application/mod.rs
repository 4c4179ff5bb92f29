// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the UI adapter and the services
// - Turns internal errors into responses the UI can render

pub mod error_handling;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
