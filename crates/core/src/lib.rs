//! Domain layer for the videoteca service.
//!
//! Holds the error taxonomy and the request-field validation helpers.
//! No HTTP or database dependencies live here.

pub mod error;
pub mod validation;
