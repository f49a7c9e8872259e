//! labrep-core
//!
//! Pure domain types for lab report composition: the patient/test/result
//! snapshot handed over by the record service, and the print-ready document
//! model handed to the renderer. No composition logic lives here.

pub mod de;
pub mod error;
pub mod models;
