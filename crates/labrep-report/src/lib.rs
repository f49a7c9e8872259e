//! labrep-report
//!
//! Lab report composition. Pure data in, pure data out: turns a patient's
//! ordered tests and recorded results into paginated, print-ready pages.
//! Resolves reference ranges per demographic, classifies flagged results and
//! keeps the patient header on every page.

pub mod classify;
pub mod compose;
pub mod error;
pub mod grouping;
pub mod index;
pub mod options;
pub mod paginate;
pub mod range;
pub mod rows;

pub use compose::{compose, compose_document, compose_snapshot};
pub use options::{LayoutMode, ReportOptions};
