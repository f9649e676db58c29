//! # Form Core
//!
//! The model and pure projections behind the form: input validation,
//! submission state, filter selection, and the derived filtered view.
//! Nothing in this module performs I/O.

pub mod error;
pub mod filter;
pub mod model;
pub mod payload;

pub use error::SubmitError;
pub use filter::{FilterSelection, FilterTag, FilteredView};
pub use model::FormModel;
pub use payload::validate_payload;
