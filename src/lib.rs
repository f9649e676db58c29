//! # Formline - Terminal JSON Classification Form
//!
//! An interactive terminal form for posting a JSON document to a remote
//! classification endpoint and browsing a filtered view of the response.
//! Built with a small MVVM-style split for maintainability and testability.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Renders    ┌──────────────┐    Mutates    ┌───────────┐
//! │    View     │◄──────────────│  Controller  │──────────────▶│   Model   │
//! │             │               │              │               │           │
//! │ - Terminal  │               │ - Key → Cmd  │               │ - Input   │
//! │ - Results   │               │ - Event Loop │               │ - Response│
//! │   Panel     │               │ - Outcome    │               │ - Error   │
//! └─────────────┘               │   Polling    │               │ - Filters │
//!                               └──────────────┘               └───────────┘
//!                                      ▲
//!                                      │ Outcomes
//!                                      ▼
//!                               ┌──────────────┐
//!                               │ HttpService  │
//!                               │              │
//!                               │ - POST body  │
//!                               │ - mpsc       │
//!                               │   channel    │
//!                               └──────────────┘
//! ```
//!
//! The model and the filtered-view projection are pure and fully testable
//! without a terminal or a network; the controller receives its event source
//! and render sink by injection so the whole flow runs headless in tests.

pub mod cmd_args;
pub mod config;
pub mod form;
pub mod http;
pub mod repl;

// Re-export main types for easy access
pub use form::{FilterSelection, FilterTag, FilteredView, FormModel, SubmitError};
pub use http::{HttpService, OutcomeMessage};
pub use repl::AppController;
