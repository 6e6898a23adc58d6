//! # Core Application Logic
//!
//! This module contains learnlist's list logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Entry (data)         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view() (view model)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   markup   │
//!           │  Adapter   │              │   (HTML)   │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: The `Entry` struct, one `{label, url}` pair
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`view`]: `view()`, the pure projection renderers consume
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod entry;
pub mod state;
pub mod view;

pub use action::{Action, Effect, update};
pub use entry::Entry;
pub use state::{App, ListPhase};
pub use view::{ItemView, ListViewModel, view};
