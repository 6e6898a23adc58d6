//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: heading and status line
//! - `FetchButton`: the trigger control
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `EntryList`: the ordered list of links, with selection kept in
//!   `EntryListState`
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(vm.heading.to_string(), vm.status.clone(), false).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! title_bar.render(frame, area); // reads from App
//! ```

pub mod entry_list;
pub mod fetch_button;
mod title_bar;

pub use entry_list::{EntryList, EntryListEvent, EntryListState};
pub use fetch_button::{BUTTON_HEIGHT, FetchButton};
pub use title_bar::TitleBar;
