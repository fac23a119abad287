//! # TUI Components
//!
//! The three pieces of the single screen:
//!
//! - `TitleBar`: stateless status line at the top
//! - `NoteField`: the text-entry card (stateful — owns the caret)
//! - `CounterLabel`: stateless "N characters left" indicator
//!
//! Stateless components receive everything as props; the note field emits
//! `FieldEvent`s which the event loop converts into core actions. Each
//! component file contains its state, events, rendering, and tests.

mod counter;
pub mod note_field;
mod title_bar;

pub use counter::CounterLabel;
pub use note_field::{EditRequest, FieldEvent, NoteField};
pub use title_bar::TitleBar;
