//! EditorEvent-, EditorCommand- und EditorEffect-Enums für den Event/Command-Datenfluss.

mod command;
mod effect;
mod event;

pub use command::{BatchStep, EditorCommand};
pub use effect::{EditorEffect, HapticFeedback};
pub use event::EditorEvent;
