//! Application-Layer: Session, Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod mode_machine;
pub mod queue;
pub mod session;
pub mod snapshot;
/// Editor State
///
/// Dieses Modul verwaltet den Zustand einer Session (Bild, Settings, History, Queue, Maske).
pub mod state;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::EditorController;
pub use events::{BatchStep, EditorCommand, EditorEffect, EditorEvent, HapticFeedback};
pub use mode_machine::{EditorModeMachine, ModeError, ModeEvent, ModeTransition};
pub use queue::{CommandQueue, FlushPayload, QueueEntry};
pub use session::{EditorSession, EffectSink, HapticSink};
pub use snapshot::EditorSnapshot;
pub use state::{EditorState, LoadedImage};
