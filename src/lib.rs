//! FixPix Editor Engine.
//! Einstellungs-, History- und Job-Logik des Foto-Editors als Library für alle Frontends.

pub mod app;
pub mod bridge;
pub mod core;
pub mod jobs;
pub mod registry;
pub mod shared;

pub use app::{
    EditorCommand, EditorController, EditorEffect, EditorEvent, EditorSession, EditorSnapshot,
    EditorState, EffectSink, HapticFeedback, HapticSink,
};
pub use bridge::{CollectingSink, LogSink, SliderDebouncer};
pub use core::{CommandValue, EditorMode, FocusMode, MaskPoint, SettingsRecord};
pub use fixpix_history::HistoryStack;
pub use jobs::{
    HttpBackend, JobBackend, JobError, JobPoller, JobUpdate, ProcessingStep, SessionRuntime,
    SimulatedBackend,
};
pub use registry::{CommandId, ExecutionType, Zone};
pub use shared::EditorOptions;
