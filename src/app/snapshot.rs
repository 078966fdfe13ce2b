//! Serialisierbare Read-only-Sicht auf den Editor für Frontends.

use super::queue::QueueEntry;
use super::EditorState;
use crate::core::{EditorMode, SettingsRecord};
use crate::jobs::ProcessingStep;
use crate::registry::{CommandId, Conflict};
use fixpix_history::HistoryCursor;
use indexmap::IndexMap;
use serde::Serialize;

/// Momentaufnahme des gesamten Editor-Zustands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSnapshot {
    pub mode: EditorMode,
    pub image_uri: Option<String>,
    pub settings: SettingsRecord,
    pub history: HistoryCursor,
    pub queue: IndexMap<CommandId, QueueEntry>,
    pub queue_summary: String,
    pub conflicts: Vec<Conflict>,
    pub mask_strokes: usize,
    pub brush_size: f32,
    pub is_processing: bool,
    pub processing_step: ProcessingStep,
    pub result_url: Option<String>,
}

impl EditorSnapshot {
    pub fn capture(state: &EditorState) -> Self {
        Self {
            mode: state.mode(),
            image_uri: state.image.as_ref().map(|image| image.uri.clone()),
            settings: state.settings.clone(),
            history: state.history.cursor(),
            queue: state.queue.entries().clone(),
            queue_summary: state.queue.summary(),
            conflicts: state.queue.conflicts(state.active_mode_tool()),
            mask_strokes: state.mask.strokes.len(),
            brush_size: state.mask.brush_size,
            is_processing: state.is_processing(),
            processing_step: state.processing.step,
            result_url: state.result_url.clone(),
        }
    }
}
