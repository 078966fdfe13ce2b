//! Editor State — zentrale Datenhaltung einer Session.

mod mask;
mod outbox;
mod processing;

pub use mask::{MaskState, MaskSubmission};
pub use outbox::Outbox;
pub use processing::{ActiveJob, ProcessingState};

use super::mode_machine::EditorModeMachine;
use super::queue::CommandQueue;
use super::CommandLog;
use crate::core::{EditorMode, SettingsRecord};
use crate::registry::{self, CommandId};
use crate::shared::EditorOptions;
use fixpix_history::HistoryStack;

/// Aktuell geöffnetes Bild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    /// Quelle für die Vorschau (lokaler Pfad oder URL)
    pub uri: String,
    /// Backend-Projekt aus dem Upload, ohne Projekt kein Job
    pub project_id: Option<String>,
}

/// Hauptzustand einer Editor-Session
pub struct EditorState {
    /// Geöffnetes Bild (None = Editor leer)
    pub image: Option<LoadedImage>,
    /// Übernommene Einstellungen (Live-Werte und erfolgreiche Jobs)
    pub settings: SettingsRecord,
    /// Undo/Redo-History über Settings-Snapshots
    pub history: HistoryStack<SettingsRecord>,
    /// Interaktionsmodus der Arbeitsfläche
    pub mode: EditorModeMachine,
    /// Wartende Server-Tools bis zum nächsten Generate
    pub queue: CommandQueue,
    /// Pinselstriche des Masking-Modus
    pub mask: MaskState,
    /// Laufender Job und Anzeige-Schritt
    pub processing: ProcessingState,
    /// Ergebnis des letzten erfolgreichen Jobs
    pub result_url: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Noch nicht ausgelieferte Effekte und Haptik
    pub outbox: Outbox,
}

impl EditorState {
    /// Erstellt einen leeren Editor mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Editor. Die History bleibt leer bis zum ersten Bild.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            image: None,
            settings: SettingsRecord::default(),
            history: HistoryStack::new(options.history_depth),
            mode: EditorModeMachine::new(),
            queue: CommandQueue::new(),
            mask: MaskState::new(options.default_brush_size),
            processing: ProcessingState::default(),
            result_url: None,
            command_log: CommandLog::new(),
            options,
            outbox: Outbox::default(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode.mode()
    }

    /// Übernimmt neue Settings und legt sie in der History ab.
    ///
    /// Gibt `false` zurück, wenn sich nichts geändert hat.
    pub fn commit_settings(&mut self, settings: SettingsRecord) -> bool {
        if settings == self.settings {
            return false;
        }
        self.settings = settings.clone();
        self.history.push(settings);
        true
    }

    /// Mode-Tool des aktiven Fokus-Modus (für Konfliktprüfung).
    pub fn active_mode_tool(&self) -> Option<CommandId> {
        self.mode
            .focus_mode()
            .and_then(registry::tool_for_focus_mode)
            .map(|tool| tool.id)
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_active()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
