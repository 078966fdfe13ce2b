//! Event-in/Effekt-out Fassade, an die sich jedes Frontend bindet.

use super::events::{EditorEffect, HapticFeedback};
use super::{CommandLog, EditorCommand, EditorController, EditorEvent, EditorSnapshot, EditorState};
use crate::core::{EditorMode, SettingsRecord};
use crate::jobs::{GenerationRequest, JobTicket, JobUpdate, ProcessingStep};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Empfänger einmaliger UI-Signale (Toast, Export).
pub trait EffectSink: Send + Sync {
    fn emit(&self, effect: EditorEffect);
}

/// Empfänger haptischer Rückmeldungen.
pub trait HapticSink: Send + Sync {
    fn trigger(&self, feedback: HapticFeedback);
}

/// Eine Editor-Session: besitzt den gesamten Zustand, serialisiert alle Mutationen.
pub struct EditorSession {
    state: EditorState,
    controller: EditorController,
    effects: Arc<dyn EffectSink>,
    haptics: Arc<dyn HapticSink>,
}

impl EditorSession {
    pub fn new(
        options: EditorOptions,
        effects: Arc<dyn EffectSink>,
        haptics: Arc<dyn HapticSink>,
    ) -> Self {
        log::debug!("Neue Editor-Session (History-Tiefe {})", options.history_depth);
        Self {
            state: EditorState::with_options(options),
            controller: EditorController::new(),
            effects,
            haptics,
        }
    }

    /// Verarbeitet ein UI-Event. Scheitert nie; Probleme werden als Effekt gemeldet.
    pub fn dispatch(&mut self, event: EditorEvent) {
        log::trace!("Event: {:?}", event);
        self.controller.handle_event(&mut self.state, event);
        self.flush_outbox();
    }

    /// Übernimmt Fortschritt oder Ergebnis eines Jobs.
    pub fn apply_job_update(&mut self, update: JobUpdate) {
        self.execute(EditorCommand::ApplyJobUpdate(update));
    }

    /// Zeigt eine Fehlermeldung aus einer Quelle außerhalb der Session.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.execute(EditorCommand::ReportError {
            message: message.into(),
        });
    }

    /// Entnimmt die vorbereitete Job-Anfrage nach einem Generate.
    pub fn take_generation_request(&mut self) -> Option<GenerationRequest> {
        self.state.processing.pending_request.take()
    }

    /// Kennung des laufenden Jobs.
    pub fn active_job(&self) -> Option<JobTicket> {
        self.state.processing.active_ticket()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::capture(&self.state)
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Zuletzt ausgeführte Commands in Reihenfolge.
    pub fn command_log(&self) -> &CommandLog {
        &self.state.command_log
    }

    pub fn options(&self) -> &EditorOptions {
        &self.state.options
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode()
    }

    pub fn settings(&self) -> &SettingsRecord {
        &self.state.settings
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing()
    }

    pub fn processing_step(&self) -> ProcessingStep {
        self.state.processing.step
    }

    pub fn result_url(&self) -> Option<&str> {
        self.state.result_url.as_deref()
    }

    fn execute(&mut self, command: EditorCommand) {
        self.controller.handle_command(&mut self.state, command);
        self.flush_outbox();
    }

    fn flush_outbox(&mut self) {
        let (effects, haptics) = self.state.outbox.drain();
        for feedback in haptics {
            self.haptics.trigger(feedback);
        }
        for effect in effects {
            self.effects.emit(effect);
        }
    }
}
