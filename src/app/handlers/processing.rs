//! Handler für Generate, Job-Updates und Export.

use crate::app::events::{EditorEffect, HapticFeedback};
use crate::app::mode_machine::{ModeError, ModeEvent};
use crate::app::queue::{merge_entries, QueueEntry};
use crate::app::state::ActiveJob;
use crate::app::EditorState;
use crate::core::{MaskPayload, SettingsRecord};
use crate::jobs::{CompletedJob, GenerationRequest, JobError, JobUpdate, JobUpdateKind};
use crate::registry::CommandId;
use indexmap::IndexMap;

/// Erfolgsmeldung nach einem abgeschlossenen Job.
pub const SUCCESS_MESSAGE: &str = "Image processed successfully";
/// Meldung, wenn es noch nichts zu exportieren gibt.
pub const NOTHING_TO_SAVE_MESSAGE: &str = "Nothing to save yet.";

/// Flusht die Queue und bereitet eine Job-Anfrage vor.
///
/// Läuft bereits ein Job, wird das Event still ignoriert.
pub fn start_generation(state: &mut EditorState) {
    if state.processing.is_active() {
        log::debug!("Generate ignoriert: Job läuft bereits");
        return;
    }
    if !state.mode.can_transition(ModeEvent::GenerateSucceeded) {
        let err = ModeError::IllegalTransition {
            from: state.mode(),
            event: ModeEvent::GenerateSucceeded,
        };
        super::reject(state, err);
        return;
    }

    let summary = state.queue.summary();
    let payload = state.queue.flush(&state.settings, &state.mask.strokes);
    let consumed_mask = payload.mask.is_some();
    log::info!(
        "Generate: {} (Maske: {})",
        if summary.is_empty() { "-" } else { summary.as_str() },
        consumed_mask
    );
    begin(state, payload.settings, payload.mask, payload.entries);
}

/// Generiert die übernommenen Settings erneut, ohne Queue und Maske.
pub fn regenerate_committed(state: &mut EditorState) {
    if state.processing.is_active() {
        log::debug!("Automatische Generierung übersprungen: Job läuft");
        return;
    }
    log::info!("Automatische Generierung nach History-Wechsel");
    let settings = state.settings.clone();
    begin(state, settings, None, IndexMap::new());
}

fn begin(
    state: &mut EditorState,
    settings: SettingsRecord,
    mask: Option<MaskPayload>,
    entries: IndexMap<CommandId, QueueEntry>,
) {
    let ticket = state.processing.next_ticket();
    let request = GenerationRequest {
        ticket,
        project_id: state
            .image
            .as_ref()
            .and_then(|image| image.project_id.clone()),
        settings,
        mask,
    };
    let job = ActiveJob {
        ticket,
        entries,
        submitted_mask: request.mask.as_ref().map(|_| state.mask.submission()),
    };
    state.processing.begin(job, request);
}

/// Übernimmt Fortschritt oder Ergebnis des laufenden Jobs.
///
/// Updates anderer Kennungen werden verworfen.
pub fn apply_update(state: &mut EditorState, update: JobUpdate) {
    if !state.processing.is_current(update.ticket) {
        log::debug!("Veraltetes Update für Job {} verworfen", update.ticket);
        return;
    }

    match update.kind {
        JobUpdateKind::Step(step) => {
            state.processing.step = step;
            log::debug!("Job {}: {:?}", update.ticket, step);
        }
        JobUpdateKind::Completed(done) => {
            if let Some(job) = state.processing.finish() {
                complete(state, job, done);
            }
        }
        JobUpdateKind::Failed(err) => {
            if let Some(job) = state.processing.finish() {
                fail(state, job, err);
            }
        }
    }
}

fn complete(state: &mut EditorState, job: ActiveJob, done: CompletedJob) {
    let settings = merge_entries(&state.settings, &job.entries);
    state.commit_settings(settings);
    state.result_url = Some(done.result_url);
    if let Some(submission) = job.submitted_mask {
        let removed = state.mask.remove_submitted(submission);
        log::debug!("{} abgeschickte Maskenstriche entfernt", removed);
    }
    if let Err(err) = state.mode.transition(ModeEvent::GenerateSucceeded) {
        log::warn!("Ergebnis ohne Moduswechsel übernommen: {}", err);
    }

    state.outbox.success(SUCCESS_MESSAGE);
    state.outbox.haptic(HapticFeedback::Success);
    log::info!("Job {} ({}) übernommen", job.ticket, done.job_id);
}

fn fail(state: &mut EditorState, job: ActiveJob, err: JobError) {
    let requeued = job.entries.len();
    state.queue.restore(job.entries);
    state.outbox.error(err.user_message());
    state.outbox.haptic(HapticFeedback::Error);
    log::warn!(
        "Job {} fehlgeschlagen: {} ({} Tools zurück in der Queue)",
        job.ticket,
        err,
        requeued
    );
}

/// Gibt das letzte Ergebnis zum Speichern/Teilen frei.
pub fn export_result(state: &mut EditorState) {
    match state.result_url.clone() {
        Some(url) => {
            log::info!("Export: {}", url);
            state.outbox.push(EditorEffect::ExportResult { url });
            state.outbox.haptic(HapticFeedback::Selection);
        }
        None => state.outbox.error(NOTHING_TO_SAVE_MESSAGE),
    }
}

/// Zeigt eine Fehlermeldung ohne Zustandsänderung.
pub fn report_error(state: &mut EditorState, message: String) {
    log::warn!("Fehler gemeldet: {}", message);
    state.outbox.error(message);
}
