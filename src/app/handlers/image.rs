//! Handler für Bildwechsel und Reset.

use crate::app::events::HapticFeedback;
use crate::app::mode_machine::ModeEvent;
use crate::app::state::LoadedImage;
use crate::app::EditorState;
use crate::core::{EditorMode, SettingsRecord};

/// Öffnet ein Bild und setzt den gesamten Editor-Zustand zurück.
///
/// Ein laufender Job wird aufgegeben; seine Updates gelten danach als veraltet.
pub fn load(state: &mut EditorState, uri: String, project_id: Option<String>) {
    if let Err(err) = state.mode.transition(ModeEvent::LoadImage) {
        super::reject(state, err);
        return;
    }

    if let Some(abandoned) = state.processing.finish() {
        log::info!("Job {} wegen Bildwechsel aufgegeben", abandoned.ticket);
    }

    let defaults = SettingsRecord::default();
    state.settings = defaults.clone();
    state.history.reset(defaults);
    state.queue.clear();
    state.mask.reset(state.options.default_brush_size);
    state.result_url = None;

    log::info!(
        "Bild geladen: {} (Projekt: {})",
        uri,
        project_id.as_deref().unwrap_or("-")
    );
    state.image = Some(LoadedImage { uri, project_id });
}

/// Setzt Einstellungen, Maske und Queue zurück und legt die Standardwerte
/// als neuen History-Eintrag ab. Das letzte Ergebnis bleibt erhalten,
/// ein laufender Job wird aufgegeben.
pub fn reset(state: &mut EditorState) {
    if let Err(err) = state.mode.transition(ModeEvent::Reset) {
        super::reject(state, err);
        return;
    }
    if state.mode() == EditorMode::Empty {
        log::debug!("Reset ohne Bild: nichts zu tun");
        return;
    }
    if let Some(abandoned) = state.processing.finish() {
        log::info!("Job {} wegen Reset aufgegeben", abandoned.ticket);
    }

    let defaults = SettingsRecord::default();
    state.settings = defaults.clone();
    state.history.push(defaults);
    state.mask.clear();
    state.queue.clear();
    state.outbox.haptic(HapticFeedback::Impact);
    log::info!("Editor zurückgesetzt");
}
