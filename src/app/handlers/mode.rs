//! Handler für Fokus-Modi (Masking, Cropping).

use crate::app::events::HapticFeedback;
use crate::app::mode_machine::ModeEvent;
use crate::app::EditorState;
use crate::core::FocusMode;

/// Betritt einen Fokus-Modus. Erneutes Betreten ist ein No-op.
pub fn enter(state: &mut EditorState, mode: FocusMode) {
    let before = state.mode();
    match state.mode.transition(ModeEvent::enter(mode)) {
        Ok(after) if after != before => state.outbox.haptic(HapticFeedback::Selection),
        Ok(_) => {}
        Err(err) => super::reject(state, err),
    }
}

/// Verlässt den aktiven Fokus-Modus.
///
/// Ohne Fokus-Modus entscheidet die Übergangstabelle: in `Default` ein stiller
/// No-op, in `Empty` und `Processed` ein Fehler.
pub fn exit(state: &mut EditorState) {
    let Some(mode) = state.mode.focus_mode() else {
        match state.mode.transition(ModeEvent::ExitMask) {
            Ok(_) => log::debug!("Kein Fokus-Modus aktiv"),
            Err(err) => super::reject(state, err),
        }
        return;
    };
    if let Err(err) = state.mode.transition(ModeEvent::exit(mode)) {
        super::reject(state, err);
        return;
    }

    if mode == FocusMode::Masking && !state.options.keep_mask_on_exit && !state.mask.is_empty() {
        log::info!("Maske verworfen ({} Striche)", state.mask.strokes.len());
        state.mask.clear();
    }
    state.outbox.haptic(HapticFeedback::Selection);
}
