//! Handler für Pinselstriche im Masking-Modus.

use crate::app::events::HapticFeedback;
use crate::app::EditorState;
use crate::core::{clamp_brush_size, EditorMode, MaskPath, MaskPoint};

/// Meldung, wenn außerhalb des Masking-Modus gemalt wird.
pub const NOT_MASKING_MESSAGE: &str = "Select Magic Eraser to paint a mask.";

/// Fügt einen Pinselstrich mit der aktuellen Pinselgröße hinzu.
pub fn add_stroke(state: &mut EditorState, points: Vec<MaskPoint>) {
    if state.mode() != EditorMode::Masking {
        log::debug!("Pinselstrich im Modus {} verworfen", state.mode());
        state.outbox.error(NOT_MASKING_MESSAGE);
        return;
    }
    if points.is_empty() {
        log::debug!("Leerer Pinselstrich ignoriert");
        return;
    }
    state
        .mask
        .strokes
        .push(MaskPath::new(points, state.mask.brush_size));
    log::debug!("Maske: {} Striche", state.mask.strokes.len());
}

/// Verwirft alle Pinselstriche.
pub fn clear(state: &mut EditorState) {
    if state.mask.is_empty() {
        log::debug!("Maske bereits leer");
        return;
    }
    state.mask.clear();
    state.outbox.haptic(HapticFeedback::Impact);
    log::info!("Maske gelöscht");
}

/// Setzt die Pinselgröße (geklemmt).
pub fn set_brush_size(state: &mut EditorState, size: f32) {
    state.mask.brush_size = clamp_brush_size(size);
    log::debug!("Pinselgröße: {}", state.mask.brush_size);
}
