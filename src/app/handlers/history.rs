//! Handler für Undo/Redo/Sprung in der Settings-History.

use crate::app::events::HapticFeedback;
use crate::app::EditorState;
use crate::core::SettingsRecord;
use fixpix_history::HistoryStack;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut EditorState) {
    navigate(state, "Undo", |history| history.undo().cloned());
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    navigate(state, "Redo", |history| history.redo().cloned());
}

/// Springt direkt zu einem History-Eintrag.
pub fn jump_to(state: &mut EditorState, index: usize) {
    navigate(state, "Sprung", |history| history.jump_to(index).cloned());
}

fn navigate(
    state: &mut EditorState,
    label: &str,
    step: impl FnOnce(&mut HistoryStack<SettingsRecord>) -> Option<SettingsRecord>,
) {
    let Some(settings) = step(&mut state.history) else {
        log::debug!("{}: nichts zu tun", label);
        return;
    };

    let changed = settings != state.settings;
    state.settings = settings;
    state.outbox.haptic(HapticFeedback::Selection);
    log::info!(
        "{} ausgeführt ({}/{})",
        label,
        state.history.index().map_or(0, |index| index + 1),
        state.history.len()
    );

    if changed && state.options.auto_regenerate_on_history_change {
        super::processing::regenerate_committed(state);
    }
}
