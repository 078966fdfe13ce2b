//! Feature-Handler für EditorCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod adjust;
pub mod history;
pub mod image;
pub mod mask;
pub mod mode;
pub mod processing;
pub mod queue;

use super::mode_machine::{ModeError, ModeEvent};
use super::EditorState;

/// Meldet einen unzulässigen Moduswechsel als Fehler-Effekt.
pub(crate) fn reject(state: &mut EditorState, err: ModeError) {
    log::debug!("Abgelehnt: {}", err);
    state.outbox.error(err.user_message());
}

/// Gemeinsamer Einstieg jeder Bearbeitung.
///
/// Prüft, ob im aktuellen Modus bearbeitet werden darf, und verlässt `Processed`.
pub(crate) fn begin_edit(state: &mut EditorState) -> bool {
    match state.mode.transition(ModeEvent::EditStarted) {
        Ok(_) => true,
        Err(err) => {
            reject(state, err);
            false
        }
    }
}
