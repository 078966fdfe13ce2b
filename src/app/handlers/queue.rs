//! Handler für die Queue der Server-Tools und für Rezepte.

use crate::app::events::{BatchStep, HapticFeedback};
use crate::app::EditorState;
use crate::core::CommandValue;
use crate::registry::{self, CommandId, ExecutionType, ToolParameter};

/// Reiht ein Tool ein oder aktualisiert seinen Wert.
pub fn enqueue(state: &mut EditorState, id: CommandId, value: CommandValue) {
    if !super::begin_edit(state) {
        return;
    }
    state.queue.enqueue(id, value);
    state.outbox.haptic(HapticFeedback::Selection);
    log::info!("Queue: {}", state.queue.summary());
}

/// Entfernt ein Tool aus der Queue.
pub fn dequeue(state: &mut EditorState, id: CommandId) {
    if !super::begin_edit(state) {
        return;
    }
    if state.queue.dequeue(id) {
        state.outbox.haptic(HapticFeedback::Selection);
        log::info!("Aus Queue entfernt: {}", id);
    } else {
        log::debug!("{} war nicht in der Queue", id);
    }
}

/// Setzt einen Zusatzparameter eines wartenden Tools.
pub fn set_parameter(state: &mut EditorState, id: CommandId, parameter: ToolParameter, value: f64) {
    if state.queue.set_parameter(id, parameter, value) {
        log::debug!("{}: Parameter {:?} = {}", id, parameter, value);
    } else {
        log::debug!("Parameter für nicht eingereihtes Tool {} ignoriert", id);
    }
}

/// Verwirft alle wartenden Tools.
pub fn clear(state: &mut EditorState) {
    if state.queue.is_empty() {
        log::debug!("Queue bereits leer");
        return;
    }
    state.queue.clear();
    state.outbox.haptic(HapticFeedback::Selection);
    log::info!("Queue geleert");
}

/// Wendet die Schritte eines Rezepts als ein Batch an.
///
/// Live-Schritte ergeben zusammen höchstens einen History-Eintrag.
pub fn apply_batch(state: &mut EditorState, recipe: CommandId, steps: Vec<BatchStep>) {
    if !super::begin_edit(state) {
        return;
    }

    let mut next = state.settings.clone();
    for step in &steps {
        match step.execution {
            ExecutionType::Live => {
                match registry::tool_by_id(step.id).and_then(|tool| tool.field) {
                    Some(field) => {
                        next.apply(field, &step.value);
                    }
                    None => log::warn!("Rezept {}: {} ohne Settings-Feld", recipe, step.id),
                }
            }
            ExecutionType::Queue => {
                let normalized = registry::tool_by_id(step.id)
                    .and_then(|tool| tool.queue_value(&step.value));
                match normalized {
                    Some(value) => state.queue.enqueue(step.id, value),
                    None => {
                        state.queue.dequeue(step.id);
                    }
                }
            }
            ExecutionType::Mode | ExecutionType::Recipe => {
                log::warn!("Rezept {}: Schritt {} übersprungen", recipe, step.id);
            }
        }
    }

    state.commit_settings(next);
    state.outbox.haptic(HapticFeedback::Selection);
    log::info!(
        "Rezept {} angewendet ({} Schritte), Queue: {}",
        recipe,
        steps.len(),
        state.queue.summary()
    );
}
