//! Handler für Live-Werte (Regler, Schalter, Filter).

use crate::app::events::HapticFeedback;
use crate::app::EditorState;
use crate::core::CommandValue;
use crate::registry::{self, CommandId};

/// Schreibt einen Live-Wert (geklemmt) in die Settings und legt einen History-Eintrag an.
pub fn set_live_value(state: &mut EditorState, id: CommandId, value: CommandValue) {
    let Some(field) = registry::tool_by_id(id).and_then(|tool| tool.field) else {
        log::warn!("Live-Wert für Tool ohne Settings-Feld ignoriert: {}", id);
        return;
    };
    if !super::begin_edit(state) {
        return;
    }

    let mut next = state.settings.clone();
    if !next.apply(field, &value) {
        log::debug!("{}: Wert unverändert", id);
        return;
    }
    state.commit_settings(next);
    state.outbox.haptic(HapticFeedback::Selection);
    log::debug!("{} = {:?}", id, state.settings.value_of(field));
}
