//! Mapping von UI-Events auf mutierende Editor-Commands.
//!
//! Die Ausführungsart aus dem Katalog bestimmt, wie ein Tool geroutet wird.

use super::events::BatchStep;
use super::{EditorCommand, EditorEvent, EditorState};
use crate::core::CommandValue;
use crate::registry::{self, CommandDescriptor, CommandId, ExecutionType};

/// Übersetzt ein `EditorEvent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_event_to_commands(state: &EditorState, event: EditorEvent) -> Vec<EditorCommand> {
    match event {
        EditorEvent::LoadImage { uri, project_id } => {
            vec![EditorCommand::LoadImage { uri, project_id }]
        }
        EditorEvent::ToggleLiveValue { id, value } | EditorEvent::ToggleQueueCommand { id, value } => {
            route_tool(state, id, value)
        }
        EditorEvent::SetToolParameter {
            id,
            parameter,
            value,
        } => vec![EditorCommand::SetQueueParameter {
            id,
            parameter,
            value,
        }],
        EditorEvent::ApplyRecipe { id } => match registry::tool_by_id(id) {
            Some(tool) if tool.execution == ExecutionType::Recipe => vec![batch(tool)],
            _ => {
                log::warn!("{} ist kein Rezept", id);
                vec![]
            }
        },
        EditorEvent::ClearQueue => vec![EditorCommand::ClearQueue],
        EditorEvent::Undo => vec![EditorCommand::Undo],
        EditorEvent::Redo => vec![EditorCommand::Redo],
        EditorEvent::JumpTo { index } => vec![EditorCommand::JumpTo { index }],
        EditorEvent::EnterMode { mode } => vec![EditorCommand::EnterFocusMode { mode }],
        EditorEvent::ExitMode => vec![EditorCommand::ExitFocusMode],
        EditorEvent::AddMaskStroke { points } => vec![EditorCommand::AddMaskStroke { points }],
        EditorEvent::ClearMask => vec![EditorCommand::ClearMask],
        EditorEvent::SetBrushSize { size } => vec![EditorCommand::SetBrushSize { size }],
        EditorEvent::Generate => vec![EditorCommand::StartGeneration],
        EditorEvent::SaveResult => vec![EditorCommand::ExportResult],
        EditorEvent::ResetEditor => vec![EditorCommand::ResetEditor],
    }
}

/// Routet einen Tool-Wert anhand der Ausführungsart des Tools.
fn route_tool(state: &EditorState, id: CommandId, value: CommandValue) -> Vec<EditorCommand> {
    let Some(tool) = registry::tool_by_id(id) else {
        log::warn!("Unbekanntes Tool: {}", id);
        return vec![];
    };

    match tool.execution {
        ExecutionType::Live => vec![EditorCommand::SetLiveValue { id, value }],
        ExecutionType::Queue => match tool.queue_value(&value) {
            Some(value) => vec![EditorCommand::EnqueueCommand { id, value }],
            None => vec![EditorCommand::DequeueCommand { id }],
        },
        ExecutionType::Mode => {
            let Some(mode) = tool.focus_mode else {
                return vec![];
            };
            if value.as_bool() {
                vec![EditorCommand::EnterFocusMode { mode }]
            } else if state.mode.focus_mode() == Some(mode) {
                vec![EditorCommand::ExitFocusMode]
            } else {
                vec![]
            }
        }
        ExecutionType::Recipe if value.as_bool() => vec![batch(tool)],
        ExecutionType::Recipe => vec![],
    }
}

/// Klassifiziert alle Schritte eines Rezepts für einen einzigen Batch-Command.
fn batch(recipe: &CommandDescriptor) -> EditorCommand {
    let steps = recipe
        .steps
        .iter()
        .filter_map(|step| {
            registry::tool_by_id(step.id).map(|tool| BatchStep {
                id: step.id,
                execution: tool.execution,
                value: step.value.into(),
            })
        })
        .collect();
    EditorCommand::ApplyBatch {
        recipe: recipe.id,
        steps,
    }
}

#[cfg(test)]
mod tests;
