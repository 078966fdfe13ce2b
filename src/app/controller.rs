//! Application Controller für zentrale Event-Verarbeitung.

use super::{EditorCommand, EditorEvent, EditorState};

/// Orchestriert UI-Events und Handler auf den EditorState.
///
/// Jeder Schritt ist total: Probleme landen als Effekt in der Outbox.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein Event über Event->Command Mapping.
    pub fn handle_event(&mut self, state: &mut EditorState, event: EditorEvent) {
        let commands = self.map_event_to_commands(state, event);
        for command in commands {
            self.handle_command(state, command);
        }
    }

    fn map_event_to_commands(&self, state: &EditorState, event: EditorEvent) -> Vec<EditorCommand> {
        super::intent_mapping::map_event_to_commands(state, event)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut EditorState, command: EditorCommand) {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Bild ===
            EditorCommand::LoadImage { uri, project_id } => {
                handlers::image::load(state, uri, project_id)
            }
            EditorCommand::ResetEditor => handlers::image::reset(state),

            // === Live-Werte ===
            EditorCommand::SetLiveValue { id, value } => {
                handlers::adjust::set_live_value(state, id, value)
            }

            // === Queue & Rezepte ===
            EditorCommand::EnqueueCommand { id, value } => {
                handlers::queue::enqueue(state, id, value)
            }
            EditorCommand::DequeueCommand { id } => handlers::queue::dequeue(state, id),
            EditorCommand::SetQueueParameter {
                id,
                parameter,
                value,
            } => handlers::queue::set_parameter(state, id, parameter, value),
            EditorCommand::ApplyBatch { recipe, steps } => {
                handlers::queue::apply_batch(state, recipe, steps)
            }
            EditorCommand::ClearQueue => handlers::queue::clear(state),

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),
            EditorCommand::JumpTo { index } => handlers::history::jump_to(state, index),

            // === Modus & Maske ===
            EditorCommand::EnterFocusMode { mode } => handlers::mode::enter(state, mode),
            EditorCommand::ExitFocusMode => handlers::mode::exit(state),
            EditorCommand::AddMaskStroke { points } => handlers::mask::add_stroke(state, points),
            EditorCommand::ClearMask => handlers::mask::clear(state),
            EditorCommand::SetBrushSize { size } => handlers::mask::set_brush_size(state, size),

            // === Jobs ===
            EditorCommand::StartGeneration => handlers::processing::start_generation(state),
            EditorCommand::ApplyJobUpdate(update) => {
                handlers::processing::apply_update(state, update)
            }
            EditorCommand::ExportResult => handlers::processing::export_result(state),
            EditorCommand::ReportError { message } => {
                handlers::processing::report_error(state, message)
            }
        }
    }
}
