use crate::app::{EditorCommand, EditorEvent, EditorState};
use crate::core::{CommandValue, FocusMode};
use crate::registry::{CommandId, ExecutionType};

use super::map_event_to_commands;

#[test]
fn live_tool_maps_to_set_live_value() {
    let state = EditorState::new();

    let commands = map_event_to_commands(&state, EditorEvent::live(CommandId::Brightness, 1.2_f64));

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditorCommand::SetLiveValue {
            id: CommandId::Brightness,
            ..
        }
    ));
}

#[test]
fn queue_toggle_off_maps_to_dequeue() {
    let state = EditorState::new();

    let commands = map_event_to_commands(&state, EditorEvent::queue(CommandId::Colorize, false));

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditorCommand::DequeueCommand {
            id: CommandId::Colorize
        }
    ));
}

#[test]
fn upscale_value_is_normalized_before_enqueue() {
    let state = EditorState::new();

    let commands = map_event_to_commands(&state, EditorEvent::queue(CommandId::UpscaleX, 3.4_f64));

    match &commands[..] {
        [EditorCommand::EnqueueCommand { id, value }] => {
            assert_eq!(*id, CommandId::UpscaleX);
            assert_eq!(*value, CommandValue::Number(4.0));
        }
        other => panic!("unerwartete Commands: {other:?}"),
    }
}

#[test]
fn mode_tool_toggle_enters_focus_mode() {
    let state = EditorState::new();

    let commands = map_event_to_commands(&state, EditorEvent::queue(CommandId::MagicEraser, true));

    assert!(matches!(
        commands[..],
        [EditorCommand::EnterFocusMode {
            mode: FocusMode::Masking
        }]
    ));
}

#[test]
fn mode_tool_off_without_active_mode_maps_to_nothing() {
    let state = EditorState::new();

    let commands = map_event_to_commands(&state, EditorEvent::queue(CommandId::Crop, false));

    assert!(commands.is_empty());
}

#[test]
fn recipe_expands_to_single_batch_in_declaration_order() {
    let state = EditorState::new();

    let commands = map_event_to_commands(
        &state,
        EditorEvent::ApplyRecipe {
            id: CommandId::OldPhoto,
        },
    );

    assert_eq!(commands.len(), 1);
    let EditorCommand::ApplyBatch { recipe, steps } = &commands[0] else {
        panic!("Batch erwartet");
    };
    assert_eq!(*recipe, CommandId::OldPhoto);
    let ids: Vec<_> = steps.iter().map(|step| step.id).collect();
    assert_eq!(
        ids,
        vec![
            CommandId::FaceRestoration,
            CommandId::RemoveScratches,
            CommandId::Colorize
        ]
    );
    assert!(steps
        .iter()
        .all(|step| step.execution == ExecutionType::Queue));
}

#[test]
fn apply_recipe_with_plain_tool_is_ignored() {
    let state = EditorState::new();

    let commands = map_event_to_commands(
        &state,
        EditorEvent::ApplyRecipe {
            id: CommandId::Dehaze,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn generate_and_save_map_to_commands() {
    let state = EditorState::new();

    assert!(matches!(
        map_event_to_commands(&state, EditorEvent::Generate)[..],
        [EditorCommand::StartGeneration]
    ));
    assert!(matches!(
        map_event_to_commands(&state, EditorEvent::SaveResult)[..],
        [EditorCommand::ExportResult]
    ));
}
