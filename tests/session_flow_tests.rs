//! Synchrone Abläufe über `EditorSession` ohne Async-Runtime.

use approx::assert_relative_eq;
use fixpix_editor::core::{JobId, MaskPoint};
use fixpix_editor::jobs::{JobError, JobUpdate, ProcessingStep};
use fixpix_editor::{
    CollectingSink, CommandId, CommandValue, EditorEffect, EditorEvent, EditorMode,
    EditorOptions, EditorSession, FocusMode, HapticFeedback,
};
use std::sync::Arc;

fn session() -> (EditorSession, Arc<CollectingSink>) {
    session_with(EditorOptions::default())
}

fn session_with(options: EditorOptions) -> (EditorSession, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let session = EditorSession::new(options, sink.clone(), sink.clone());
    (session, sink)
}

fn loaded() -> (EditorSession, Arc<CollectingSink>) {
    let (mut session, sink) = session();
    session.dispatch(EditorEvent::load_image("file:///photo.jpg"));
    (session, sink)
}

#[test]
fn live_value_is_clamped_and_recorded() {
    let (mut session, sink) = loaded();

    session.dispatch(EditorEvent::live(CommandId::Brightness, 3.0_f64));

    assert_relative_eq!(session.settings().brightness, 1.5);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.history.len, 2);
    assert!(snapshot.history.can_undo);
    assert_eq!(sink.haptics(), vec![HapticFeedback::Selection]);
}

#[test]
fn focus_mode_without_image_is_rejected() {
    let (mut session, sink) = session();

    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });

    assert_eq!(session.mode(), EditorMode::Empty);
    assert_eq!(sink.errors(), vec!["Load an image first.".to_string()]);
}

#[test]
fn edits_without_image_are_rejected() {
    let (mut session, sink) = session();

    session.dispatch(EditorEvent::live(CommandId::Contrast, 1.2_f64));
    session.dispatch(EditorEvent::queue(CommandId::Colorize, true));

    assert!(session.settings().is_default());
    assert!(session.snapshot().queue.is_empty());
    assert_eq!(sink.errors().len(), 2);
}

#[test]
fn generate_flushes_queue_without_touching_committed_settings() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::UpscaleX, 2.0_f64));
    session.dispatch(EditorEvent::queue(CommandId::Colorize, true));

    session.dispatch(EditorEvent::Generate);

    let request = session
        .take_generation_request()
        .expect("Generate sollte eine Anfrage erzeugen");
    assert_eq!(request.settings.upscale_x, 2);
    assert!(request.settings.colorize);
    assert!(request.mask.is_none());
    assert_eq!(session.settings().upscale_x, 1);
    assert!(!session.settings().colorize);
    assert!(session.snapshot().queue.is_empty());
    assert!(session.is_processing());
    assert_eq!(session.processing_step(), ProcessingStep::Analyzing);
}

#[test]
fn recipe_fills_queue_in_order() {
    let (mut session, _sink) = loaded();

    session.dispatch(EditorEvent::ApplyRecipe {
        id: CommandId::OldPhoto,
    });

    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.queue_summary,
        "Face Restoration + Scratch Removal + Colorize Photo"
    );
    // Nur Queue-Schritte: kein neuer History-Eintrag
    assert_eq!(snapshot.history.len, 1);
}

#[test]
fn toggling_queue_tool_off_removes_it() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::Dehaze, true));
    session.dispatch(EditorEvent::queue(CommandId::Dehaze, false));

    assert!(session.snapshot().queue.is_empty());
}

#[test]
fn undo_and_redo_restore_settings() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::live(CommandId::Brightness, 1.2_f64));
    session.dispatch(EditorEvent::live(CommandId::Contrast, 0.8_f64));

    session.dispatch(EditorEvent::Undo);
    assert_relative_eq!(session.settings().contrast, 1.0);
    assert_relative_eq!(session.settings().brightness, 1.2);

    session.dispatch(EditorEvent::Undo);
    assert!(session.settings().is_default());
    assert!(!session.snapshot().history.can_undo);

    session.dispatch(EditorEvent::Redo);
    session.dispatch(EditorEvent::Redo);
    assert_relative_eq!(session.settings().contrast, 0.8);
    assert!(!session.snapshot().history.can_redo);

    session.dispatch(EditorEvent::JumpTo { index: 1 });
    assert_relative_eq!(session.settings().contrast, 1.0);
    assert_relative_eq!(session.settings().brightness, 1.2);
}

#[test]
fn new_edit_after_undo_drops_redo_branch() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::live(CommandId::Brightness, 1.2_f64));
    session.dispatch(EditorEvent::Undo);

    session.dispatch(EditorEvent::live(CommandId::Saturation, 1.5_f64));

    let history = session.snapshot().history;
    assert_eq!(history.len, 2);
    assert!(!history.can_redo);
}

#[test]
fn reset_restores_defaults_and_clears_queue_and_mask() {
    let (mut session, sink) = loaded();
    session.dispatch(EditorEvent::live(CommandId::Brightness, 1.2_f64));
    session.dispatch(EditorEvent::queue(CommandId::Dehaze, true));
    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });
    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(4.0, 4.0)],
    });

    session.dispatch(EditorEvent::ResetEditor);

    let snapshot = session.snapshot();
    assert!(snapshot.settings.is_default());
    assert!(snapshot.queue.is_empty());
    assert_eq!(snapshot.mask_strokes, 0);
    assert_eq!(snapshot.mode, EditorMode::Default);
    assert_eq!(snapshot.history.len, 3);
    assert!(sink.haptics().contains(&HapticFeedback::Impact));
}

#[test]
fn reset_without_image_is_noop() {
    let (mut session, sink) = session();

    session.dispatch(EditorEvent::ResetEditor);

    assert_eq!(session.mode(), EditorMode::Empty);
    assert!(sink.effects().is_empty());
    assert!(sink.haptics().is_empty());
}

#[test]
fn mask_strokes_only_while_masking() {
    let (mut session, sink) = loaded();

    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(1.0, 1.0)],
    });
    assert_eq!(session.snapshot().mask_strokes, 0);
    assert_eq!(
        sink.errors(),
        vec!["Select Magic Eraser to paint a mask.".to_string()]
    );

    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });
    session.dispatch(EditorEvent::SetBrushSize { size: 45.0 });
    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(1.0, 1.0), MaskPoint::new(2.0, 2.0)],
    });
    let snapshot = session.snapshot();
    assert_eq!(snapshot.mask_strokes, 1);
    assert_relative_eq!(snapshot.brush_size, 45.0);

    session.dispatch(EditorEvent::Generate);
    let request = session
        .take_generation_request()
        .expect("Generate im Masking-Modus erlaubt");
    assert_eq!(request.mask.map(|mask| mask.strokes.len()), Some(1));
}

#[test]
fn exit_masking_discards_mask_by_default() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });
    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(1.0, 1.0)],
    });

    session.dispatch(EditorEvent::ExitMode);

    assert_eq!(session.mode(), EditorMode::Default);
    assert_eq!(session.snapshot().mask_strokes, 0);
}

#[test]
fn exit_masking_keeps_mask_when_configured() {
    let options = EditorOptions {
        keep_mask_on_exit: true,
        ..EditorOptions::default()
    };
    let (mut session, _sink) = session_with(options);
    session.dispatch(EditorEvent::load_image("file:///photo.jpg"));
    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });
    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(1.0, 1.0)],
    });

    session.dispatch(EditorEvent::ExitMode);

    assert_eq!(session.snapshot().mask_strokes, 1);
}

#[test]
fn cropping_blocks_masking_and_image_load() {
    let (mut session, sink) = loaded();
    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Cropping,
    });

    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });
    session.dispatch(EditorEvent::load_image("file:///other.jpg"));

    assert_eq!(session.mode(), EditorMode::Cropping);
    assert_eq!(
        session.snapshot().image_uri.as_deref(),
        Some("file:///photo.jpg")
    );
    assert_eq!(sink.errors().len(), 2);
}

#[test]
fn save_without_result_reports_error() {
    let (mut session, sink) = loaded();

    session.dispatch(EditorEvent::SaveResult);

    assert_eq!(sink.errors(), vec!["Nothing to save yet.".to_string()]);
}

#[test]
fn completed_job_commits_result_and_enables_export() {
    let (mut session, sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::FaceRestoration, true));
    session.dispatch(EditorEvent::Generate);
    let request = session.take_generation_request().expect("Anfrage erwartet");

    session.apply_job_update(JobUpdate::step(request.ticket, ProcessingStep::Enhancing));
    assert_eq!(session.processing_step(), ProcessingStep::Enhancing);
    session.apply_job_update(JobUpdate::completed(
        request.ticket,
        JobId("7".into()),
        "https://media.example/7.jpg",
    ));

    assert_eq!(session.mode(), EditorMode::Processed);
    assert!(!session.is_processing());
    assert!(session.settings().face_restoration);
    assert_eq!(session.result_url(), Some("https://media.example/7.jpg"));
    assert_eq!(session.snapshot().history.len, 2);

    session.dispatch(EditorEvent::SaveResult);
    assert!(sink.effects().contains(&EditorEffect::ExportResult {
        url: "https://media.example/7.jpg".into()
    }));
    assert!(sink
        .effects()
        .contains(&EditorEffect::success("Image processed successfully")));
}

#[test]
fn edit_after_result_returns_to_default() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::Generate);
    let request = session.take_generation_request().expect("Anfrage erwartet");
    session.apply_job_update(JobUpdate::completed(request.ticket, JobId("1".into()), "r"));
    assert_eq!(session.mode(), EditorMode::Processed);

    session.dispatch(EditorEvent::live(CommandId::Brightness, 1.1_f64));

    assert_eq!(session.mode(), EditorMode::Default);
}

#[test]
fn failed_job_requeues_tools_and_keeps_newer_values() {
    let (mut session, sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::UpscaleX, 2.0_f64));
    session.dispatch(EditorEvent::queue(CommandId::Dehaze, true));
    session.dispatch(EditorEvent::Generate);
    let request = session.take_generation_request().expect("Anfrage erwartet");

    session.dispatch(EditorEvent::queue(CommandId::UpscaleX, 4.0_f64));
    session.apply_job_update(JobUpdate::failed(
        request.ticket,
        JobError::JobFailed(Some("Face model unavailable".into())),
    ));

    let snapshot = session.snapshot();
    assert!(!snapshot.is_processing);
    assert_eq!(snapshot.processing_step, ProcessingStep::Idle);
    assert_eq!(
        snapshot.queue.get(&CommandId::UpscaleX).map(|e| e.value.clone()),
        Some(CommandValue::Number(4.0))
    );
    assert!(snapshot.queue.contains_key(&CommandId::Dehaze));
    assert!(snapshot.settings.is_default());
    assert_eq!(sink.errors(), vec!["Face model unavailable".to_string()]);
    assert!(sink.haptics().contains(&HapticFeedback::Error));
}

#[test]
fn second_generate_while_running_is_ignored() {
    let (mut session, sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::Colorize, true));

    session.dispatch(EditorEvent::Generate);
    let first = session.active_job();
    session.dispatch(EditorEvent::Generate);

    assert!(session.take_generation_request().is_some());
    assert!(session.take_generation_request().is_none());
    assert_eq!(session.active_job(), first);
    assert!(sink.errors().is_empty());
}

#[test]
fn generate_without_image_is_rejected() {
    let (mut session, sink) = session();

    session.dispatch(EditorEvent::Generate);

    assert!(session.take_generation_request().is_none());
    assert!(!session.is_processing());
    assert_eq!(sink.errors(), vec!["Load an image first.".to_string()]);
}

#[test]
fn load_image_abandons_job_and_ignores_its_updates() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::live(CommandId::Brightness, 1.3_f64));
    session.dispatch(EditorEvent::queue(CommandId::Dehaze, true));
    session.dispatch(EditorEvent::Generate);
    let stale = session.take_generation_request().expect("Anfrage erwartet");

    session.dispatch(EditorEvent::LoadImage {
        uri: "file:///second.jpg".into(),
        project_id: Some("42".into()),
    });
    session.apply_job_update(JobUpdate::completed(
        stale.ticket,
        JobId("old".into()),
        "https://media.example/old.jpg",
    ));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.image_uri.as_deref(), Some("file:///second.jpg"));
    assert!(snapshot.settings.is_default());
    assert!(snapshot.queue.is_empty());
    assert_eq!(snapshot.history.len, 1);
    assert!(!snapshot.is_processing);
    assert!(snapshot.result_url.is_none());
    assert_eq!(snapshot.mode, EditorMode::Default);
}

#[test]
fn snapshot_serializes_for_frontends() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::UpscaleX, 2.0_f64));

    let json = serde_json::to_value(session.snapshot()).expect("Snapshot serialisierbar");

    assert_eq!(json["queue_summary"], "Super Resolution (2x)");
    assert_eq!(json["history"]["len"], 1);
}

#[test]
fn reset_abandons_running_job() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::FaceRestoration, true));
    session.dispatch(EditorEvent::Generate);
    let request = session.take_generation_request().expect("Anfrage erwartet");

    session.dispatch(EditorEvent::ResetEditor);
    assert!(!session.is_processing());
    assert!(session.active_job().is_none());

    session.apply_job_update(JobUpdate::completed(request.ticket, JobId("1".into()), "r"));

    assert!(session.settings().is_default());
    assert!(session.snapshot().queue.is_empty());
    assert_eq!(session.mode(), EditorMode::Default);
    assert!(session.result_url().is_none());
}

#[test]
fn exit_mode_without_focus_mode_follows_transition_table() {
    let (mut session, sink) = session();
    session.dispatch(EditorEvent::ExitMode);
    assert_eq!(session.mode(), EditorMode::Empty);
    assert_eq!(sink.errors(), vec!["Load an image first.".to_string()]);

    let (mut session, sink) = loaded();
    session.dispatch(EditorEvent::ExitMode);
    assert_eq!(session.mode(), EditorMode::Default);
    assert!(sink.errors().is_empty());

    session.dispatch(EditorEvent::Generate);
    let request = session.take_generation_request().expect("Anfrage erwartet");
    session.apply_job_update(JobUpdate::completed(request.ticket, JobId("1".into()), "r"));
    session.dispatch(EditorEvent::ExitMode);
    assert_eq!(session.mode(), EditorMode::Processed);
    assert_eq!(sink.errors().len(), 1);
}

#[test]
fn completed_job_keeps_strokes_drawn_while_running() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::EnterMode {
        mode: FocusMode::Masking,
    });
    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(1.0, 1.0)],
    });
    session.dispatch(EditorEvent::Generate);
    let request = session.take_generation_request().expect("Anfrage erwartet");
    session.dispatch(EditorEvent::AddMaskStroke {
        points: vec![MaskPoint::new(9.0, 9.0)],
    });

    session.apply_job_update(JobUpdate::completed(request.ticket, JobId("1".into()), "r"));

    let strokes = &session.state().mask.strokes;
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].points, vec![MaskPoint::new(9.0, 9.0)]);
}

#[test]
fn command_log_lists_executed_commands() {
    let (mut session, _sink) = loaded();
    session.dispatch(EditorEvent::queue(CommandId::Dehaze, true));
    session.dispatch(EditorEvent::Undo);

    let names: Vec<&str> = session.command_log().iter().map(|entry| entry.name).collect();
    assert_eq!(names, vec!["load_image", "enqueue", "undo"]);
    assert_eq!(
        session.command_log().to_vec()[1].tool,
        Some(CommandId::Dehaze)
    );
}
