use crate::core::{CommandValue, FocusMode, MaskPoint};
use crate::jobs::JobUpdate;
use crate::registry::{CommandId, ExecutionType, ToolParameter};

/// Ein klassifizierter Schritt eines Rezepts.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStep {
    pub id: CommandId,
    pub execution: ExecutionType,
    pub value: CommandValue,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Bild laden und Editor-Zustand zurücksetzen
    LoadImage {
        uri: String,
        project_id: Option<String>,
    },
    /// Live-Wert in die Settings schreiben (mit History-Eintrag)
    SetLiveValue { id: CommandId, value: CommandValue },
    /// Queue-Tool einreihen oder Wert aktualisieren
    EnqueueCommand { id: CommandId, value: CommandValue },
    /// Queue-Tool entfernen
    DequeueCommand { id: CommandId },
    /// Zusatzparameter eines Queue-Tools setzen
    SetQueueParameter {
        id: CommandId,
        parameter: ToolParameter,
        value: f64,
    },
    /// Rezept als ein Batch (höchstens ein History-Eintrag)
    ApplyBatch {
        recipe: CommandId,
        steps: Vec<BatchStep>,
    },
    /// Queue leeren
    ClearQueue,
    /// History einen Schritt zurück
    Undo,
    /// History einen Schritt vor
    Redo,
    /// History-Sprung
    JumpTo { index: usize },
    /// Fokus-Modus betreten
    EnterFocusMode { mode: FocusMode },
    /// Fokus-Modus verlassen
    ExitFocusMode,
    /// Pinselstrich mit aktueller Pinselgröße hinzufügen
    AddMaskStroke { points: Vec<MaskPoint> },
    /// Maske verwerfen
    ClearMask,
    /// Pinselgröße setzen
    SetBrushSize { size: f32 },
    /// Queue flushen und Job-Anfrage vorbereiten
    StartGeneration,
    /// Fortschritt oder Ergebnis eines laufenden Jobs übernehmen
    ApplyJobUpdate(JobUpdate),
    /// Ergebnis exportieren
    ExportResult,
    /// Editor auf Standardwerte zurücksetzen
    ResetEditor,
    /// Fehlermeldung ohne Zustandsänderung anzeigen
    ReportError { message: String },
}

impl EditorCommand {
    /// Kurzer, stabiler Name für Protokoll und Replay-Ausgabe.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadImage { .. } => "load_image",
            Self::SetLiveValue { .. } => "set_live_value",
            Self::EnqueueCommand { .. } => "enqueue",
            Self::DequeueCommand { .. } => "dequeue",
            Self::SetQueueParameter { .. } => "set_queue_parameter",
            Self::ApplyBatch { .. } => "apply_batch",
            Self::ClearQueue => "clear_queue",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::JumpTo { .. } => "jump_to",
            Self::EnterFocusMode { .. } => "enter_focus_mode",
            Self::ExitFocusMode => "exit_focus_mode",
            Self::AddMaskStroke { .. } => "add_mask_stroke",
            Self::ClearMask => "clear_mask",
            Self::SetBrushSize { .. } => "set_brush_size",
            Self::StartGeneration => "start_generation",
            Self::ApplyJobUpdate(_) => "apply_job_update",
            Self::ExportResult => "export_result",
            Self::ResetEditor => "reset_editor",
            Self::ReportError { .. } => "report_error",
        }
    }

    /// Betroffenes Tool bzw. Rezept.
    pub fn tool(&self) -> Option<CommandId> {
        match self {
            Self::SetLiveValue { id, .. }
            | Self::EnqueueCommand { id, .. }
            | Self::DequeueCommand { id }
            | Self::SetQueueParameter { id, .. } => Some(*id),
            Self::ApplyBatch { recipe, .. } => Some(*recipe),
            _ => None,
        }
    }
}
