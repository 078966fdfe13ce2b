use crate::core::{CommandValue, FocusMode, MaskPoint};
use crate::registry::{CommandId, ToolParameter};
use serde::{Deserialize, Serialize};

/// Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Die Menge ist geschlossen; jedes Frontend bildet seine Gesten darauf ab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Neues Bild öffnen (setzt den gesamten Editor zurück)
    LoadImage {
        uri: String,
        #[serde(default)]
        project_id: Option<String>,
    },
    /// Wert eines Tools setzen, typischerweise ein Regler
    ToggleLiveValue { id: CommandId, value: CommandValue },
    /// Queue-Tool ein-/ausschalten oder Wert ändern
    ToggleQueueCommand { id: CommandId, value: CommandValue },
    /// Zusatzparameter eines wartenden Queue-Tools
    SetToolParameter {
        id: CommandId,
        parameter: ToolParameter,
        value: f64,
    },
    /// Rezept als Ganzes anwenden
    ApplyRecipe { id: CommandId },
    /// Alle wartenden Queue-Tools verwerfen
    ClearQueue,
    Undo,
    Redo,
    /// Direkt zu einem History-Eintrag springen
    JumpTo { index: usize },
    /// Fokus-Modus betreten
    EnterMode { mode: FocusMode },
    /// Aktuellen Fokus-Modus verlassen
    ExitMode,
    /// Pinselstrich zur Maske hinzufügen
    AddMaskStroke { points: Vec<MaskPoint> },
    ClearMask,
    SetBrushSize { size: f32 },
    /// Queue absenden und Job starten
    Generate,
    /// Ergebnis exportieren
    SaveResult,
    /// Alle Einstellungen auf Standard zurücksetzen
    ResetEditor,
}

impl EditorEvent {
    /// Bild ohne Backend-Projekt laden.
    pub fn load_image(uri: impl Into<String>) -> Self {
        Self::LoadImage {
            uri: uri.into(),
            project_id: None,
        }
    }

    pub fn live(id: CommandId, value: impl Into<CommandValue>) -> Self {
        Self::ToggleLiveValue {
            id,
            value: value.into(),
        }
    }

    /// Queue-Tool mit Wert (Zahl, Prompt) oder Schalter.
    pub fn queue(id: CommandId, value: impl Into<CommandValue>) -> Self {
        Self::ToggleQueueCommand {
            id,
            value: value.into(),
        }
    }
}
