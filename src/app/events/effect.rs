use serde::Serialize;

/// Einmalige Signale an die UI (Toast, Export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEffect {
    ShowError { message: String },
    ShowSuccess { message: String },
    /// Ergebnis soll gespeichert/geteilt werden
    ExportResult { url: String },
}

impl EditorEffect {
    pub fn error(message: impl Into<String>) -> Self {
        Self::ShowError {
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::ShowSuccess {
            message: message.into(),
        }
    }
}

/// Art der haptischen Rückmeldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticFeedback {
    /// Leichtes Tick bei Reglern, Schaltern und History-Navigation
    Selection,
    /// Deutlicher Stoß, z.B. bei Reset
    Impact,
    Success,
    Error,
}
