//! Fehler rund um Upload, Job-Submit und Polling inklusive UI-Meldungen.

/// Fehler eines Backend-Aufrufs oder des Pollings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobError {
    #[error("keine Verbindung zum Backend: {0}")]
    Connection(String),
    #[error("Zeitüberschreitung der Anfrage: {0}")]
    Timeout(String),
    #[error("Backend lehnte Anfrage ab (HTTP {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("Job fehlgeschlagen: {}", .0.as_deref().unwrap_or("ohne Meldung"))]
    JobFailed(Option<String>),
    #[error("Polling nach {attempts} Versuchen abgebrochen")]
    PollTimeout { attempts: u32 },
    #[error("kein Backend-Projekt für das aktuelle Bild")]
    MissingProject,
    #[error("Datei konnte nicht gelesen werden: {0}")]
    Io(String),
    #[error("unerwartete Antwort des Backends: {0}")]
    InvalidResponse(String),
}

/// Fallback, wenn nichts Spezifischeres bekannt ist.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

impl JobError {
    /// Kurze Meldung für die UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection(_) => "No internet connection.".to_string(),
            Self::Timeout(_) => "Connection timed out. Please try again.".to_string(),
            Self::Rejected { status, .. } => match status {
                401 => "Session expired. Please login again.".to_string(),
                403 => "Access denied.".to_string(),
                404 => "Resource not found.".to_string(),
                500 | 502 | 503 => "Server error. We are working on it.".to_string(),
                other => format!("Something went wrong ({other})."),
            },
            Self::JobFailed(Some(message)) if !message.trim().is_empty() => message.clone(),
            Self::JobFailed(_) => "Processing failed. Please try again.".to_string(),
            Self::PollTimeout { .. } => "Processing timed out. Please try again.".to_string(),
            Self::MissingProject => "Upload the image before processing.".to_string(),
            Self::Io(_) | Self::InvalidResponse(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
