//! Job-Modell des externen Processing-Backends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kennung eines Backend-Jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status eines Jobs, `Completed` und `Failed` sind terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Momentaufnahme eines Jobs aus einer Status-Abfrage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    /// Ergebnis-URL (bei `Completed`), bereits gegen die Media-Basis aufgelöst
    pub result_url: Option<String>,
    /// Fehlermeldung des Servers (bei `Failed`)
    pub error_message: Option<String>,
}

/// Ergebnis eines Uploads: Projekt-Kennung für alle folgenden Jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectHandle {
    pub id: String,
    pub original_url: String,
}

/// Löst eine Ergebnis-URL gegen die Media-Basis auf.
///
/// Absolute `http(s)`-URLs bleiben unverändert.
pub fn resolve_media_url(media_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }

    #[test]
    fn media_url_resolution() {
        assert_eq!(
            resolve_media_url("http://api.local/", "/media/out.png"),
            "http://api.local/media/out.png"
        );
        assert_eq!(
            resolve_media_url("http://api.local", "https://cdn.example/out.png"),
            "https://cdn.example/out.png"
        );
    }

    #[test]
    fn status_parses_lowercase() {
        let status: JobStatus = serde_json::from_str("\"processing\"").expect("Status sollte parsen");
        assert_eq!(status, JobStatus::Processing);
    }
}
