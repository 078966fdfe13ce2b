//! Anbindung an das externe Processing-Backend.
//!
//! Die Session selbst bleibt synchron; `SessionRuntime` treibt Jobs auf Tokio
//! und speist Fortschritt als `JobUpdate` zurück.

pub mod error;
pub mod http;
pub mod poller;
pub mod runtime;
pub mod simulated;

pub use error::JobError;
pub use http::HttpBackend;
pub use poller::JobPoller;
pub use runtime::SessionRuntime;
pub use simulated::SimulatedBackend;

use crate::core::{Job, JobId, JobStatus, MaskPayload, ProjectHandle, SettingsRecord};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::path::Path;

/// Fortlaufende Kennung einer Generierung innerhalb einer Session.
///
/// Updates mit veralteter Kennung (z.B. nach einem Bildwechsel) werden verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobTicket(pub u64);

impl fmt::Display for JobTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anzeige-Schritt während ein Job läuft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStep {
    #[default]
    Idle,
    Analyzing,
    Enhancing,
    Finalizing,
}

impl ProcessingStep {
    /// Schritt passend zu einem Backend-Status.
    pub fn from_status(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => Self::Analyzing,
            JobStatus::Processing => Self::Enhancing,
            JobStatus::Completed => Self::Finalizing,
            JobStatus::Failed => Self::Idle,
        }
    }
}

/// Vorbereitete Job-Anfrage nach einem Queue-Flush.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub ticket: JobTicket,
    /// Backend-Projekt des geladenen Bildes (aus dem Upload)
    pub project_id: Option<String>,
    pub settings: SettingsRecord,
    pub mask: Option<MaskPayload>,
}

/// Erfolgreich abgeschlossener Job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedJob {
    pub job_id: JobId,
    pub result_url: String,
}

/// Fortschritt oder Ergebnis eines Jobs.
#[derive(Debug, Clone, PartialEq)]
pub enum JobUpdateKind {
    Step(ProcessingStep),
    Completed(CompletedJob),
    Failed(JobError),
}

/// Rückmeldung des Pollers an die Session.
#[derive(Debug, Clone, PartialEq)]
pub struct JobUpdate {
    pub ticket: JobTicket,
    pub kind: JobUpdateKind,
}

impl JobUpdate {
    pub fn step(ticket: JobTicket, step: ProcessingStep) -> Self {
        Self {
            ticket,
            kind: JobUpdateKind::Step(step),
        }
    }

    pub fn completed(ticket: JobTicket, job_id: JobId, result_url: impl Into<String>) -> Self {
        Self {
            ticket,
            kind: JobUpdateKind::Completed(CompletedJob {
                job_id,
                result_url: result_url.into(),
            }),
        }
    }

    pub fn failed(ticket: JobTicket, error: JobError) -> Self {
        Self {
            ticket,
            kind: JobUpdateKind::Failed(error),
        }
    }

    /// `true` für Erfolg und Fehlschlag.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.kind, JobUpdateKind::Step(_))
    }
}

/// Schnittstelle zum Processing-Backend.
///
/// Implementierungen müssen zwischen Tasks teilbar sein; der Poller läuft in
/// einem eigenen Tokio-Task.
pub trait JobBackend: Send + Sync + 'static {
    /// Lädt das Originalbild hoch und legt ein Projekt an.
    fn upload_image(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<ProjectHandle, JobError>> + Send;

    /// Reicht Settings und Maske ein. Liefert die Job-Kennung.
    fn submit_job(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<JobId, JobError>> + Send;

    /// Idempotente Statusabfrage.
    fn job_status(&self, job_id: &JobId) -> impl Future<Output = Result<Job, JobError>> + Send;
}
