//! Demo-Backend ohne Netzwerk: Jobs laufen nach einer festen Zahl von Abfragen durch.

use super::{GenerationRequest, JobBackend, JobError};
use crate::core::{Job, JobId, JobStatus, ProjectHandle, SettingsRecord};
use std::path::Path;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;

/// Ergebnis-URL eines simulierten Jobs.
pub const DEMO_RESULT_BASE: &str = "demo://results";

/// Wie ein simulierter Job endet.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Complete,
    Fail(Option<String>),
    Reject(u16),
}

/// Simuliertes Processing-Backend für Demo-Modus und Tests.
///
/// Ein Job meldet beim ersten Abruf `pending`, danach `processing` und beim
/// `complete_after`-ten Abruf seinen terminalen Status.
#[derive(Debug)]
pub struct SimulatedBackend {
    complete_after: u32,
    outcome: Outcome,
    polls: AtomicU32,
    uploads: AtomicU64,
    submissions: Mutex<Vec<SettingsRecord>>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            complete_after: 3,
            outcome: Outcome::Complete,
            polls: AtomicU32::new(0),
            uploads: AtomicU64::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Anzahl Statusabfragen bis zum terminalen Status (mindestens 1).
    pub fn complete_after(mut self, polls: u32) -> Self {
        self.complete_after = polls.max(1);
        self
    }

    /// Jobs scheitern serverseitig mit optionaler Meldung.
    pub fn fail_with(mut self, message: Option<String>) -> Self {
        self.outcome = Outcome::Fail(message);
        self
    }

    /// Einreichungen werden mit dem HTTP-Status abgelehnt.
    pub fn reject_with(mut self, status: u16) -> Self {
        self.outcome = Outcome::Reject(status);
        self
    }

    /// Anzahl eingereichter Jobs.
    pub fn submit_count(&self) -> usize {
        self.submissions.lock().map_or(0, |list| list.len())
    }

    /// Settings aller Einreichungen in Reihenfolge.
    pub fn submitted_settings(&self) -> Vec<SettingsRecord> {
        self.submissions
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    /// Anzahl Statusabfragen seit dem letzten Submit.
    pub fn status_polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }
}

impl JobBackend for SimulatedBackend {
    async fn upload_image(&self, path: &Path) -> Result<ProjectHandle, JobError> {
        let id = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("Demo-Upload: {}", path.display());
        Ok(ProjectHandle {
            id: format!("demo-{id}"),
            original_url: format!("file://{}", path.display()),
        })
    }

    async fn submit_job(&self, request: &GenerationRequest) -> Result<JobId, JobError> {
        if let Outcome::Reject(status) = self.outcome {
            return Err(JobError::Rejected {
                status,
                message: None,
            });
        }

        let number = {
            let Ok(mut list) = self.submissions.lock() else {
                return Err(JobError::InvalidResponse(
                    "Demo-Backend nicht verfügbar".into(),
                ));
            };
            list.push(request.settings.clone());
            list.len()
        };
        self.polls.store(0, Ordering::SeqCst);

        let project = request.project_id.as_deref().unwrap_or("demo");
        Ok(JobId(format!("{project}-job-{number}")))
    }

    async fn job_status(&self, job_id: &JobId) -> Result<Job, JobError> {
        let poll = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut job = Job {
            id: job_id.clone(),
            status: JobStatus::Processing,
            result_url: None,
            error_message: None,
        };

        if poll >= self.complete_after {
            match &self.outcome {
                Outcome::Fail(message) => {
                    job.status = JobStatus::Failed;
                    job.error_message = message.clone();
                }
                Outcome::Complete | Outcome::Reject(_) => {
                    job.status = JobStatus::Completed;
                    job.result_url = Some(format!("{DEMO_RESULT_BASE}/{job_id}.jpg"));
                }
            }
        } else if poll == 1 {
            job.status = JobStatus::Pending;
        }
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobTicket;

    fn request() -> GenerationRequest {
        GenerationRequest {
            ticket: JobTicket(1),
            project_id: Some("demo-1".into()),
            settings: SettingsRecord::default(),
            mask: None,
        }
    }

    #[tokio::test]
    async fn status_walks_through_pending_processing_completed() {
        let backend = SimulatedBackend::new().complete_after(3);
        let id = backend
            .submit_job(&request())
            .await
            .expect("Submit sollte klappen");

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let job = backend.job_status(&id).await.expect("Status sollte klappen");
            statuses.push(job.status);
        }

        assert_eq!(
            statuses,
            vec![JobStatus::Pending, JobStatus::Processing, JobStatus::Completed]
        );
        assert_eq!(backend.submit_count(), 1);
        assert_eq!(id.0, "demo-1-job-1");
    }

    #[tokio::test]
    async fn rejected_submit_maps_status() {
        let backend = SimulatedBackend::new().reject_with(503);
        let err = backend
            .submit_job(&request())
            .await
            .expect_err("Submit sollte abgelehnt werden");
        assert_eq!(err.user_message(), "Server error. We are working on it.");
        assert_eq!(backend.submit_count(), 0);
    }

    #[tokio::test]
    async fn uploads_get_fresh_project_ids() {
        let backend = SimulatedBackend::new();
        let first = backend
            .upload_image(Path::new("/tmp/a.jpg"))
            .await
            .expect("Upload sollte klappen");
        let second = backend
            .upload_image(Path::new("/tmp/b.jpg"))
            .await
            .expect("Upload sollte klappen");
        assert_eq!(first.id, "demo-1");
        assert_eq!(second.id, "demo-2");
        assert_eq!(second.original_url, "file:///tmp/b.jpg");
    }
}
