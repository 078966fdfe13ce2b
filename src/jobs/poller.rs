//! Reicht Jobs ein und fragt ihren Status im festen Intervall ab.

use super::{
    CompletedJob, GenerationRequest, JobBackend, JobError, JobTicket, JobUpdate, ProcessingStep,
};
use crate::core::{JobId, JobStatus};
use crate::shared::EditorOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// Standard-Abfrageintervall.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Standard-Obergrenze der Abfragen (~2 Minuten).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

/// Pollt einen Job bis zu einem terminalen Status.
pub struct JobPoller<B> {
    backend: Arc<B>,
    interval: Duration,
    max_attempts: u32,
}

impl<B: JobBackend> JobPoller<B> {
    pub fn new(backend: Arc<B>, interval: Duration, max_attempts: u32) -> Self {
        Self {
            backend,
            interval,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Intervall und Obergrenze aus den Editor-Optionen.
    pub fn from_options(backend: Arc<B>, options: &EditorOptions) -> Self {
        Self::new(backend, options.poll_interval(), options.max_poll_attempts)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Führt eine Generierung vollständig aus und meldet jeden Schritt.
    ///
    /// Bei Abbruch über `cancel` endet die Schleife ohne terminales Update;
    /// der Job auf dem Server läuft weiter.
    pub async fn run(
        &self,
        request: GenerationRequest,
        updates: UnboundedSender<JobUpdate>,
        cancel: CancellationToken,
    ) {
        let ticket = request.ticket;
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::info!("Job {} abgebrochen", ticket);
                return;
            }
            outcome = self.execute(&request, &updates) => outcome,
        };

        let update = match outcome {
            Ok(done) => {
                log::info!("Job {} fertig: {}", ticket, done.result_url);
                JobUpdate {
                    ticket,
                    kind: super::JobUpdateKind::Completed(done),
                }
            }
            Err(err) => {
                log::warn!("Job {} fehlgeschlagen: {}", ticket, err);
                JobUpdate::failed(ticket, err)
            }
        };
        if updates.send(update).is_err() {
            log::debug!("Job {}: Empfänger bereits geschlossen", ticket);
        }
    }

    async fn execute(
        &self,
        request: &GenerationRequest,
        updates: &UnboundedSender<JobUpdate>,
    ) -> Result<CompletedJob, JobError> {
        let ticket = request.ticket;
        report_step(updates, ticket, ProcessingStep::Analyzing);

        let job_id = self.backend.submit_job(request).await?;
        log::info!("Job {} eingereicht als {}", ticket, job_id);

        self.poll_to_completion(&job_id, |step| {
            if step != ProcessingStep::Analyzing {
                report_step(updates, ticket, step);
            }
        })
        .await
    }

    /// Fragt den Status ab, bis der Job fertig ist, scheitert oder die
    /// Obergrenze erreicht ist. Vor jeder Abfrage wird ein Intervall gewartet.
    ///
    /// `on_step` wird nur bei einem Wechsel des Anzeige-Schritts aufgerufen.
    pub async fn poll_to_completion(
        &self,
        job_id: &JobId,
        mut on_step: impl FnMut(ProcessingStep),
    ) -> Result<CompletedJob, JobError> {
        let mut last_step = None;
        for attempt in 1..=self.max_attempts {
            tokio::time::sleep(self.interval).await;
            let job = self.backend.job_status(job_id).await?;

            let step = ProcessingStep::from_status(job.status);
            if last_step != Some(step) {
                on_step(step);
                last_step = Some(step);
            }

            match job.status {
                JobStatus::Completed => {
                    let result_url = job.result_url.ok_or_else(|| {
                        JobError::InvalidResponse(format!(
                            "Job {} fertig, aber ohne Ergebnis-URL",
                            job_id
                        ))
                    })?;
                    return Ok(CompletedJob {
                        job_id: job.id,
                        result_url,
                    });
                }
                JobStatus::Failed => return Err(JobError::JobFailed(job.error_message)),
                JobStatus::Pending | JobStatus::Processing => {
                    log::debug!(
                        "Job {}: Versuch {}/{} -> {:?}",
                        job_id,
                        attempt,
                        self.max_attempts,
                        job.status
                    );
                }
            }
        }

        Err(JobError::PollTimeout {
            attempts: self.max_attempts,
        })
    }
}

fn report_step(updates: &UnboundedSender<JobUpdate>, ticket: JobTicket, step: ProcessingStep) {
    if updates.send(JobUpdate::step(ticket, step)).is_err() {
        log::debug!("Job {}: Schritt {:?} ohne Empfänger", ticket, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SettingsRecord;
    use crate::jobs::simulated::SimulatedBackend;
    use crate::jobs::JobUpdateKind;
    use tokio::sync::mpsc;

    fn request(ticket: u64) -> GenerationRequest {
        GenerationRequest {
            ticket: JobTicket(ticket),
            project_id: Some("demo-1".into()),
            settings: SettingsRecord::default(),
            mask: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_configured_polls() {
        let backend = Arc::new(SimulatedBackend::new().complete_after(3));
        let poller = JobPoller::new(Arc::clone(&backend), DEFAULT_POLL_INTERVAL, 10);
        let (tx, mut rx) = mpsc::unbounded_channel();

        poller.run(request(1), tx, CancellationToken::new()).await;

        let mut updates = Vec::new();
        while let Ok(update) = rx.try_recv() {
            updates.push(update.kind);
        }
        assert_eq!(
            updates[..3],
            [
                JobUpdateKind::Step(ProcessingStep::Analyzing),
                JobUpdateKind::Step(ProcessingStep::Enhancing),
                JobUpdateKind::Step(ProcessingStep::Finalizing),
            ]
        );
        assert!(matches!(updates.last(), Some(JobUpdateKind::Completed(_))));
        assert_eq!(backend.status_polls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let backend = Arc::new(SimulatedBackend::new().complete_after(100));
        let poller = JobPoller::new(backend, DEFAULT_POLL_INTERVAL, 4);

        let err = poller
            .poll_to_completion(&JobId("demo-1".into()), |_| {})
            .await
            .expect_err("Polling sollte abbrechen");

        assert_eq!(err, JobError::PollTimeout { attempts: 4 });
    }

    #[tokio::test(start_paused = true)]
    async fn server_failure_carries_message() {
        let backend = Arc::new(
            SimulatedBackend::new()
                .complete_after(2)
                .fail_with(Some("Model overloaded".into())),
        );
        let poller = JobPoller::new(backend, DEFAULT_POLL_INTERVAL, 10);

        let err = poller
            .poll_to_completion(&JobId("demo-1".into()), |_| {})
            .await
            .expect_err("Job sollte scheitern");

        assert_eq!(err.user_message(), "Model overloaded");
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_run_sends_no_terminal_update() {
        let backend = Arc::new(SimulatedBackend::new().complete_after(3));
        let poller = JobPoller::new(backend, DEFAULT_POLL_INTERVAL, 10);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        cancel.cancel();

        poller.run(request(7), tx, cancel).await;

        assert!(rx.try_recv().is_err());
    }
}
