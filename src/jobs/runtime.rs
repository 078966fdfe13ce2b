//! Async-Treiber einer `EditorSession`.
//!
//! Die Session bleibt synchron und besitzt allen Zustand; die Runtime startet
//! pro Generierung einen Poller-Task und speist dessen Updates zurück.

use super::{GenerationRequest, JobBackend, JobError, JobPoller, JobTicket, JobUpdate};
use crate::app::{EditorEvent, EditorSession};
use crate::core::ProjectHandle;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Laufender Poller-Task.
struct InFlightJob {
    ticket: JobTicket,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl InFlightJob {
    fn abort(self) {
        self.cancel.cancel();
        if !self.handle.is_finished() {
            log::debug!("Poller für Job {} wird beendet", self.ticket);
        }
    }
}

/// Besitzt die Session und höchstens einen laufenden Job.
pub struct SessionRuntime<B: JobBackend> {
    session: EditorSession,
    backend: Arc<B>,
    poller: Arc<JobPoller<B>>,
    updates_tx: UnboundedSender<JobUpdate>,
    updates_rx: UnboundedReceiver<JobUpdate>,
    shutdown: CancellationToken,
    in_flight: Option<InFlightJob>,
}

impl<B: JobBackend> SessionRuntime<B> {
    /// Poll-Intervall und Obergrenze kommen aus den Optionen der Session.
    pub fn new(session: EditorSession, backend: Arc<B>) -> Self {
        let poller = JobPoller::from_options(Arc::clone(&backend), session.options());
        Self::with_poller(session, backend, poller)
    }

    pub fn with_poller(session: EditorSession, backend: Arc<B>, poller: JobPoller<B>) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        Self {
            session,
            backend,
            poller: Arc::new(poller),
            updates_tx,
            updates_rx,
            shutdown: CancellationToken::new(),
            in_flight: None,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Verarbeitet ein Event und startet bzw. beendet Poller-Tasks.
    ///
    /// Muss innerhalb einer Tokio-Runtime aufgerufen werden.
    pub fn dispatch(&mut self, event: EditorEvent) {
        self.session.dispatch(event);
        self.sync_jobs();
    }

    /// Lädt ein Bild hoch und öffnet es anschließend im Editor.
    ///
    /// Upload-Fehler erscheinen zusätzlich als Fehler-Effekt.
    pub async fn open_image(&mut self, path: &Path) -> Result<ProjectHandle, JobError> {
        match self.backend.upload_image(path).await {
            Ok(handle) => {
                self.dispatch(EditorEvent::LoadImage {
                    uri: handle.original_url.clone(),
                    project_id: Some(handle.id.clone()),
                });
                Ok(handle)
            }
            Err(err) => {
                log::warn!("Upload fehlgeschlagen: {}", err);
                self.session.report_error(err.user_message());
                Err(err)
            }
        }
    }

    /// Wartet auf das nächste Job-Update und wendet es an.
    ///
    /// `None`, wenn kein Job läuft und nichts mehr gepuffert ist, oder nach `shutdown`.
    pub async fn next_update(&mut self) -> Option<JobUpdate> {
        let update = if self.in_flight.is_none() {
            self.updates_rx.try_recv().ok()?
        } else {
            tokio::select! {
                _ = self.shutdown.cancelled() => return None,
                update = self.updates_rx.recv() => update?,
            }
        };
        self.session.apply_job_update(update.clone());
        self.sync_jobs();
        Some(update)
    }

    /// Wendet Updates an, bis kein Job mehr läuft.
    pub async fn settle(&mut self) {
        while self.session.is_processing() {
            if self.next_update().await.is_none() {
                break;
            }
        }
    }

    /// Bricht den laufenden Poller ab. Weitere Jobs werden nicht mehr gestartet.
    pub fn shutdown(&mut self) {
        log::info!("Session-Runtime wird beendet");
        self.shutdown.cancel();
        if let Some(job) = self.in_flight.take() {
            job.abort();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Gleicht laufende Tasks mit dem Job der Session ab.
    fn sync_jobs(&mut self) {
        let active = self.session.active_job();
        if self
            .in_flight
            .as_ref()
            .is_some_and(|job| Some(job.ticket) != active)
        {
            if let Some(stale) = self.in_flight.take() {
                log::info!("Job {} wird nicht mehr verfolgt", stale.ticket);
                stale.abort();
            }
        }

        if let Some(request) = self.session.take_generation_request() {
            self.spawn_job(request);
        }
    }

    fn spawn_job(&mut self, request: GenerationRequest) {
        let ticket = request.ticket;
        if self.shutdown.is_cancelled() {
            log::warn!("Job {} nach Shutdown verworfen", ticket);
            self.session.apply_job_update(JobUpdate::failed(
                ticket,
                JobError::Connection("Runtime beendet".into()),
            ));
            return;
        }

        let cancel = self.shutdown.child_token();
        let poller = Arc::clone(&self.poller);
        let updates = self.updates_tx.clone();
        let task_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            poller.run(request, updates, task_cancel).await;
        });

        log::info!("Poller für Job {} gestartet", ticket);
        self.in_flight = Some(InFlightJob {
            ticket,
            cancel,
            handle,
        });
    }
}

impl<B: JobBackend> Drop for SessionRuntime<B> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
