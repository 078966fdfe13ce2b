use super::MaskSubmission;
use crate::app::queue::QueueEntry;
use crate::jobs::{GenerationRequest, JobTicket, ProcessingStep};
use crate::registry::CommandId;
use indexmap::IndexMap;

/// Eine laufende Generierung.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveJob {
    pub ticket: JobTicket,
    /// Geflushte Queue-Einträge: bei Erfolg übernommen, bei Fehler zurückgelegt
    pub entries: IndexMap<CommandId, QueueEntry>,
    /// Mitgeschickte Maske, bei Erfolg entfernt
    pub submitted_mask: Option<MaskSubmission>,
}

/// Zustand der (höchstens einen) laufenden Generierung.
#[derive(Debug, Default)]
pub struct ProcessingState {
    pub active: Option<ActiveJob>,
    pub step: ProcessingStep,
    /// Vorbereitete Anfrage, bis ein Treiber sie abholt
    pub pending_request: Option<GenerationRequest>,
    last_ticket: u64,
}

impl ProcessingState {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_ticket(&self) -> Option<JobTicket> {
        self.active.as_ref().map(|job| job.ticket)
    }

    /// Gehört ein Update zum laufenden Job?
    pub fn is_current(&self, ticket: JobTicket) -> bool {
        self.active_ticket() == Some(ticket)
    }

    /// Vergibt die nächste Kennung (streng monoton über die ganze Session).
    pub fn next_ticket(&mut self) -> JobTicket {
        self.last_ticket += 1;
        JobTicket(self.last_ticket)
    }

    /// Markiert eine Generierung als gestartet.
    pub fn begin(&mut self, job: ActiveJob, request: GenerationRequest) {
        self.active = Some(job);
        self.step = ProcessingStep::Analyzing;
        self.pending_request = Some(request);
    }

    /// Beendet die laufende Generierung und liefert sie zurück.
    pub fn finish(&mut self) -> Option<ActiveJob> {
        self.step = ProcessingStep::Idle;
        self.pending_request = None;
        self.active.take()
    }
}
