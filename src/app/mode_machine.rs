//! Zustandsautomat für den Interaktionsmodus der Arbeitsfläche.

use crate::core::{EditorMode, FocusMode};
use std::fmt;

/// Auslöser eines Moduswechsels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    LoadImage,
    EnterMask,
    ExitMask,
    EnterCrop,
    ExitCrop,
    /// Neue Bearbeitung (Live-Wert, Queue, Rezept)
    EditStarted,
    GenerateSucceeded,
    Reset,
}

impl ModeEvent {
    /// Betreten eines Fokus-Modus.
    pub fn enter(mode: FocusMode) -> Self {
        match mode {
            FocusMode::Masking => Self::EnterMask,
            FocusMode::Cropping => Self::EnterCrop,
        }
    }

    /// Verlassen eines Fokus-Modus.
    pub fn exit(mode: FocusMode) -> Self {
        match mode {
            FocusMode::Masking => Self::ExitMask,
            FocusMode::Cropping => Self::ExitCrop,
        }
    }
}

/// Unzulässiger Moduswechsel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("unzulässiger Moduswechsel: {event:?} im Modus {from}")]
    IllegalTransition { from: EditorMode, event: ModeEvent },
}

impl ModeError {
    /// Kurze Meldung für die UI.
    pub fn user_message(&self) -> &'static str {
        let Self::IllegalTransition { from, .. } = self;
        match from {
            EditorMode::Empty => "Load an image first.",
            EditorMode::Masking => "Finish masking first.",
            EditorMode::Cropping => "Finish cropping first.",
            EditorMode::Processed => "Start a new edit before using this tool.",
            EditorMode::Default => "This action is not available right now.",
        }
    }
}

/// Ein erfolgter Wechsel, für Logging und Tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: EditorMode,
    pub event: ModeEvent,
    pub to: EditorMode,
}

/// Verwaltet genau einen aktiven `EditorMode`.
#[derive(Debug, Default)]
pub struct EditorModeMachine {
    mode: EditorMode,
    last_transition: Option<ModeTransition>,
}

impl EditorModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Aktiver Fokus-Modus (Masking/Cropping), falls vorhanden.
    pub fn focus_mode(&self) -> Option<FocusMode> {
        match self.mode {
            EditorMode::Masking => Some(FocusMode::Masking),
            EditorMode::Cropping => Some(FocusMode::Cropping),
            _ => None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.mode != EditorMode::Empty
    }

    pub fn last_transition(&self) -> Option<ModeTransition> {
        self.last_transition
    }

    pub fn can_transition(&self, event: ModeEvent) -> bool {
        self.next_mode(event).is_some()
    }

    /// Zielmodus für ein Ereignis, `None` wenn unzulässig.
    /// Ein Ziel gleich dem aktuellen Modus ist ein zulässiger No-op.
    pub fn next_mode(&self, event: ModeEvent) -> Option<EditorMode> {
        use EditorMode::*;
        use ModeEvent::*;
        match (self.mode, event) {
            (Empty | Default | Processed, LoadImage) => Some(Default),
            (Default | Masking, EnterMask) => Some(Masking),
            (Default | Masking, ExitMask) => Some(Default),
            (Default | Cropping, EnterCrop) => Some(Cropping),
            (Default | Cropping, ExitCrop) => Some(Default),
            (Processed, EditStarted) => Some(Default),
            (Default | Masking | Cropping, EditStarted) => Some(self.mode),
            (Default | Masking | Cropping | Processed, GenerateSucceeded) => Some(Processed),
            (Empty, Reset) => Some(Empty),
            (_, Reset) => Some(Default),
            _ => None,
        }
    }

    /// Führt einen Wechsel aus. Unzulässige Wechsel lassen den Modus unverändert.
    pub fn transition(&mut self, event: ModeEvent) -> Result<EditorMode, ModeError> {
        log::debug!("Moduswechsel angefragt: {} mit {:?}", self.mode, event);
        let next = self.next_mode(event).ok_or_else(|| {
            log::warn!("Unzulässiger Moduswechsel: {:?} im Modus {}", event, self.mode);
            ModeError::IllegalTransition {
                from: self.mode,
                event,
            }
        })?;

        if next != self.mode {
            log::info!("Modus: {} -> {}", self.mode, next);
        }
        self.last_transition = Some(ModeTransition {
            from: self.mode,
            event,
            to: next,
        });
        self.mode = next;
        Ok(next)
    }
}

impl fmt::Display for EditorModeMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EditorMode::{}", self.mode)
    }
}
