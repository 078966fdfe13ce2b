//! Interaktionsmodi der Arbeitsfläche.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aktueller Modus der Arbeitsfläche. Genau einer ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    /// Kein Bild geladen
    #[default]
    Empty,
    /// Bild geladen, keine Fokus-Interaktion
    Default,
    /// Maske wird gemalt (Magic Eraser)
    Masking,
    /// Zuschneiden/Drehen
    Cropping,
    /// Ergebnis eines erfolgreichen Jobs wird angezeigt
    Processed,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Default => "default",
            Self::Masking => "masking",
            Self::Cropping => "cropping",
            Self::Processed => "processed",
        };
        f.write_str(name)
    }
}

/// Modi, die ein Mode-Tool betreten kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    Masking,
    Cropping,
}

impl From<FocusMode> for EditorMode {
    fn from(mode: FocusMode) -> Self {
        match mode {
            FocusMode::Masking => EditorMode::Masking,
            FocusMode::Cropping => EditorMode::Cropping,
        }
    }
}
