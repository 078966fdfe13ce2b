//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die `app`, `jobs` und die Binary gemeinsam nutzen.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_BRUSH_SIZE, HISTORY_DEPTH};
