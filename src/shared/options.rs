//! Zentrale Konfiguration für die FixPix Editor-Engine.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl History-Einträge.
pub const HISTORY_DEPTH: usize = fixpix_history::DEFAULT_MAX_DEPTH;

// ── Jobs ────────────────────────────────────────────────────────────

/// Abstand zwischen zwei Statusabfragen in Millisekunden.
pub const POLL_INTERVAL_MS: u64 = 2000;
/// Abfragen bis zum Abbruch (~2 Minuten bei 2s Intervall).
pub const MAX_POLL_ATTEMPTS: u32 = 60;
/// Timeout einer einzelnen HTTP-Anfrage in Millisekunden.
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;
/// Standard-Adresse des Processing-Backends.
pub const API_BASE_URL: &str = "http://localhost:8000";

// ── Eingabe ─────────────────────────────────────────────────────────

/// Zeitfenster, in dem Regler-Änderungen zu einem History-Eintrag verschmelzen.
pub const SLIDER_DEBOUNCE_MS: u64 = 180;
/// Pinselgröße nach Laden oder Zurücksetzen.
pub const DEFAULT_BRUSH_SIZE: f32 = 30.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `fixpix_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale History-Tiefe (mindestens 1)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Nach Undo/Redo/Sprung automatisch neu generieren
    #[serde(default)]
    pub auto_regenerate_on_history_change: bool,

    // ── Jobs ────────────────────────────────────────────────────
    /// Poll-Intervall in Millisekunden
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Maximale Anzahl Statusabfragen pro Job
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
    /// API-Wurzel des Backends
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Basis für relative Ergebnis-URLs (Fallback: `api_base_url`)
    #[serde(default)]
    pub media_base_url: Option<String>,
    /// Timeout pro HTTP-Anfrage in Millisekunden
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Debounce-Fenster für Regler in Millisekunden
    #[serde(default = "default_slider_debounce_ms")]
    pub slider_debounce_ms: u64,
    /// Maske beim Verlassen des Masking-Modus behalten
    #[serde(default)]
    pub keep_mask_on_exit: bool,
    /// Pinselgröße nach Laden/Reset
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_depth: HISTORY_DEPTH,
            auto_regenerate_on_history_change: false,

            poll_interval_ms: POLL_INTERVAL_MS,
            max_poll_attempts: MAX_POLL_ATTEMPTS,
            api_base_url: API_BASE_URL.to_string(),
            media_base_url: None,
            request_timeout_ms: REQUEST_TIMEOUT_MS,

            slider_debounce_ms: SLIDER_DEBOUNCE_MS,
            keep_mask_on_exit: false,
            default_brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

fn default_poll_interval_ms() -> u64 {
    POLL_INTERVAL_MS
}

fn default_max_poll_attempts() -> u32 {
    MAX_POLL_ATTEMPTS
}

fn default_api_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    REQUEST_TIMEOUT_MS
}

fn default_slider_debounce_ms() -> u64 {
    SLIDER_DEBOUNCE_MS
}

fn default_brush_size() -> f32 {
    DEFAULT_BRUSH_SIZE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// TOML-Darstellung der Optionen.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fixpix_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fixpix_editor.toml")
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn slider_debounce(&self) -> Duration {
        Duration::from_millis(self.slider_debounce_ms)
    }

    /// Basis für Ergebnis-URLs.
    pub fn media_base(&self) -> &str {
        self.media_base_url.as_deref().unwrap_or(&self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let options: EditorOptions = toml::from_str("history_depth = 5\nkeep_mask_on_exit = true")
            .expect("Teil-Konfiguration sollte parsen");
        assert_eq!(options.history_depth, 5);
        assert!(options.keep_mask_on_exit);
        assert_eq!(options.poll_interval_ms, POLL_INTERVAL_MS);
        assert_eq!(options.api_base_url, API_BASE_URL);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let options = EditorOptions {
            auto_regenerate_on_history_change: true,
            media_base_url: Some("https://cdn.example".into()),
            ..EditorOptions::default()
        };
        let text = options.to_toml().expect("Serialisierung sollte klappen");
        let parsed: EditorOptions = toml::from_str(&text).expect("Rückweg sollte parsen");
        assert_eq!(parsed, options);
    }

    #[test]
    fn media_base_falls_back_to_api() {
        let mut options = EditorOptions::default();
        assert_eq!(options.media_base(), API_BASE_URL);
        options.media_base_url = Some("https://cdn.example".into());
        assert_eq!(options.media_base(), "https://cdn.example");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let options = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/fixpix_editor.toml",
        ));
        assert_eq!(options, EditorOptions::default());
    }
}
