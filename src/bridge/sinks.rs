use crate::app::{EditorEffect, EffectSink, HapticFeedback, HapticSink};
use std::sync::Mutex;

/// Senke, die nur protokolliert (Binary, Headless-Betrieb).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EffectSink for LogSink {
    fn emit(&self, effect: EditorEffect) {
        match &effect {
            EditorEffect::ShowError { message } => log::warn!("Effekt: Fehler \"{}\"", message),
            EditorEffect::ShowSuccess { message } => log::info!("Effekt: Erfolg \"{}\"", message),
            EditorEffect::ExportResult { url } => log::info!("Effekt: Export {}", url),
        }
    }
}

impl HapticSink for LogSink {
    fn trigger(&self, feedback: HapticFeedback) {
        log::debug!("Haptik: {:?}", feedback);
    }
}

/// Sammelt Effekte und Haptik, z.B. für Tests oder Frontends mit Polling.
#[derive(Debug, Default)]
pub struct CollectingSink {
    effects: Mutex<Vec<EditorEffect>>,
    haptics: Mutex<Vec<HapticFeedback>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kopie aller bisher gesammelten Effekte.
    pub fn effects(&self) -> Vec<EditorEffect> {
        self.effects
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    pub fn haptics(&self) -> Vec<HapticFeedback> {
        self.haptics
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    /// Entnimmt alle gesammelten Effekte.
    pub fn take_effects(&self) -> Vec<EditorEffect> {
        self.effects
            .lock()
            .map(|mut list| std::mem::take(&mut *list))
            .unwrap_or_default()
    }

    /// Fehlermeldungen in Reihenfolge.
    pub fn errors(&self) -> Vec<String> {
        self.effects()
            .into_iter()
            .filter_map(|effect| match effect {
                EditorEffect::ShowError { message } => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl EffectSink for CollectingSink {
    fn emit(&self, effect: EditorEffect) {
        let Ok(mut effects) = self.effects.lock() else {
            log::error!("Effekt-Liste nicht verfügbar (Mutex vergiftet)");
            return;
        };
        effects.push(effect);
    }
}

impl HapticSink for CollectingSink {
    fn trigger(&self, feedback: HapticFeedback) {
        let Ok(mut haptics) = self.haptics.lock() else {
            log::error!("Haptik-Liste nicht verfügbar (Mutex vergiftet)");
            return;
        };
        haptics.push(feedback);
    }
}
