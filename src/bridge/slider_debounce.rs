use crate::app::EditorEvent;
use crate::core::CommandValue;
use crate::registry::CommandId;
use crate::shared::EditorOptions;
use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// Fasst schnelle Regler-Änderungen zu einem `ToggleLiveValue` pro Geste zusammen.
///
/// Liegt beim Regler, nicht in der Session: das Frontend meldet jede Änderung
/// per `update` und leitet die von `poll` gelieferten Events weiter.
#[derive(Debug, Clone)]
pub struct SliderDebouncer {
    window: Duration,
    pending: IndexMap<CommandId, (CommandValue, Instant)>,
}

impl SliderDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: IndexMap::new(),
        }
    }

    /// Fenster aus `slider_debounce_ms`.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self::new(options.slider_debounce())
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Merkt sich den neuesten Wert eines Reglers und startet sein Fenster neu.
    pub fn update(&mut self, id: CommandId, value: CommandValue, now: Instant) {
        self.pending.insert(id, (value, now));
    }

    /// Aktueller Vorschauwert eines Reglers, solange er noch nicht übernommen ist.
    pub fn preview(&self, id: CommandId) -> Option<&CommandValue> {
        self.pending.get(&id).map(|(value, _)| value)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Liefert die Events aller Regler, deren Fenster abgelaufen ist.
    pub fn poll(&mut self, now: Instant) -> Vec<EditorEvent> {
        let window = self.window;
        let mut ready = Vec::new();
        self.pending.retain(|id, (value, changed_at)| {
            if now.saturating_duration_since(*changed_at) >= window {
                ready.push(EditorEvent::ToggleLiveValue {
                    id: *id,
                    value: value.clone(),
                });
                false
            } else {
                true
            }
        });
        ready
    }

    /// Übernimmt alle offenen Werte sofort (z.B. beim Loslassen des Reglers).
    pub fn flush(&mut self) -> Vec<EditorEvent> {
        self.pending
            .drain(..)
            .map(|(id, (value, _))| EditorEvent::ToggleLiveValue { id, value })
            .collect()
    }
}
