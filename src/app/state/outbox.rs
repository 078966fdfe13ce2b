use crate::app::events::{EditorEffect, HapticFeedback};

/// Sammelt Effekte während eines Dispatch, bis die Session sie ausliefert.
#[derive(Debug, Default)]
pub struct Outbox {
    pub effects: Vec<EditorEffect>,
    pub haptics: Vec<HapticFeedback>,
}

impl Outbox {
    pub fn push(&mut self, effect: EditorEffect) {
        self.effects.push(effect);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.effects.push(EditorEffect::error(message));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.effects.push(EditorEffect::success(message));
    }

    pub fn haptic(&mut self, feedback: HapticFeedback) {
        self.haptics.push(feedback);
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.haptics.is_empty()
    }

    /// Entnimmt alle gesammelten Effekte und Haptik-Signale.
    pub fn drain(&mut self) -> (Vec<EditorEffect>, Vec<HapticFeedback>) {
        (
            std::mem::take(&mut self.effects),
            std::mem::take(&mut self.haptics),
        )
    }
}
