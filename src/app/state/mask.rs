use crate::core::{clamp_brush_size, MaskPath};

/// Stand der Maske beim Absenden eines Jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSubmission {
    generation: u64,
    strokes: usize,
}

impl MaskSubmission {
    /// Anzahl mitgeschickter Striche.
    pub fn strokes(&self) -> usize {
        self.strokes
    }
}

/// Pinselstriche und Pinselgröße des Masking-Modus.
///
/// Masken sind nicht Teil der History. Striche werden nur angehängt; jedes
/// Leeren beginnt eine neue Generation.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskState {
    pub strokes: Vec<MaskPath>,
    pub brush_size: f32,
    generation: u64,
}

impl MaskState {
    pub fn new(brush_size: f32) -> Self {
        Self {
            strokes: Vec::new(),
            brush_size: clamp_brush_size(brush_size),
            generation: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.generation += 1;
    }

    /// Leert die Striche und setzt die Pinselgröße zurück.
    pub fn reset(&mut self, brush_size: f32) {
        self.clear();
        self.brush_size = clamp_brush_size(brush_size);
    }

    /// Merkt sich, welche Striche gerade abgeschickt werden.
    pub fn submission(&self) -> MaskSubmission {
        MaskSubmission {
            generation: self.generation,
            strokes: self.strokes.len(),
        }
    }

    /// Entfernt die abgeschickten Striche, später gemalte bleiben.
    ///
    /// Wurde die Maske seitdem geleert, ist nichts mehr zu entfernen.
    pub fn remove_submitted(&mut self, submission: MaskSubmission) -> usize {
        if submission.generation != self.generation {
            return 0;
        }
        let count = submission.strokes.min(self.strokes.len());
        self.strokes.drain(..count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MaskPoint;

    fn stroke(x: f32) -> MaskPath {
        MaskPath::new(vec![MaskPoint::new(x, x)], 20.0)
    }

    #[test]
    fn remove_submitted_keeps_later_strokes() {
        let mut mask = MaskState::new(30.0);
        mask.strokes.push(stroke(1.0));
        mask.strokes.push(stroke(2.0));
        let submission = mask.submission();
        mask.strokes.push(stroke(3.0));

        assert_eq!(mask.remove_submitted(submission), 2);
        assert_eq!(mask.strokes, vec![stroke(3.0)]);
    }

    #[test]
    fn remove_submitted_after_clear_is_noop() {
        let mut mask = MaskState::new(30.0);
        mask.strokes.push(stroke(1.0));
        let submission = mask.submission();
        mask.clear();
        mask.strokes.push(stroke(5.0));

        assert_eq!(mask.remove_submitted(submission), 0);
        assert_eq!(mask.strokes.len(), 1);
    }
}
