//! Generischer, begrenzter Undo/Redo-Stack über Wert-Snapshots.
//!
//! Der Stack kennt keine Editor-Semantik: Einträge werden nur per `Clone`
//! kopiert und per `PartialEq` auf Duplikate geprüft.
//!
//! Verhalten bei voller Tiefe: Sliding Window. Der älteste Eintrag fällt weg,
//! der Cursor zeigt danach weiterhin auf den zuletzt gepushten Eintrag.

use serde::Serialize;

/// Standard-Tiefe der History.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Lesesicht auf die Cursor-Position, z.B. für UI-Snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryCursor {
    /// Aktuelle Position (0-basiert), `None` bei leerer History
    pub index: Option<usize>,
    /// Anzahl gespeicherter Einträge
    pub len: usize,
    /// Undo möglich
    pub can_undo: bool,
    /// Redo möglich
    pub can_redo: bool,
}

/// Begrenzter Undo/Redo-Stack mit Branch-Truncation.
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    entries: Vec<T>,
    index: usize,
    max_depth: usize,
}

impl<T: Clone + PartialEq> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<T: Clone + PartialEq> HistoryStack<T> {
    /// Erstellt eine leere History mit maximaler Tiefe (mindestens 1).
    pub fn new(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: Vec::with_capacity(max_depth),
            index: 0,
            max_depth,
        }
    }

    /// Erstellt eine History mit genau einem Basis-Eintrag.
    pub fn with_baseline(baseline: T, max_depth: usize) -> Self {
        let mut history = Self::new(max_depth);
        history.entries.push(baseline);
        history
    }

    /// Legt einen neuen Snapshot ab.
    ///
    /// Gibt `false` zurück, wenn der Snapshot dem aktuellen Eintrag entspricht
    /// (kein Duplikat direkt hintereinander).
    pub fn push(&mut self, snapshot: T) -> bool {
        if self.current() == Some(&snapshot) {
            log::trace!("History: Duplikat ignoriert");
            return false;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(snapshot);

        if self.entries.len() > self.max_depth {
            let overflow = self.entries.len() - self.max_depth;
            self.entries.drain(..overflow);
        }
        self.index = self.entries.len() - 1;
        true
    }

    /// Geht einen Schritt zurück. `None` wenn nichts zu tun ist.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Geht einen Schritt vor. `None` wenn nichts zu tun ist.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    /// Springt direkt zu einem Eintrag. Ungültige Indizes sind ein No-op.
    pub fn jump_to(&mut self, index: usize) -> Option<&T> {
        if index >= self.entries.len() {
            return None;
        }
        self.index = index;
        self.entries.get(index)
    }

    /// Aktueller Eintrag, `None` bei leerer History.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.index)
    }

    /// Undo ist möglich, wenn der Cursor nicht am Anfang steht.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    /// Redo ist möglich, wenn hinter dem Cursor noch Einträge liegen.
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index < self.entries.len() - 1
    }

    /// Cursor-Position, `None` bei leerer History.
    pub fn index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Read-only Sicht auf alle Einträge (älteste zuerst).
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Leert die History vollständig.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    /// Ersetzt den gesamten Inhalt durch einen einzelnen Basis-Eintrag.
    pub fn reset(&mut self, baseline: T) {
        self.clear();
        self.entries.push(baseline);
    }

    /// Kompakte Cursor-Sicht für Frontends.
    pub fn cursor(&self) -> HistoryCursor {
        HistoryCursor {
            index: self.index(),
            len: self.len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
