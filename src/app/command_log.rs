//! Protokoll der ausgeführten Commands einer Session.
//!
//! Die Replay-Binary gibt es zusammen mit dem Endzustand aus.

use super::EditorCommand;
use crate::registry::CommandId;
use serde::Serialize;
use std::collections::VecDeque;

/// Standard-Kapazität des Protokolls.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Ein protokollierter Command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedCommand {
    /// Laufende Nummer seit Session-Start, lückenlos auch nach Verdrängung
    pub seq: u64,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<CommandId>,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Clone)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
    next_seq: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kapazität mindestens 1; bei Überlauf fällt der älteste Eintrag weg.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            next_seq: 0,
        }
    }

    pub fn record(&mut self, command: &EditorCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.next_seq += 1;
        self.entries.push_back(LoggedCommand {
            seq: self.next_seq,
            name: command.name(),
            tool: command.tool(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller je protokollierten Commands.
    pub fn total_recorded(&self) -> u64 {
        self.next_seq
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Kopie der Einträge für die Ausgabe.
    pub fn to_vec(&self) -> Vec<LoggedCommand> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_name_and_tool() {
        let mut log = CommandLog::new();
        log.record(&EditorCommand::DequeueCommand {
            id: CommandId::Dehaze,
        });
        log.record(&EditorCommand::Undo);

        let entries = log.to_vec();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "dequeue");
        assert_eq!(entries[0].tool, Some(CommandId::Dehaze));
        assert_eq!(entries[1].seq, 2);
        assert_eq!(entries[1].tool, None);
    }

    #[test]
    fn overflow_evicts_oldest_and_keeps_numbering() {
        let mut log = CommandLog::with_capacity(3);
        for index in 0..5 {
            log.record(&EditorCommand::JumpTo { index });
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.total_recorded(), 5);
        let seqs: Vec<u64> = log.iter().map(|entry| entry.seq).collect();
        assert_eq!(seqs, vec![3, 4, 5]);
        assert_eq!(log.last().map(|entry| entry.name), Some("jump_to"));
    }

    #[test]
    fn serializes_without_empty_tool() {
        let mut log = CommandLog::new();
        log.record(&EditorCommand::ClearMask);

        let json = serde_json::to_string(&log.to_vec()).expect("Log serialisierbar");

        assert_eq!(json, r#"[{"seq":1,"name":"clear_mask"}]"#);
    }
}
