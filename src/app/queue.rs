//! Queue der serverseitigen Tools bis zum nächsten "Generate".

use crate::core::{CommandValue, MaskPath, MaskPayload, SettingsRecord};
use crate::registry::{self, CommandId, Conflict, ToolParameter};
use indexmap::IndexMap;
use serde::Serialize;

/// Ein wartendes Queue-Tool mit Wert und optionalen Zusatzparametern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueEntry {
    pub value: CommandValue,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<ToolParameter, f64>,
}

impl QueueEntry {
    pub fn new(value: CommandValue) -> Self {
        Self {
            value,
            parameters: IndexMap::new(),
        }
    }
}

/// Ergebnis eines Flush: fertige Settings plus Maske für den Job.
#[derive(Debug, Clone, PartialEq)]
pub struct FlushPayload {
    pub settings: SettingsRecord,
    pub mask: Option<MaskPayload>,
    /// Geleerte Einträge, um sie bei einem Fehlschlag zurückzulegen
    pub entries: IndexMap<CommandId, QueueEntry>,
}

/// Wartende Queue-Tools in Einfüge-Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    entries: IndexMap<CommandId, QueueEntry>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Tool ein oder aktualisiert seinen Wert (Parameter bleiben erhalten).
    pub fn enqueue(&mut self, id: CommandId, value: CommandValue) {
        match self.entries.get_mut(&id) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(id, QueueEntry::new(value));
            }
        }
    }

    /// Entfernt ein Tool; `false` wenn es nicht wartete.
    pub fn dequeue(&mut self, id: CommandId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    /// Setzt einen Zusatzparameter, nur für bereits wartende Tools.
    pub fn set_parameter(&mut self, id: CommandId, parameter: ToolParameter, value: f64) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        let value = registry::tool_by_id(id)
            .and_then(|descriptor| descriptor.parameter(parameter))
            .map_or(value, |spec| f64::from(spec.bounds.clamp(value as f32)));
        entry.parameters.insert(parameter, value);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: CommandId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: CommandId) -> Option<&QueueEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &IndexMap<CommandId, QueueEntry> {
        &self.entries
    }

    pub fn ids(&self) -> Vec<CommandId> {
        self.entries.keys().copied().collect()
    }

    /// Lesbare Zusammenfassung, z.B. "Face Restoration + Super Resolution (2x)".
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(id, entry)| {
                registry::tool_by_id(*id).map(|tool| tool.summary_label(&entry.value))
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Konflikte zwischen wartenden Tools und einem optional aktiven Mode-Tool.
    pub fn conflicts(&self, active_mode_tool: Option<CommandId>) -> Vec<Conflict> {
        let mut active = self.ids();
        active.extend(active_mode_tool);
        registry::detect_conflicts(&active)
    }

    /// Baut die Job-Payload auf einer Kopie von `base` und leert die Queue.
    ///
    /// `base` selbst bleibt unverändert.
    pub fn flush(&mut self, base: &SettingsRecord, mask: &[MaskPath]) -> FlushPayload {
        let entries = std::mem::take(&mut self.entries);
        FlushPayload {
            settings: merge_entries(base, &entries),
            mask: MaskPayload::from_strokes(mask),
            entries,
        }
    }

    /// Legt Einträge aus einem fehlgeschlagenen Flush zurück,
    /// ohne inzwischen neu eingereihte Werte zu überschreiben.
    pub fn restore(&mut self, entries: IndexMap<CommandId, QueueEntry>) {
        for (id, entry) in entries {
            self.entries.entry(id).or_insert(entry);
        }
    }
}

/// Überschreibt die Felder von `base` mit den Queue-Werten.
pub fn merge_entries(
    base: &SettingsRecord,
    entries: &IndexMap<CommandId, QueueEntry>,
) -> SettingsRecord {
    let mut settings = base.clone();
    for (id, entry) in entries {
        let Some(field) = registry::tool_by_id(*id).and_then(|tool| tool.field) else {
            log::warn!("Queue-Eintrag ohne Settings-Feld ignoriert: {}", id);
            continue;
        };
        settings.apply(field, &entry.value);
        for (parameter, value) in &entry.parameters {
            settings.apply(parameter.field(), &CommandValue::Number(*value));
        }
    }
    settings
}
