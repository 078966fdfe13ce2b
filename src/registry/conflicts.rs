//! Deklarative Konfliktregeln für gleichzeitig aktive Tools.
//!
//! Konflikte sind reine Hinweise und blockieren keinen Dispatch.

use super::CommandId;
use serde::Serialize;

/// Schweregrad eines Konflikts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictSeverity {
    Warning,
    Info,
}

/// Eine Regel: mindestens zwei der Tools gleichzeitig aktiv → Hinweis.
#[derive(Debug, Clone, Copy)]
pub struct ConflictRule {
    pub tools: &'static [CommandId],
    pub message: &'static str,
    pub severity: ConflictSeverity,
}

/// Gefundener Konflikt mit den tatsächlich beteiligten Tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub tools: Vec<CommandId>,
    pub message: &'static str,
    pub severity: ConflictSeverity,
}

pub static CONFLICT_RULES: &[ConflictRule] = &[
    ConflictRule {
        tools: &[CommandId::Crop, CommandId::UpscaleX],
        message: "Crop before upscaling for best results",
        severity: ConflictSeverity::Warning,
    },
    ConflictRule {
        tools: &[CommandId::RemoveBackground, CommandId::Colorize],
        message: "Background removal may affect colorization",
        severity: ConflictSeverity::Info,
    },
];

/// Prüft alle Regeln gegen die Menge aktiver Tools.
pub fn detect_conflicts(active: &[CommandId]) -> Vec<Conflict> {
    CONFLICT_RULES
        .iter()
        .filter_map(|rule| {
            let matching: Vec<CommandId> = rule
                .tools
                .iter()
                .copied()
                .filter(|tool| active.contains(tool))
                .collect();
            (matching.len() >= 2).then(|| Conflict {
                tools: matching,
                message: rule.message,
                severity: rule.severity,
            })
        })
        .collect()
}
