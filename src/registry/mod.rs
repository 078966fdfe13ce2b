//! Statischer Tool-Katalog: Command-IDs, Ausführungsarten, Zonen und Rezepte.
//!
//! Architektur:
//! - `CommandId`: Eindeutige Identifikation jedes Tools und Rezepts (mod.rs)
//! - `CommandDescriptor`: Unveränderliche Beschreibung samt Werte-Schema (mod.rs)
//! - `CATALOG`: Der statische Katalog (catalog.rs)
//! - `detect_conflicts()`: Deklarative Konfliktregeln für gleichzeitig aktive Tools (conflicts.rs)
//!
//! Der Katalog hält keinen Zustand, alle Funktionen sind reine Lookups.

mod catalog;
pub mod conflicts;

pub use catalog::CATALOG;
pub use conflicts::{detect_conflicts, Conflict, ConflictSeverity};

use crate::core::settings::{clamp_denoise, snap_upscale, Bounds, SettingField};
use crate::core::{CommandValue, FilterPreset, FocusMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CommandId
// =============================================================================

/// Eindeutige ID für jedes Tool und jedes Rezept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandId {
    // ── Restore ─────────────────────────────────────────────────────
    #[serde(rename = "faceRestoration")]
    FaceRestoration,
    #[serde(rename = "removeScratches")]
    RemoveScratches,
    #[serde(rename = "colorize")]
    Colorize,
    #[serde(rename = "dehaze")]
    Dehaze,

    // ── Enhance ─────────────────────────────────────────────────────
    #[serde(rename = "upscaleX")]
    UpscaleX,
    #[serde(rename = "autoEnhance")]
    AutoEnhance,
    #[serde(rename = "denoiseStrength")]
    DenoiseStrength,
    #[serde(rename = "whiteBalance")]
    WhiteBalance,

    // ── Create ──────────────────────────────────────────────────────
    #[serde(rename = "magic_eraser")]
    MagicEraser,
    #[serde(rename = "removeBackground")]
    RemoveBackground,
    #[serde(rename = "generativeFill")]
    GenerativeFill,

    // ── Adjust ──────────────────────────────────────────────────────
    #[serde(rename = "brightness")]
    Brightness,
    #[serde(rename = "contrast")]
    Contrast,
    #[serde(rename = "saturation")]
    Saturation,
    #[serde(rename = "filterPreset")]
    FilterPreset,

    // ── Utilities ───────────────────────────────────────────────────
    #[serde(rename = "crop")]
    Crop,

    // ── Rezepte ─────────────────────────────────────────────────────
    #[serde(rename = "fix_all")]
    FixAll,
    #[serde(rename = "old_photo")]
    OldPhoto,
    #[serde(rename = "portrait_pro")]
    PortraitPro,
}

impl CommandId {
    pub const ALL: [CommandId; 19] = [
        CommandId::FaceRestoration,
        CommandId::RemoveScratches,
        CommandId::Colorize,
        CommandId::Dehaze,
        CommandId::UpscaleX,
        CommandId::AutoEnhance,
        CommandId::DenoiseStrength,
        CommandId::WhiteBalance,
        CommandId::MagicEraser,
        CommandId::RemoveBackground,
        CommandId::GenerativeFill,
        CommandId::Brightness,
        CommandId::Contrast,
        CommandId::Saturation,
        CommandId::FilterPreset,
        CommandId::Crop,
        CommandId::FixAll,
        CommandId::OldPhoto,
        CommandId::PortraitPro,
    ];

    /// Externer Schlüssel, wie ihn die Clients und das Backend verwenden.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FaceRestoration => "faceRestoration",
            Self::RemoveScratches => "removeScratches",
            Self::Colorize => "colorize",
            Self::Dehaze => "dehaze",
            Self::UpscaleX => "upscaleX",
            Self::AutoEnhance => "autoEnhance",
            Self::DenoiseStrength => "denoiseStrength",
            Self::WhiteBalance => "whiteBalance",
            Self::MagicEraser => "magic_eraser",
            Self::RemoveBackground => "removeBackground",
            Self::GenerativeFill => "generativeFill",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
            Self::FilterPreset => "filterPreset",
            Self::Crop => "crop",
            Self::FixAll => "fix_all",
            Self::OldPhoto => "old_photo",
            Self::PortraitPro => "portrait_pro",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fehler beim Parsen einer unbekannten Tool-ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unbekannte Tool-ID: {0}")]
pub struct UnknownCommandId(pub String);

impl FromStr for CommandId {
    type Err = UnknownCommandId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCommandId(s.to_string()))
    }
}

/// Tool-spezifische Zusatzparameter eines Queue-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolParameter {
    Fidelity,
    RenderFactor,
}

impl ToolParameter {
    /// Feld im `SettingsRecord`, in das der Parameter beim Flush geschrieben wird.
    pub fn field(self) -> SettingField {
        match self {
            Self::Fidelity => SettingField::Fidelity,
            Self::RenderFactor => SettingField::RenderFactor,
        }
    }
}

// =============================================================================
// Deskriptoren
// =============================================================================

/// Wie `dispatch` ein Tool ausführt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionType {
    /// Sofort in die Settings, mit History-Eintrag
    Live,
    /// Sammelt sich in der Queue bis "Generate"
    Queue,
    /// Wechselt den Modus der Arbeitsfläche
    Mode,
    /// Makro aus mehreren Tools
    Recipe,
}

/// Bereich der Werkzeugleiste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Insight,
    Restore,
    Enhance,
    Create,
    Adjust,
    Utilities,
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::Insight,
        Zone::Restore,
        Zone::Enhance,
        Zone::Create,
        Zone::Adjust,
        Zone::Utilities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Insight => "Insight",
            Self::Restore => "Restore",
            Self::Enhance => "Enhance",
            Self::Create => "Creative",
            Self::Adjust => "Adjust",
            Self::Utilities => "Utilities",
        }
    }
}

/// Auswahl-Option eines Options-Tools (z.B. "2x").
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub value: f64,
}

/// Zulässige Werte eines Tools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueSchema {
    /// An/Aus
    Toggle,
    /// Kontinuierlicher Regler
    Slider {
        bounds: Bounds,
        step: f32,
        default: f32,
    },
    /// Feste Auswahl
    Options { options: &'static [ChoiceOption] },
    /// Ganzzahl ab 0 (0 = aus)
    Counter,
    /// Eines der Filter-Presets
    Presets,
    /// Freitext-Prompt
    Prompt,
    /// Kein Wert (Mode-Tools und Rezepte)
    Trigger,
}

/// Beschreibung eines Zusatzparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub parameter: ToolParameter,
    pub label: &'static str,
    pub bounds: Bounds,
    pub step: f32,
    pub default: f32,
}

/// Wert eines Rezept-Schritts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecipeValue {
    Flag(bool),
    Number(f64),
}

impl From<RecipeValue> for CommandValue {
    fn from(value: RecipeValue) -> Self {
        match value {
            RecipeValue::Flag(flag) => CommandValue::Bool(flag),
            RecipeValue::Number(number) => CommandValue::Number(number),
        }
    }
}

/// Ein Schritt eines Rezepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeStep {
    pub id: CommandId,
    pub value: RecipeValue,
}

/// Unveränderliche Beschreibung eines Tools oder Rezepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommandDescriptor {
    pub id: CommandId,
    pub execution: ExecutionType,
    pub zone: Zone,
    pub label: &'static str,
    pub description: &'static str,
    pub schema: ValueSchema,
    /// Zielfeld im `SettingsRecord` (Live- und Queue-Tools)
    #[serde(skip)]
    pub field: Option<SettingField>,
    /// Einheit für die Queue-Zusammenfassung, z.B. `"x"`
    pub unit: &'static str,
    pub parameters: &'static [ParameterSpec],
    /// Betretener Modus (nur Mode-Tools)
    pub focus_mode: Option<FocusMode>,
    /// Schritte (nur Rezepte)
    pub steps: &'static [RecipeStep],
}

impl CommandDescriptor {
    /// Normalisiert einen Queue-Wert; `None` bedeutet "aus der Queue entfernen".
    pub fn queue_value(&self, value: &CommandValue) -> Option<CommandValue> {
        match self.schema {
            ValueSchema::Toggle | ValueSchema::Trigger => {
                value.as_bool().then_some(CommandValue::Bool(true))
            }
            ValueSchema::Slider { bounds, .. } => value
                .as_number()
                .map(|number| CommandValue::Number(f64::from(bounds.clamp(number as f32)))),
            ValueSchema::Options { options } => {
                let number = match value {
                    CommandValue::Bool(true) => options.first().map(|o| o.value)?,
                    other => other.as_number()?,
                };
                let factor = f64::from(snap_upscale(number));
                options
                    .iter()
                    .any(|o| o.value == factor)
                    .then_some(CommandValue::Number(factor))
            }
            ValueSchema::Counter => {
                let strength = clamp_denoise(value.as_number()?);
                (strength > 0).then_some(CommandValue::Number(f64::from(strength)))
            }
            ValueSchema::Presets => match value {
                CommandValue::Text(name) => {
                    Some(CommandValue::from(FilterPreset::from_name(name).key()))
                }
                _ => None,
            },
            ValueSchema::Prompt => value
                .as_text()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(CommandValue::from),
        }
    }

    /// Spezifikation eines Zusatzparameters dieses Tools.
    pub fn parameter(&self, parameter: ToolParameter) -> Option<&'static ParameterSpec> {
        self.parameters.iter().find(|spec| spec.parameter == parameter)
    }

    /// Anzeige eines Queue-Eintrags für die Zusammenfassung.
    pub fn summary_label(&self, value: &CommandValue) -> String {
        match value {
            CommandValue::Number(number) => format!(
                "{} ({}{})",
                self.label,
                crate::core::value::format_number(*number),
                self.unit
            ),
            _ => self.label.to_string(),
        }
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Deskriptor zu einer ID.
pub fn tool_by_id(id: CommandId) -> Option<&'static CommandDescriptor> {
    CATALOG.iter().find(|descriptor| descriptor.id == id)
}

/// Deskriptor zu einem externen Schlüssel (z.B. `"faceRestoration"`).
pub fn tool_by_key(key: &str) -> Option<&'static CommandDescriptor> {
    key.parse::<CommandId>().ok().and_then(tool_by_id)
}

/// Alle Tools einer Zone in Katalog-Reihenfolge.
pub fn tools_by_zone(zone: Zone) -> Vec<&'static CommandDescriptor> {
    CATALOG.iter().filter(|d| d.zone == zone).collect()
}

fn tools_by_execution(execution: ExecutionType) -> Vec<&'static CommandDescriptor> {
    CATALOG.iter().filter(|d| d.execution == execution).collect()
}

pub fn queue_tools() -> Vec<&'static CommandDescriptor> {
    tools_by_execution(ExecutionType::Queue)
}

pub fn live_tools() -> Vec<&'static CommandDescriptor> {
    tools_by_execution(ExecutionType::Live)
}

pub fn mode_tools() -> Vec<&'static CommandDescriptor> {
    tools_by_execution(ExecutionType::Mode)
}

pub fn recipes() -> Vec<&'static CommandDescriptor> {
    tools_by_execution(ExecutionType::Recipe)
}

/// Mode-Tool, das einen Fokus-Modus betritt.
pub fn tool_for_focus_mode(mode: FocusMode) -> Option<&'static CommandDescriptor> {
    CATALOG.iter().find(|d| d.focus_mode == Some(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_id_has_exactly_one_descriptor() {
        for id in CommandId::ALL {
            let count = CATALOG.iter().filter(|d| d.id == id).count();
            assert_eq!(count, 1, "Deskriptor für {id} fehlt oder ist doppelt");
        }
        assert_eq!(CATALOG.len(), CommandId::ALL.len());
    }

    #[test]
    fn id_string_roundtrip() {
        for id in CommandId::ALL {
            assert_eq!(id.as_str().parse::<CommandId>(), Ok(id));
            let json = serde_json::to_string(&id).expect("Serialisierung sollte klappen");
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
        assert!("sharpen".parse::<CommandId>().is_err());
    }

    #[test]
    fn execution_types_are_consistent_with_payload() {
        for descriptor in CATALOG {
            match descriptor.execution {
                ExecutionType::Live | ExecutionType::Queue => {
                    assert!(descriptor.field.is_some(), "{} ohne Feld", descriptor.id)
                }
                ExecutionType::Mode => assert!(descriptor.focus_mode.is_some()),
                ExecutionType::Recipe => assert!(!descriptor.steps.is_empty()),
            }
        }
    }

    #[test]
    fn recipes_only_reference_queue_or_live_tools() {
        for recipe in recipes() {
            for step in recipe.steps {
                let target = tool_by_id(step.id).expect("Rezept-Ziel muss existieren");
                assert!(matches!(
                    target.execution,
                    ExecutionType::Queue | ExecutionType::Live
                ));
            }
        }
    }

    #[test]
    fn zone_lookup_returns_catalog_order() {
        let restore: Vec<CommandId> = tools_by_zone(Zone::Restore).iter().map(|d| d.id).collect();
        assert_eq!(
            restore,
            vec![
                CommandId::FaceRestoration,
                CommandId::RemoveScratches,
                CommandId::Colorize,
                CommandId::Dehaze
            ]
        );
    }

    #[test]
    fn classification_lists() {
        assert!(live_tools().iter().any(|d| d.id == CommandId::Brightness));
        assert!(queue_tools().iter().any(|d| d.id == CommandId::UpscaleX));
        assert_eq!(mode_tools().len(), 2);
        assert_eq!(recipes().len(), 3);
    }

    #[test]
    fn upscale_queue_value_snaps_and_deactivates_at_one() {
        let upscale = tool_by_id(CommandId::UpscaleX).expect("upscaleX existiert");
        assert_eq!(
            upscale.queue_value(&CommandValue::Number(3.7)),
            Some(CommandValue::Number(4.0))
        );
        assert_eq!(
            upscale.queue_value(&CommandValue::Bool(true)),
            Some(CommandValue::Number(2.0))
        );
        assert_eq!(upscale.queue_value(&CommandValue::Number(1.0)), None);
        assert_eq!(upscale.queue_value(&CommandValue::Bool(false)), None);
    }

    #[test]
    fn summary_label_formats_numbers() {
        let upscale = tool_by_id(CommandId::UpscaleX).expect("upscaleX existiert");
        assert_eq!(
            upscale.summary_label(&CommandValue::Number(2.0)),
            "Super Resolution (2x)"
        );
        let face = tool_by_id(CommandId::FaceRestoration).expect("faceRestoration existiert");
        assert_eq!(face.summary_label(&CommandValue::Bool(true)), "Face Restoration");
    }

    #[test]
    fn focus_mode_tools() {
        assert_eq!(
            tool_for_focus_mode(FocusMode::Masking).map(|d| d.id),
            Some(CommandId::MagicEraser)
        );
        assert_eq!(
            tool_for_focus_mode(FocusMode::Cropping).map(|d| d.id),
            Some(CommandId::Crop)
        );
    }
}
