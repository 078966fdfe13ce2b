//! Einstellungs-Datensatz des Editors inklusive Wertebereiche.
//!
//! `SettingsRecord` ist ein reiner Wert: Änderungen erzeugen keinen geteilten
//! Zustand, History-Einträge sind Kopien. Zahlen werden beim Schreiben auf
//! ihre Bereiche geklemmt, nie abgewiesen.

use super::value::CommandValue;
use serde::{Deserialize, Serialize};

/// Geschlossener Wertebereich eines Schiebereglers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Klemmt `value` auf `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

// ── Wertebereiche ───────────────────────────────────────────────────

/// Helligkeit (1.0 = unverändert).
pub const BRIGHTNESS_BOUNDS: Bounds = Bounds::new(0.5, 1.5);
/// Kontrast (1.0 = unverändert).
pub const CONTRAST_BOUNDS: Bounds = Bounds::new(0.5, 1.5);
/// Sättigung (0.0 = Graustufen).
pub const SATURATION_BOUNDS: Bounds = Bounds::new(0.0, 2.0);
/// Treue der Gesichtsrekonstruktion.
pub const FIDELITY_BOUNDS: Bounds = Bounds::new(0.0, 1.0);
/// Künstlerischer Faktor der Kolorierung.
pub const RENDER_FACTOR_BOUNDS: Bounds = Bounds::new(10.0, 45.0);
/// Erlaubte Upscale-Faktoren.
pub const UPSCALE_FACTORS: [u8; 3] = [1, 2, 4];

/// Standard-Fidelity.
pub const DEFAULT_FIDELITY: f32 = 0.5;
/// Standard-Render-Faktor.
pub const DEFAULT_RENDER_FACTOR: f32 = 35.0;

/// Filter-Preset der Anpassungs-Zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPreset {
    #[default]
    None,
    Vintage,
    Cinematic,
    BwClassic,
    BwNoir,
    Cool,
    Warm,
    Vivid,
    Fade,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 9] = [
        FilterPreset::None,
        FilterPreset::Vintage,
        FilterPreset::Cinematic,
        FilterPreset::BwClassic,
        FilterPreset::BwNoir,
        FilterPreset::Cool,
        FilterPreset::Warm,
        FilterPreset::Vivid,
        FilterPreset::Fade,
    ];

    /// Interner Schlüssel (z.B. `"bw_noir"`).
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vintage => "vintage",
            Self::Cinematic => "cinematic",
            Self::BwClassic => "bw_classic",
            Self::BwNoir => "bw_noir",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Vivid => "vivid",
            Self::Fade => "fade",
        }
    }

    /// Anzeigename für die Preset-Leiste.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Vintage => "Vintage",
            Self::Cinematic => "Cinematic",
            Self::BwClassic => "B&W Classic",
            Self::BwNoir => "B&W Noir",
            Self::Cool => "Cool",
            Self::Warm => "Warm",
            Self::Vivid => "Vivid",
            Self::Fade => "Fade",
        }
    }

    /// Sucht ein Preset über Schlüssel oder Anzeigename; Unbekanntes wird zu `None`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| {
                preset.key().eq_ignore_ascii_case(name) || preset.label().eq_ignore_ascii_case(name)
            })
            .unwrap_or_default()
    }
}

/// Einzelnes beschreibbares Feld des `SettingsRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    RemoveScratches,
    FaceRestoration,
    Colorize,
    Dehaze,
    AutoEnhance,
    RemoveBackground,
    WhiteBalance,
    UpscaleX,
    Brightness,
    Contrast,
    Saturation,
    DenoiseStrength,
    Fidelity,
    RenderFactor,
    FilterPreset,
    Prompt,
}

/// Alle aktuellen Bearbeitungsparameter eines Bildes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsRecord {
    pub remove_scratches: bool,
    pub face_restoration: bool,
    pub colorize: bool,
    pub dehaze: bool,
    pub auto_enhance: bool,
    pub remove_background: bool,
    pub white_balance: bool,
    /// Upscale-Faktor, immer einer aus `UPSCALE_FACTORS`
    #[serde(rename = "upscaleX")]
    pub upscale_x: u8,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub denoise_strength: u32,
    pub fidelity: f32,
    #[serde(rename = "render_factor")]
    pub render_factor: f32,
    pub filter_preset: FilterPreset,
    /// Prompt für generative Bearbeitung
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            remove_scratches: false,
            face_restoration: false,
            colorize: false,
            dehaze: false,
            auto_enhance: false,
            remove_background: false,
            white_balance: false,
            upscale_x: 1,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            denoise_strength: 0,
            fidelity: DEFAULT_FIDELITY,
            render_factor: DEFAULT_RENDER_FACTOR,
            filter_preset: FilterPreset::None,
            prompt: None,
        }
    }
}

impl SettingsRecord {
    /// Prüft, ob der Datensatz den Standardwerten entspricht.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Schreibt einen Wert in ein Feld (geklemmt) und meldet, ob sich etwas geändert hat.
    pub fn apply(&mut self, field: SettingField, value: &CommandValue) -> bool {
        match field {
            SettingField::RemoveScratches => replace(&mut self.remove_scratches, value.as_bool()),
            SettingField::FaceRestoration => replace(&mut self.face_restoration, value.as_bool()),
            SettingField::Colorize => replace(&mut self.colorize, value.as_bool()),
            SettingField::Dehaze => replace(&mut self.dehaze, value.as_bool()),
            SettingField::AutoEnhance => replace(&mut self.auto_enhance, value.as_bool()),
            SettingField::RemoveBackground => replace(&mut self.remove_background, value.as_bool()),
            SettingField::WhiteBalance => replace(&mut self.white_balance, value.as_bool()),
            SettingField::UpscaleX => match value.as_number() {
                Some(factor) => replace(&mut self.upscale_x, snap_upscale(factor)),
                None => false,
            },
            SettingField::Brightness => apply_bounded(&mut self.brightness, value, BRIGHTNESS_BOUNDS),
            SettingField::Contrast => apply_bounded(&mut self.contrast, value, CONTRAST_BOUNDS),
            SettingField::Saturation => apply_bounded(&mut self.saturation, value, SATURATION_BOUNDS),
            SettingField::Fidelity => apply_bounded(&mut self.fidelity, value, FIDELITY_BOUNDS),
            SettingField::RenderFactor => {
                apply_bounded(&mut self.render_factor, value, RENDER_FACTOR_BOUNDS)
            }
            SettingField::DenoiseStrength => match value.as_number() {
                Some(strength) => replace(&mut self.denoise_strength, clamp_denoise(strength)),
                None => false,
            },
            SettingField::FilterPreset => {
                let preset = match value {
                    CommandValue::Text(name) => FilterPreset::from_name(name),
                    _ => FilterPreset::None,
                };
                replace(&mut self.filter_preset, preset)
            }
            SettingField::Prompt => {
                let prompt = value
                    .as_text()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_string);
                replace(&mut self.prompt, prompt)
            }
        }
    }

    /// Liest ein Feld als `CommandValue` (z.B. für Slider-Vorbelegung).
    pub fn value_of(&self, field: SettingField) -> CommandValue {
        match field {
            SettingField::RemoveScratches => self.remove_scratches.into(),
            SettingField::FaceRestoration => self.face_restoration.into(),
            SettingField::Colorize => self.colorize.into(),
            SettingField::Dehaze => self.dehaze.into(),
            SettingField::AutoEnhance => self.auto_enhance.into(),
            SettingField::RemoveBackground => self.remove_background.into(),
            SettingField::WhiteBalance => self.white_balance.into(),
            SettingField::UpscaleX => u32::from(self.upscale_x).into(),
            SettingField::Brightness => self.brightness.into(),
            SettingField::Contrast => self.contrast.into(),
            SettingField::Saturation => self.saturation.into(),
            SettingField::DenoiseStrength => self.denoise_strength.into(),
            SettingField::Fidelity => self.fidelity.into(),
            SettingField::RenderFactor => self.render_factor.into(),
            SettingField::FilterPreset => self.filter_preset.key().into(),
            SettingField::Prompt => self.prompt.clone().unwrap_or_default().into(),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn apply_bounded(slot: &mut f32, value: &CommandValue, bounds: Bounds) -> bool {
    match value.as_number() {
        Some(number) => replace(slot, bounds.clamp(number as f32)),
        None => {
            log::debug!("Nicht-numerischer Wert für Slider ignoriert: {:?}", value);
            false
        }
    }
}

/// Rastet einen beliebigen Faktor auf den nächsten erlaubten Upscale-Wert ein.
/// Bei Gleichstand gewinnt der kleinere Faktor.
pub fn snap_upscale(factor: f64) -> u8 {
    let mut best = UPSCALE_FACTORS[0];
    for candidate in UPSCALE_FACTORS {
        let distance = (f64::from(candidate) - factor).abs();
        if distance < (f64::from(best) - factor).abs() {
            best = candidate;
        }
    }
    best
}

/// Rauschminderung ist nach unten bei 0 begrenzt.
pub fn clamp_denoise(strength: f64) -> u32 {
    strength.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
