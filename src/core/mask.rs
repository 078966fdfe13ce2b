//! Masken-Striche für den Magic Eraser.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Minimale Pinselgröße in Pixeln.
pub const BRUSH_SIZE_MIN: f32 = 5.0;
/// Maximale Pinselgröße in Pixeln.
pub const BRUSH_SIZE_MAX: f32 = 100.0;

/// Punkt in Bildkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskPoint {
    pub x: f32,
    pub y: f32,
}

impl MaskPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Ein Pinselstrich: geordnete Punkte plus Pinselgröße beim Zeichnen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskPath {
    pub points: Vec<MaskPoint>,
    #[serde(default = "default_brush_size")]
    pub brush_size: f32,
}

fn default_brush_size() -> f32 {
    30.0
}

impl MaskPath {
    /// Erstellt einen Strich aus Punkten mit geklemmter Pinselgröße.
    pub fn new(points: Vec<MaskPoint>, brush_size: f32) -> Self {
        Self {
            points,
            brush_size: clamp_brush_size(brush_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Klemmt eine Pinselgröße auf den erlaubten Bereich.
pub fn clamp_brush_size(size: f32) -> f32 {
    if size.is_nan() {
        return BRUSH_SIZE_MIN;
    }
    size.clamp(BRUSH_SIZE_MIN, BRUSH_SIZE_MAX)
}

/// Maske, wie sie mit einem Job übertragen wird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskPayload {
    pub strokes: Vec<MaskPath>,
}

impl MaskPayload {
    /// Baut eine Payload, `None` wenn keine Striche vorliegen.
    pub fn from_strokes(strokes: &[MaskPath]) -> Option<Self> {
        let strokes: Vec<MaskPath> = strokes.iter().filter(|s| !s.is_empty()).cloned().collect();
        (!strokes.is_empty()).then_some(Self { strokes })
    }

    /// Kodiert die Striche als Base64-JSON für den Transport.
    pub fn to_base64(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Gegenstück zu `to_base64`; ein `data:...;base64,`-Präfix wird toleriert.
    pub fn from_base64(encoded: &str) -> Option<Self> {
        let raw = encoded
            .split_once("base64,")
            .map_or(encoded, |(_, data)| data);
        let bytes = STANDARD.decode(raw.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}
