//! Core-Domänentypen: Einstellungen, Masken, Modi, Jobs.

pub mod job;
pub mod mask;
pub mod mode;
pub mod settings;
pub mod value;

pub use job::{resolve_media_url, Job, JobId, JobStatus, ProjectHandle};
pub use mask::{clamp_brush_size, MaskPath, MaskPayload, MaskPoint};
pub use mode::{EditorMode, FocusMode};
pub use settings::{Bounds, FilterPreset, SettingField, SettingsRecord};
pub use value::CommandValue;
