//! Statischer Katalog aller Tools und Rezepte.
//!
//! Die Reihenfolge innerhalb einer Zone ist die Anzeige-Reihenfolge.

use super::{
    ChoiceOption, CommandDescriptor, CommandId, ExecutionType, ParameterSpec, RecipeStep,
    RecipeValue, ToolParameter, ValueSchema, Zone,
};
use crate::core::settings::{
    Bounds, SettingField, BRIGHTNESS_BOUNDS, CONTRAST_BOUNDS, DEFAULT_FIDELITY,
    DEFAULT_RENDER_FACTOR, FIDELITY_BOUNDS, RENDER_FACTOR_BOUNDS, SATURATION_BOUNDS,
};
use crate::core::FocusMode;

const UPSCALE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        label: "2x",
        value: 2.0,
    },
    ChoiceOption {
        label: "4x",
        value: 4.0,
    },
];

const FIDELITY_PARAMETER: &[ParameterSpec] = &[ParameterSpec {
    parameter: ToolParameter::Fidelity,
    label: "Fidelity",
    bounds: FIDELITY_BOUNDS,
    step: 0.1,
    default: DEFAULT_FIDELITY,
}];

const RENDER_FACTOR_PARAMETER: &[ParameterSpec] = &[ParameterSpec {
    parameter: ToolParameter::RenderFactor,
    label: "Artistic Factor",
    bounds: RENDER_FACTOR_BOUNDS,
    step: 1.0,
    default: DEFAULT_RENDER_FACTOR,
}];

const fn slider(bounds: Bounds, step: f32) -> ValueSchema {
    ValueSchema::Slider {
        bounds,
        step,
        default: 1.0,
    }
}

const fn queue(
    id: CommandId,
    zone: Zone,
    label: &'static str,
    description: &'static str,
    field: SettingField,
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        execution: ExecutionType::Queue,
        zone,
        label,
        description,
        schema: ValueSchema::Toggle,
        field: Some(field),
        unit: "",
        parameters: &[],
        focus_mode: None,
        steps: &[],
    }
}

const fn live(
    id: CommandId,
    label: &'static str,
    schema: ValueSchema,
    field: SettingField,
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        execution: ExecutionType::Live,
        zone: Zone::Adjust,
        label,
        description: "",
        schema,
        field: Some(field),
        unit: "",
        parameters: &[],
        focus_mode: None,
        steps: &[],
    }
}

const fn mode(
    id: CommandId,
    zone: Zone,
    label: &'static str,
    description: &'static str,
    focus_mode: FocusMode,
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        execution: ExecutionType::Mode,
        zone,
        label,
        description,
        schema: ValueSchema::Trigger,
        field: None,
        unit: "",
        parameters: &[],
        focus_mode: Some(focus_mode),
        steps: &[],
    }
}

const fn recipe(
    id: CommandId,
    label: &'static str,
    description: &'static str,
    steps: &'static [RecipeStep],
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        execution: ExecutionType::Recipe,
        zone: Zone::Insight,
        label,
        description,
        schema: ValueSchema::Trigger,
        field: None,
        unit: "",
        parameters: &[],
        focus_mode: None,
        steps,
    }
}

const fn on(id: CommandId) -> RecipeStep {
    RecipeStep {
        id,
        value: RecipeValue::Flag(true),
    }
}

const fn set(id: CommandId, value: f64) -> RecipeStep {
    RecipeStep {
        id,
        value: RecipeValue::Number(value),
    }
}

const FIX_ALL_STEPS: &[RecipeStep] = &[
    on(CommandId::FaceRestoration),
    set(CommandId::UpscaleX, 2.0),
];

const OLD_PHOTO_STEPS: &[RecipeStep] = &[
    on(CommandId::FaceRestoration),
    on(CommandId::RemoveScratches),
    on(CommandId::Colorize),
];

const PORTRAIT_PRO_STEPS: &[RecipeStep] = &[
    on(CommandId::FaceRestoration),
    set(CommandId::UpscaleX, 2.0),
    on(CommandId::AutoEnhance),
];

/// Alle Tools und Rezepte.
pub static CATALOG: &[CommandDescriptor] = &[
    // ── Restore ─────────────────────────────────────────────────────
    CommandDescriptor {
        parameters: FIDELITY_PARAMETER,
        ..queue(
            CommandId::FaceRestoration,
            Zone::Restore,
            "Face Restoration",
            "Recover facial details",
            SettingField::FaceRestoration,
        )
    },
    queue(
        CommandId::RemoveScratches,
        Zone::Restore,
        "Scratch Removal",
        "Remove scratches, dust and tears",
        SettingField::RemoveScratches,
    ),
    CommandDescriptor {
        parameters: RENDER_FACTOR_PARAMETER,
        ..queue(
            CommandId::Colorize,
            Zone::Restore,
            "Colorize Photo",
            "Add natural colors to black and white photos",
            SettingField::Colorize,
        )
    },
    queue(
        CommandId::Dehaze,
        Zone::Restore,
        "Dehaze",
        "Remove fog and haze",
        SettingField::Dehaze,
    ),
    // ── Enhance ─────────────────────────────────────────────────────
    CommandDescriptor {
        schema: ValueSchema::Options {
            options: UPSCALE_OPTIONS,
        },
        unit: "x",
        ..queue(
            CommandId::UpscaleX,
            Zone::Enhance,
            "Super Resolution",
            "Increase resolution with AI",
            SettingField::UpscaleX,
        )
    },
    queue(
        CommandId::AutoEnhance,
        Zone::Enhance,
        "Auto Enhance",
        "One-tap color and light correction",
        SettingField::AutoEnhance,
    ),
    CommandDescriptor {
        schema: ValueSchema::Counter,
        ..queue(
            CommandId::DenoiseStrength,
            Zone::Enhance,
            "Denoise",
            "Reduce sensor noise and grain",
            SettingField::DenoiseStrength,
        )
    },
    CommandDescriptor {
        zone: Zone::Enhance,
        description: "Neutralize color casts",
        ..live(
            CommandId::WhiteBalance,
            "White Balance",
            ValueSchema::Toggle,
            SettingField::WhiteBalance,
        )
    },
    // ── Create ──────────────────────────────────────────────────────
    mode(
        CommandId::MagicEraser,
        Zone::Create,
        "Magic Eraser",
        "Remove unwanted objects by painting",
        FocusMode::Masking,
    ),
    queue(
        CommandId::RemoveBackground,
        Zone::Create,
        "Remove Background",
        "Make background transparent",
        SettingField::RemoveBackground,
    ),
    CommandDescriptor {
        schema: ValueSchema::Prompt,
        ..queue(
            CommandId::GenerativeFill,
            Zone::Create,
            "Generative Edit",
            "Change content via text prompt",
            SettingField::Prompt,
        )
    },
    // ── Adjust ──────────────────────────────────────────────────────
    live(
        CommandId::Brightness,
        "Brightness",
        slider(BRIGHTNESS_BOUNDS, 0.05),
        SettingField::Brightness,
    ),
    live(
        CommandId::Contrast,
        "Contrast",
        slider(CONTRAST_BOUNDS, 0.05),
        SettingField::Contrast,
    ),
    live(
        CommandId::Saturation,
        "Saturation",
        slider(SATURATION_BOUNDS, 0.1),
        SettingField::Saturation,
    ),
    live(
        CommandId::FilterPreset,
        "Filters",
        ValueSchema::Presets,
        SettingField::FilterPreset,
    ),
    // ── Utilities ───────────────────────────────────────────────────
    mode(
        CommandId::Crop,
        Zone::Utilities,
        "Crop & Rotate",
        "Resize and rotate image",
        FocusMode::Cropping,
    ),
    // ── Rezepte ─────────────────────────────────────────────────────
    recipe(
        CommandId::FixAll,
        "Magic Fix",
        "Auto-detect and fix all issues",
        FIX_ALL_STEPS,
    ),
    recipe(
        CommandId::OldPhoto,
        "Old Photo",
        "Restore, repair and colorize vintage photos",
        OLD_PHOTO_STEPS,
    ),
    recipe(
        CommandId::PortraitPro,
        "Portrait Pro",
        "Sharpen faces and boost detail",
        PORTRAIT_PRO_STEPS,
    ),
];
