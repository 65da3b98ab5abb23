//! Scene descriptor types and the free-text prompt normalizer.
//!
//! [`normalize`] maps an arbitrary prompt string onto a fully populated
//! [`SceneDescriptor`]. Each classified field is derived by first-match-wins
//! keyword search over the raw text; when no keyword matches, the field's
//! default applies. The function is pure and total — there is no failure
//! path and no partially populated descriptor.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::prompt::DescriptionClauses;

// ---------------------------------------------------------------------------
// Field enums
// ---------------------------------------------------------------------------

/// Camera angle extracted from the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraAngle {
    #[default]
    Front,
    Wide,
    Top,
    #[serde(rename = "close-up")]
    CloseUp,
}

impl CameraAngle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAngle::Front => "front",
            CameraAngle::Wide => "wide",
            CameraAngle::Top => "top",
            CameraAngle::CloseUp => "close-up",
        }
    }
}

/// Lighting style extracted from the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingType {
    #[default]
    Soft,
    Warm,
    Cool,
    Dramatic,
}

impl LightingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightingType::Soft => "soft",
            LightingType::Warm => "warm",
            LightingType::Cool => "cool",
            LightingType::Dramatic => "dramatic",
        }
    }
}

/// Color palette preset extracted from the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettePreset {
    #[default]
    Natural,
    Vibrant,
    Cinematic,
    Noir,
}

impl PalettePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PalettePreset::Natural => "natural",
            PalettePreset::Vibrant => "vibrant",
            PalettePreset::Cinematic => "cinematic",
            PalettePreset::Noir => "noir",
        }
    }
}

impl std::str::FromStr for CameraAngle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(CameraAngle::Front),
            "wide" => Ok(CameraAngle::Wide),
            "top" => Ok(CameraAngle::Top),
            "close-up" => Ok(CameraAngle::CloseUp),
            other => Err(CoreError::Validation(format!(
                "Invalid camera angle '{other}'. Must be one of: front, wide, top, close-up"
            ))),
        }
    }
}

impl std::str::FromStr for LightingType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soft" => Ok(LightingType::Soft),
            "warm" => Ok(LightingType::Warm),
            "cool" => Ok(LightingType::Cool),
            "dramatic" => Ok(LightingType::Dramatic),
            other => Err(CoreError::Validation(format!(
                "Invalid lighting type '{other}'. Must be one of: soft, warm, cool, dramatic"
            ))),
        }
    }
}

impl std::str::FromStr for PalettePreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(PalettePreset::Natural),
            "vibrant" => Ok(PalettePreset::Vibrant),
            "cinematic" => Ok(PalettePreset::Cinematic),
            "noir" => Ok(PalettePreset::Noir),
            other => Err(CoreError::Validation(format!(
                "Invalid color palette '{other}'. Must be one of: natural, vibrant, cinematic, noir"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// Camera settings block of a [`SceneDescriptor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub angle: CameraAngle,
}

/// Lighting settings block of a [`SceneDescriptor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lighting {
    #[serde(rename = "type")]
    pub kind: LightingType,
}

/// Color palette block of a [`SceneDescriptor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub preset: PalettePreset,
}

/// Normalized structured record of a scene prompt.
///
/// Wire format (the `color_palette` key is snake_case, matching the
/// stored history format):
///
/// ```json
/// {
///   "scene": "a wide dramatic forest",
///   "camera": { "angle": "wide" },
///   "lighting": { "type": "dramatic" },
///   "color_palette": { "preset": "natural" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Original free-text description, verbatim.
    pub scene: String,
    pub camera: Camera,
    pub lighting: Lighting,
    pub color_palette: ColorPalette,
}

impl SceneDescriptor {
    /// Clauses for upstream prompt assembly.
    ///
    /// A clause is emitted only for fields that were actually triggered by
    /// a keyword (i.e. are non-default); defaults add nothing to the
    /// upstream prompt.
    pub fn clauses(&self) -> DescriptionClauses<'_> {
        DescriptionClauses {
            camera_angle: (self.camera.angle != CameraAngle::default())
                .then(|| self.camera.angle.as_str()),
            lighting: (self.lighting.kind != LightingType::default())
                .then(|| self.lighting.kind.as_str()),
            color_palette: (self.color_palette.preset != PalettePreset::default())
                .then(|| self.color_palette.preset.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Camera keywords in priority order. `close` deliberately also matches
/// prompts like "closeup shot" — substring containment, not word matching.
const CAMERA_KEYWORDS: &[(&str, CameraAngle)] = &[
    ("wide", CameraAngle::Wide),
    ("top", CameraAngle::Top),
    ("close", CameraAngle::CloseUp),
];

/// Lighting keywords in priority order.
const LIGHTING_KEYWORDS: &[(&str, LightingType)] = &[
    ("warm", LightingType::Warm),
    ("cool", LightingType::Cool),
    ("dramatic", LightingType::Dramatic),
];

/// Palette keywords in priority order.
const PALETTE_KEYWORDS: &[(&str, PalettePreset)] = &[
    ("vibrant", PalettePreset::Vibrant),
    ("cinematic", PalettePreset::Cinematic),
    ("noir", PalettePreset::Noir),
];

/// First keyword (in priority order) contained in `text` wins; otherwise
/// the field default applies.
fn first_match<T: Copy + Default>(text: &str, keywords: &[(&str, T)]) -> T {
    keywords
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|&(_, value)| value)
        .unwrap_or_default()
}

/// Normalize a free-text prompt into a [`SceneDescriptor`].
///
/// Matching is case-sensitive substring containment on the raw text.
/// Over-matching ("warmth" contains "warm") is documented current
/// behavior, not a bug.
pub fn normalize(prompt: &str) -> SceneDescriptor {
    SceneDescriptor {
        scene: prompt.to_string(),
        camera: Camera {
            angle: first_match(prompt, CAMERA_KEYWORDS),
        },
        lighting: Lighting {
            kind: first_match(prompt, LIGHTING_KEYWORDS),
        },
        color_palette: ColorPalette {
            preset: first_match(prompt, PALETTE_KEYWORDS),
        },
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a generation prompt: must contain at least one non-whitespace
/// character.
pub fn validate_prompt(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Prompt must not be empty".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
