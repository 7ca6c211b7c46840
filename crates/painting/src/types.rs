use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::constants::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

/// Active editing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Picker,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pencil, Tool::Eraser, Tool::Fill, Tool::Picker];

    /// Whether holding the pointer down and moving repeats the tool.
    /// Fill and picker act once per press.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }
}

/// Side length of the square brush, always within 1..=8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: BrushSize = BrushSize(MIN_BRUSH_SIZE);
    pub const MAX: BrushSize = BrushSize(MAX_BRUSH_SIZE);

    /// Clamps into the valid range.
    pub fn new(size: u8) -> Self {
        Self(size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn grow(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn shrink(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u8> for BrushSize {
    fn from(size: u8) -> Self {
        Self::new(size)
    }
}

impl From<BrushSize> for u8 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// Which of the six model parts a 3D pointer event came from.
///
/// All parts sample the same 64x64 texture, so the tag does not change
/// which pixel a hit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaceTag {
    Head,
    Body,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl FaceTag {
    pub const ALL: [FaceTag; 6] = [
        FaceTag::Head,
        FaceTag::Body,
        FaceTag::RightArm,
        FaceTag::LeftArm,
        FaceTag::RightLeg,
        FaceTag::LeftLeg,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FaceTag::Head => "head",
            FaceTag::Body => "body",
            FaceTag::RightArm => "rightArm",
            FaceTag::LeftArm => "leftArm",
            FaceTag::RightLeg => "rightLeg",
            FaceTag::LeftLeg => "leftLeg",
        }
    }
}

/// Layer selector from the tool panel. Purely a display hint: it never
/// isolates or filters writes to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LayerHint {
    #[default]
    All,
    Part(FaceTag),
}

impl LayerHint {
    /// Next entry in panel order: all, head, body, arms, legs, back to all.
    pub fn cycle(self) -> Self {
        match self {
            LayerHint::All => LayerHint::Part(FaceTag::ALL[0]),
            LayerHint::Part(tag) => {
                let pos = FaceTag::ALL.iter().position(|t| *t == tag).unwrap_or(0);
                FaceTag::ALL
                    .get(pos + 1)
                    .map(|t| LayerHint::Part(*t))
                    .unwrap_or(LayerHint::All)
            }
        }
    }

    /// Whether a part should be drawn highlighted under this hint.
    pub fn highlights(&self, tag: FaceTag) -> bool {
        matches!(self, LayerHint::Part(t) if *t == tag)
    }
}

/// Result of applying a tool once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing in the buffer or selection changed.
    Unchanged,
    /// `cells` pixels were written.
    Painted { cells: usize },
    /// The picker sampled this colour into the selection.
    Picked(Rgba),
}

impl EditOutcome {
    pub fn changed_pixels(&self) -> bool {
        matches!(self, EditOutcome::Painted { cells } if *cells > 0)
    }
}
