//! Command types carried by IPC messages.

use serde::{Deserialize, Serialize};

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Picker,
}

/// Body part of the preview model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    Head,
    Body,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

/// Where a pointer event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerTarget {
    /// The flat 2D canvas panel
    Canvas,
    /// A face of the 3D preview
    Face(PartKind),
}

/// Primary-button pointer activity, already resolved to buffer cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PointerCommand {
    Down { target: PointerTarget, x: i32, y: i32 },
    Move { target: PointerTarget, x: i32, y: i32 },
    Up,
    /// Pointer left the drawing surface
    Leave,
}

/// Highlighted part; `None` means the whole model.
pub type LayerSelection = Option<PartKind>;
