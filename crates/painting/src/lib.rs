//! Skinloader painting core - the 64x64 skin buffer and everything that edits it
//!
//! This crate is engine-independent:
//! - [`canvas::SkinCanvas`] - The fixed-size RGBA pixel buffer
//! - [`fill`] - Orthogonal flood fill
//! - [`controller::EditorController`] - Tool state machine and pointer handling
//! - [`display`] - Zoomed render with the optional grid overlay
//! - [`io`] - PNG import and export
//! - [`geometry`] / [`raycast`] / [`uv`] - Box meshes and surface hits for painting on the preview

pub use glam;

pub mod canvas;
pub mod color;
pub mod constants;
pub mod controller;
pub mod display;
pub mod fill;
pub mod geometry;
pub mod io;
pub mod palette;
pub mod raycast;
pub mod types;
pub mod uv;

pub use canvas::*;
pub use color::*;
pub use constants::*;
pub use controller::*;
pub use display::*;
pub use geometry::*;
pub use io::*;
pub use palette::*;
pub use raycast::*;
pub use types::*;
pub use uv::*;
