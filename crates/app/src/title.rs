//! Window title mirror of the editor state
//!
//! Driven only by `EditorToUi` notifications, the same feed any other front
//! end would consume.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use skinloader_ipc::{EditorToUi, LayerSelection, PartKind, ToolKind};
use skinloader_scene::OutboundUiMessages;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TitleState {
    pub tool: ToolKind,
    pub color: String,
    pub brush_size: u8,
    pub show_grid: bool,
    pub layer: LayerSelection,
    /// Last imported or exported file name
    pub file: Option<String>,
    pub error: Option<String>,
}

impl Default for TitleState {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pencil,
            color: String::new(),
            brush_size: 1,
            show_grid: true,
            layer: None,
            file: None,
            error: None,
        }
    }
}

fn tool_label(tool: ToolKind) -> &'static str {
    match tool {
        ToolKind::Pencil => "Pencil",
        ToolKind::Eraser => "Eraser",
        ToolKind::Fill => "Fill",
        ToolKind::Picker => "Picker",
    }
}

fn part_label(part: PartKind) -> &'static str {
    match part {
        PartKind::Head => "head",
        PartKind::Body => "body",
        PartKind::RightArm => "right arm",
        PartKind::LeftArm => "left arm",
        PartKind::RightLeg => "right leg",
        PartKind::LeftLeg => "left leg",
    }
}

fn file_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

impl TitleState {
    pub fn apply(&mut self, msg: &EditorToUi) {
        if !matches!(msg, EditorToUi::Error { .. }) {
            self.error = None;
        }

        match msg {
            EditorToUi::Initialize { state } => {
                self.tool = state.tool;
                self.color = state.color.clone();
                self.brush_size = state.brush_size;
                self.show_grid = state.show_grid;
                self.layer = state.layer;
            }
            EditorToUi::ToolChanged { tool } => self.tool = *tool,
            EditorToUi::ColorChanged { color } => self.color = color.clone(),
            EditorToUi::BrushSizeChanged { size } => self.brush_size = *size,
            EditorToUi::LayerChanged { layer } => self.layer = *layer,
            EditorToUi::GridChanged { enabled } => self.show_grid = *enabled,
            EditorToUi::CanvasChanged => {}
            EditorToUi::Imported { path } | EditorToUi::Exported { path } => {
                self.file = Some(file_name(path));
            }
            EditorToUi::Error { message, .. } => self.error = Some(message.clone()),
        }
    }

    pub fn render(&self) -> String {
        let mut title = String::from("Skinloader");
        if let Some(file) = &self.file {
            title.push_str(&format!(" - {}", file));
        }
        title.push_str(&format!(
            " | {} | {} | {}px | grid {}",
            tool_label(self.tool),
            self.color,
            self.brush_size,
            if self.show_grid { "on" } else { "off" },
        ));
        if let Some(part) = self.layer {
            title.push_str(&format!(" | {}", part_label(part)));
        }
        if let Some(error) = &self.error {
            title.push_str(&format!(" | error: {}", error));
        }
        title
    }
}

pub fn update_window_title(
    mut outbound: ResMut<OutboundUiMessages>,
    mut title: ResMut<TitleState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let messages = outbound.drain();
    if messages.is_empty() {
        return;
    }

    for msg in &messages {
        title.apply(msg);
    }

    if let Ok(mut window) = windows.single_mut() {
        window.title = title.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinloader_ipc::EditorState;

    fn initialized() -> TitleState {
        let mut title = TitleState::default();
        title.apply(&EditorToUi::Initialize {
            state: EditorState {
                tool: ToolKind::Pencil,
                color: "#9b87f5".into(),
                brush_size: 1,
                show_grid: true,
                layer: None,
            },
        });
        title
    }

    #[test]
    fn test_initial_title() {
        assert_eq!(initialized().render(), "Skinloader | Pencil | #9b87f5 | 1px | grid on");
    }

    #[test]
    fn test_title_follows_changes() {
        let mut title = initialized();
        title.apply(&EditorToUi::ToolChanged { tool: ToolKind::Fill });
        title.apply(&EditorToUi::BrushSizeChanged { size: 4 });
        title.apply(&EditorToUi::GridChanged { enabled: false });
        title.apply(&EditorToUi::LayerChanged { layer: Some(PartKind::LeftArm) });
        title.apply(&EditorToUi::Exported { path: "/tmp/skins/minecraft-skin.png".into() });

        assert_eq!(
            title.render(),
            "Skinloader - minecraft-skin.png | Fill | #9b87f5 | 4px | grid off | left arm"
        );
    }

    #[test]
    fn test_error_shown_until_next_change() {
        let mut title = initialized();
        title.apply(&EditorToUi::error("invalid_color", "bad hex"));
        assert!(title.render().ends_with("| error: bad hex"));

        title.apply(&EditorToUi::CanvasChanged);
        assert!(!title.render().contains("error"));
    }
}
