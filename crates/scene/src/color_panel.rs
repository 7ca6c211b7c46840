//! Colour selection under the 2D panel: a strip of palette swatches and a
//! hex entry line.
//!
//! Clicking a swatch selects it. Pressing `H` starts hex entry; hex digits
//! are collected until Enter sends them as a colour, Escape cancels and
//! Backspace removes the last digit.

use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use painting::{Rgba, palette_colors, palette_index};
use skinloader_config::EditorConfig;
use skinloader_ipc::UiToEditor;

use crate::editor::{EditorCommand, EditorResource};

/// Side length of one swatch button in logical pixels
const SWATCH_SIZE: f32 = 20.0;

const SWATCH_GAP: f32 = 4.0;

const SWATCH_BORDER: f32 = 2.0;

/// `#rrggbbaa` is the longest accepted form
const MAX_HEX_DIGITS: usize = 8;

/// One palette swatch button
#[derive(Component, Debug, Clone, Copy)]
pub struct PaletteSwatch {
    pub index: usize,
}

/// Marker for the text line showing the colour or the hex being typed
#[derive(Component)]
pub struct HexLabel;

/// Hex digits typed so far; `None` when entry is not active
#[derive(Resource, Default, Debug)]
pub struct HexEntry {
    buffer: Option<String>,
}

impl HexEntry {
    pub fn is_active(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn digits(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    /// Feed one key press. Returns the colour command once Enter completes
    /// a non-empty entry.
    pub fn press(&mut self, key: KeyCode) -> Option<UiToEditor> {
        let Some(buffer) = self.buffer.as_mut() else {
            if key == KeyCode::KeyH {
                self.buffer = Some(String::new());
            }
            return None;
        };

        match key {
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Escape => self.buffer = None,
            KeyCode::Enter | KeyCode::NumpadEnter => {
                let digits = std::mem::take(buffer);
                self.buffer = None;
                if !digits.is_empty() {
                    return Some(UiToEditor::SetColor {
                        hex: format!("#{}", digits),
                    });
                }
            }
            _ => {
                if let Some(digit) = hex_digit(key) {
                    if buffer.len() < MAX_HEX_DIGITS {
                        buffer.push(digit);
                    }
                }
            }
        }
        None
    }
}

fn hex_digit(key: KeyCode) -> Option<char> {
    let digit = match key {
        KeyCode::Digit0 | KeyCode::Numpad0 => '0',
        KeyCode::Digit1 | KeyCode::Numpad1 => '1',
        KeyCode::Digit2 | KeyCode::Numpad2 => '2',
        KeyCode::Digit3 | KeyCode::Numpad3 => '3',
        KeyCode::Digit4 | KeyCode::Numpad4 => '4',
        KeyCode::Digit5 | KeyCode::Numpad5 => '5',
        KeyCode::Digit6 | KeyCode::Numpad6 => '6',
        KeyCode::Digit7 | KeyCode::Numpad7 => '7',
        KeyCode::Digit8 | KeyCode::Numpad8 => '8',
        KeyCode::Digit9 | KeyCode::Numpad9 => '9',
        KeyCode::KeyA => 'a',
        KeyCode::KeyB => 'b',
        KeyCode::KeyC => 'c',
        KeyCode::KeyD => 'd',
        KeyCode::KeyE => 'e',
        KeyCode::KeyF => 'f',
        _ => return None,
    };
    Some(digit)
}

/// Text for the hex line
pub fn label_text(color: Rgba, entry: &HexEntry) -> String {
    match entry.digits() {
        Some(digits) => format!("Hex: #{}_", digits),
        None => format!("{}  (H to type a hex colour)", color.to_hex()),
    }
}

fn ui_color(color: Rgba) -> Color {
    Color::srgba_u8(color.r, color.g, color.b, color.a)
}

fn swatch_border(selected: bool) -> BorderColor {
    if selected {
        BorderColor::all(Color::WHITE)
    } else {
        BorderColor::all(Color::NONE)
    }
}

pub(crate) fn spawn_color_panel(mut commands: Commands, config: Res<EditorConfig>) {
    let [left, top] = config.palette_origin();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(top),
                width: Val::Px(config.panel_size()),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            Name::new("Colour Panel"),
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(SWATCH_GAP),
                    row_gap: Val::Px(SWATCH_GAP),
                    ..default()
                })
                .with_children(|strip| {
                    for (index, color) in palette_colors().enumerate() {
                        strip.spawn((
                            Button,
                            Node {
                                width: Val::Px(SWATCH_SIZE),
                                height: Val::Px(SWATCH_SIZE),
                                border: UiRect::all(Val::Px(SWATCH_BORDER)),
                                ..default()
                            },
                            BackgroundColor(ui_color(color)),
                            swatch_border(index == 0),
                            PaletteSwatch { index },
                        ));
                    }
                });

            panel.spawn((
                Text::new(label_text(Rgba::ACCENT, &HexEntry::default())),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                HexLabel,
            ));
        });

    info!("Colour panel spawned with {} swatches", palette_colors().count());
}

/// Select the palette entry of a pressed swatch
pub(crate) fn handle_swatch_clicks(
    swatches: Query<(&Interaction, &PaletteSwatch), Changed<Interaction>>,
    mut writer: MessageWriter<EditorCommand>,
) {
    for (interaction, swatch) in swatches.iter() {
        if *interaction == Interaction::Pressed {
            writer.write(EditorCommand(UiToEditor::SelectPalette { index: swatch.index }));
        }
    }
}

/// Collect typed hex digits and send the colour on Enter
pub fn handle_hex_entry(
    mut key_events: MessageReader<KeyboardInput>,
    key_input: Res<ButtonInput<KeyCode>>,
    mut entry: ResMut<HexEntry>,
    mut writer: MessageWriter<EditorCommand>,
) {
    let ctrl = key_input.pressed(KeyCode::ControlLeft) || key_input.pressed(KeyCode::ControlRight);

    for event in key_events.read() {
        if !event.state.is_pressed() || event.repeat {
            continue;
        }
        // Ctrl chords belong to the file dialogs
        if ctrl && !entry.is_active() {
            continue;
        }
        if let Some(command) = entry.press(event.key_code) {
            debug!("Hex entry submitted: {:?}", command);
            writer.write(EditorCommand(command));
        }
    }
}

/// Mark the selected swatch and refresh the hex line
pub(crate) fn refresh_color_panel(
    editor: Res<EditorResource>,
    entry: Res<HexEntry>,
    mut swatches: Query<(&PaletteSwatch, &mut BorderColor)>,
    mut labels: Query<&mut Text, With<HexLabel>>,
) {
    if !editor.is_changed() && !entry.is_changed() {
        return;
    }

    let color = editor.controller.color();
    let selected = palette_index(color);
    for (swatch, mut border) in swatches.iter_mut() {
        *border = swatch_border(Some(swatch.index) == selected);
    }

    let text = label_text(color, &entry);
    for mut label in labels.iter_mut() {
        if label.0 != text {
            label.0 = text.clone();
        }
    }
}
