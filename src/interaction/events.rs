use egui::Pos2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    pub fn from_egui(button: egui::PointerButton) -> Option<Self> {
        match button {
            egui::PointerButton::Primary => Some(Self::Primary),
            egui::PointerButton::Secondary => Some(Self::Secondary),
            egui::PointerButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    /// Platform command key: ctrl everywhere except cmd on macOS.
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        command: false,
    };

    pub fn from_egui(modifiers: egui::Modifiers) -> Self {
        Self {
            shift: modifiers.shift,
            alt: modifiers.alt,
            ctrl: modifiers.ctrl,
            command: modifiers.command || modifiers.mac_cmd,
        }
    }

    pub fn command_like(self) -> bool {
        self.command || self.ctrl
    }

    pub fn pans(self) -> bool {
        self.alt || self.shift
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutKey {
    OpenBracket,
    CloseBracket,
    E,
    R,
    X,
    Y,
    Z,
}

impl ShortcutKey {
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::OpenBracket => Some(Self::OpenBracket),
            egui::Key::CloseBracket => Some(Self::CloseBracket),
            egui::Key::E => Some(Self::E),
            egui::Key::R => Some(Self::R),
            egui::Key::X => Some(Self::X),
            egui::Key::Y => Some(Self::Y),
            egui::Key::Z => Some(Self::Z),
            _ => None,
        }
    }
}

/// Pointer, wheel and keyboard input in display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pos: Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    PointerMove {
        pos: Pos2,
    },
    PointerUp {
        pos: Pos2,
        button: PointerButton,
    },
    PointerLeave,
    /// Positive `delta_y` scrolls up, which zooms in.
    Wheel {
        delta_y: f32,
        modifiers: Modifiers,
    },
    KeyPress {
        key: ShortcutKey,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Converts an egui input event. Events the editor has no use for
    /// (text, key releases, unmapped keys and buttons) yield `None`.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::PointerMoved(pos) => Some(Self::PointerMove { pos: *pos }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers,
                ..
            } => {
                let button = PointerButton::from_egui(*button)?;
                if *pressed {
                    Some(Self::PointerDown {
                        pos: *pos,
                        button,
                        modifiers: Modifiers::from_egui(*modifiers),
                    })
                } else {
                    Some(Self::PointerUp { pos: *pos, button })
                }
            }
            egui::Event::PointerGone => Some(Self::PointerLeave),
            egui::Event::MouseWheel {
                delta, modifiers, ..
            } => Some(Self::Wheel {
                delta_y: delta.y,
                modifiers: Modifiers::from_egui(*modifiers),
            }),
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } => Some(Self::KeyPress {
                key: ShortcutKey::from_egui(*key)?,
                modifiers: Modifiers::from_egui(*modifiers),
            }),
            _ => None,
        }
    }
}
