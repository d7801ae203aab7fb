use egui::{Pos2, Rect};

use crate::model::{BrushMode, BrushState};
use crate::session::{EditSession, StrokeOutcome};

use super::{InputEvent, Modifiers, PointerButton, ShortcutKey, ZoomStep, to_raster};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Panning {
        last: Pos2,
        button: PointerButton,
    },
    Painting,
}

/// What the controller did with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    Ignored,
    PanStarted,
    Panned,
    Painted { newly_marked: usize },
    StrokeEnded(StrokeOutcome),
    Zoomed { zoom: f32 },
    BrushChanged(BrushState),
    HistoryMoved { changed: bool },
}

/// Drives an [`EditSession`] from pointer and keyboard input.
///
/// `layout` passed to [`InputController::handle`] is where the canvas sits
/// before zoom and pan; the controller derives the transformed rectangle
/// itself so pointer mapping stays exact while the view moves.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    state: InteractionState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn handle(&mut self, session: &mut EditSession, layout: Rect, event: InputEvent) -> Response {
        match event {
            InputEvent::PointerDown {
                pos,
                button,
                modifiers,
            } => self.pointer_down(session, layout, pos, button, modifiers),
            InputEvent::PointerMove { pos } => self.pointer_move(session, layout, pos),
            InputEvent::PointerUp { button, .. } if self.is_held_by(button) => {
                self.release(session)
            }
            InputEvent::PointerUp { .. } => Response::Ignored,
            InputEvent::PointerLeave => self.release(session),
            InputEvent::Wheel { delta_y, modifiers } => wheel(session, delta_y, modifiers),
            InputEvent::KeyPress { key, modifiers } => shortcut(session, key, modifiers),
        }
    }

    fn pointer_down(
        &mut self,
        session: &mut EditSession,
        layout: Rect,
        pos: Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Response {
        if self.state != InteractionState::Idle {
            return Response::Ignored;
        }
        match button {
            PointerButton::Middle => {
                self.state = InteractionState::Panning { last: pos, button };
                Response::PanStarted
            }
            PointerButton::Primary if modifiers.pans() => {
                self.state = InteractionState::Panning { last: pos, button };
                Response::PanStarted
            }
            PointerButton::Primary => {
                self.state = InteractionState::Painting;
                session.begin_stroke();
                paint(session, layout, pos)
            }
            PointerButton::Secondary => Response::Ignored,
        }
    }

    fn pointer_move(&mut self, session: &mut EditSession, layout: Rect, pos: Pos2) -> Response {
        match self.state {
            InteractionState::Idle => Response::Ignored,
            InteractionState::Panning { last, button } => {
                session.pan_by(pos - last);
                self.state = InteractionState::Panning { last: pos, button };
                Response::Panned
            }
            InteractionState::Painting => paint(session, layout, pos),
        }
    }

    /// Only the button that started a pan or stroke ends it; leaving the
    /// surface ends either regardless of buttons.
    fn is_held_by(&self, released: PointerButton) -> bool {
        match self.state {
            InteractionState::Idle => false,
            InteractionState::Panning { button, .. } => button == released,
            InteractionState::Painting => released == PointerButton::Primary,
        }
    }

    fn release(&mut self, session: &mut EditSession) -> Response {
        let previous = std::mem::take(&mut self.state);
        match previous {
            InteractionState::Idle => Response::Ignored,
            InteractionState::Panning { .. } => Response::Panned,
            InteractionState::Painting => Response::StrokeEnded(session.end_stroke()),
        }
    }
}

fn paint(session: &mut EditSession, layout: Rect, pos: Pos2) -> Response {
    let display_rect = session.view().display_rect(layout);
    match to_raster(pos, display_rect, session.dimensions()) {
        Some(point) => Response::Painted {
            newly_marked: session.paint_at(point),
        },
        None => Response::Painted { newly_marked: 0 },
    }
}

fn wheel(session: &mut EditSession, delta_y: f32, modifiers: Modifiers) -> Response {
    if !modifiers.command_like() || delta_y == 0.0 || !delta_y.is_finite() {
        return Response::Ignored;
    }
    let step = if delta_y > 0.0 {
        ZoomStep::In
    } else {
        ZoomStep::Out
    };
    Response::Zoomed {
        zoom: session.zoom_step(step),
    }
}

fn shortcut(session: &mut EditSession, key: ShortcutKey, modifiers: Modifiers) -> Response {
    if modifiers.command_like() {
        return match key {
            ShortcutKey::Z if modifiers.shift => Response::HistoryMoved {
                changed: session.redo(),
            },
            ShortcutKey::Z => Response::HistoryMoved {
                changed: session.undo(),
            },
            ShortcutKey::Y => Response::HistoryMoved {
                changed: session.redo(),
            },
            _ => Response::Ignored,
        };
    }
    match key {
        ShortcutKey::OpenBracket => Response::BrushChanged(session.shrink_brush()),
        ShortcutKey::CloseBracket => Response::BrushChanged(session.grow_brush()),
        ShortcutKey::E => Response::BrushChanged(session.set_mode(BrushMode::Erase)),
        ShortcutKey::R => Response::BrushChanged(session.set_mode(BrushMode::Restore)),
        ShortcutKey::X => Response::BrushChanged(session.toggle_mode()),
        ShortcutKey::Y | ShortcutKey::Z => Response::Ignored,
    }
}
