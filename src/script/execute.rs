use egui::{Rect, pos2, vec2};

use crate::interaction::{
    InputController, InputEvent, Modifiers, PointerButton, Response, ShortcutKey, to_display,
};
use crate::model::{BrushMode, visible_pixel_count};
use crate::session::{EditSession, StrokeOutcome};

use super::{Result, ScriptReport, ScriptStep, StepReport, StrokeScript};

const COMMAND_MODIFIERS: Modifiers = Modifiers {
    shift: false,
    alt: false,
    ctrl: true,
    command: false,
};

/// Replays `script` against `session` as synthetic input. The canvas layout
/// is the raster rectangle at the origin, so with the identity view display
/// and raster coordinates coincide.
pub fn run_script(script: &StrokeScript, session: &mut EditSession) -> Result<ScriptReport> {
    script.validate()?;

    let [width, height] = session.dimensions();
    let layout = Rect::from_min_size(pos2(0.0, 0.0), vec2(width as f32, height as f32));
    let mut controller = InputController::new();
    let mut steps = Vec::with_capacity(script.steps.len());
    let mut strokes_committed = 0;

    for step in &script.steps {
        let outcome = run_step(&mut controller, session, layout, step);
        let (committed, marked, affected) = match outcome {
            Some(StrokeOutcome::Committed(resolved)) => {
                strokes_committed += 1;
                (true, Some(resolved.marked), Some(resolved.affected))
            }
            Some(StrokeOutcome::Empty) => (false, Some(0), Some(0)),
            Some(StrokeOutcome::Skipped) | None => (false, None, None),
        };
        let brush = session.brush();
        steps.push(StepReport {
            op: step.name().to_string(),
            committed,
            marked,
            affected,
            history_len: session.history().len(),
            history_index: session.history().active_index(),
            zoom: session.view().zoom(),
            brush_size: brush.size(),
            brush_mode: brush.mode,
        });
    }

    log::info!(
        "replayed {} steps from {}, {strokes_committed} strokes committed",
        steps.len(),
        script.name.as_deref().unwrap_or("unnamed script")
    );

    Ok(ScriptReport {
        script_name: script.name.clone(),
        steps,
        strokes_committed,
        history_len: session.history().len(),
        history_index: session.history().active_index(),
        visible_pixels: visible_pixel_count(session.edited()),
    })
}

fn run_step(
    controller: &mut InputController,
    session: &mut EditSession,
    layout: Rect,
    step: &ScriptStep,
) -> Option<StrokeOutcome> {
    match step {
        ScriptStep::Stroke { points, mode, size } => {
            if let Some(size) = size {
                session.set_brush_size(*size);
            }
            if let Some(mode) = mode {
                controller.handle(session, layout, InputEvent::KeyPress {
                    key: mode_key(*mode),
                    modifiers: Modifiers::NONE,
                });
            }
            let display_rect = session.view().display_rect(layout);
            let dimensions = session.dimensions();
            let mut display_points = points
                .iter()
                .filter_map(|[x, y]| to_display(pos2(*x, *y), display_rect, dimensions));
            let first = display_points.next()?;
            controller.handle(session, layout, InputEvent::PointerDown {
                pos: first,
                button: PointerButton::Primary,
                modifiers: Modifiers::NONE,
            });
            let mut last = first;
            for pos in display_points {
                controller.handle(session, layout, InputEvent::PointerMove { pos });
                last = pos;
            }
            match controller.handle(session, layout, InputEvent::PointerUp {
                pos: last,
                button: PointerButton::Primary,
            }) {
                Response::StrokeEnded(outcome) => Some(outcome),
                _ => None,
            }
        }
        ScriptStep::Undo => {
            controller.handle(session, layout, InputEvent::KeyPress {
                key: ShortcutKey::Z,
                modifiers: COMMAND_MODIFIERS,
            });
            None
        }
        ScriptStep::Redo => {
            controller.handle(session, layout, InputEvent::KeyPress {
                key: ShortcutKey::Z,
                modifiers: Modifiers {
                    shift: true,
                    ..COMMAND_MODIFIERS
                },
            });
            None
        }
        ScriptStep::Mode { mode } => {
            controller.handle(session, layout, InputEvent::KeyPress {
                key: mode_key(*mode),
                modifiers: Modifiers::NONE,
            });
            None
        }
        ScriptStep::Size { size } => {
            session.set_brush_size(*size);
            None
        }
        ScriptStep::Zoom { steps } => {
            let delta_y = if *steps >= 0 { 1.0 } else { -1.0 };
            for _ in 0..steps.unsigned_abs() {
                controller.handle(session, layout, InputEvent::Wheel {
                    delta_y,
                    modifiers: COMMAND_MODIFIERS,
                });
            }
            None
        }
        ScriptStep::Pan { dx, dy } => {
            let start = layout.center();
            controller.handle(session, layout, InputEvent::PointerDown {
                pos: start,
                button: PointerButton::Middle,
                modifiers: Modifiers::NONE,
            });
            let end = start + vec2(*dx, *dy);
            controller.handle(session, layout, InputEvent::PointerMove { pos: end });
            controller.handle(session, layout, InputEvent::PointerUp {
                pos: end,
                button: PointerButton::Middle,
            });
            None
        }
    }
}

fn mode_key(mode: BrushMode) -> ShortcutKey {
    match mode {
        BrushMode::Erase => ShortcutKey::E,
        BrushMode::Restore => ShortcutKey::R,
    }
}
