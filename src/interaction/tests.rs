use egui::{Rect, pos2, vec2};
use image::{Rgba, RgbaImage};

use crate::model::{BrushMode, EditorConfig};
use crate::session::{EditSession, StrokeOutcome};

use super::{
    InputController, InputEvent, InteractionState, MIN_ZOOM, Modifiers, PointerButton, Response,
    ShortcutKey,
};

fn layout() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0))
}

fn session() -> EditSession {
    let original = RgbaImage::from_pixel(100, 100, Rgba([200, 180, 160, 255]));
    let initial = original.clone();
    EditSession::new(original, initial, EditorConfig::default()).expect("session")
}

fn down(x: f32, y: f32, button: PointerButton, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerDown {
        pos: pos2(x, y),
        button,
        modifiers,
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    release(x, y, PointerButton::Primary)
}

fn release(x: f32, y: f32, button: PointerButton) -> InputEvent {
    InputEvent::PointerUp {
        pos: pos2(x, y),
        button,
    }
}

fn key(key: ShortcutKey, modifiers: Modifiers) -> InputEvent {
    InputEvent::KeyPress { key, modifiers }
}

fn ctrl() -> Modifiers {
    Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    }
}

#[test]
fn plain_press_paints_and_release_commits() {
    let mut session = session();
    let mut controller = InputController::new();

    let response = controller.handle(
        &mut session,
        layout(),
        down(50.0, 50.0, PointerButton::Primary, Modifiers::NONE),
    );
    assert!(matches!(response, Response::Painted { newly_marked } if newly_marked > 0));
    assert_eq!(controller.state(), InteractionState::Painting);
    assert!(session.is_stroke_active());

    let response = controller.handle(
        &mut session,
        layout(),
        InputEvent::PointerMove { pos: pos2(60.0, 50.0) },
    );
    assert!(matches!(response, Response::Painted { .. }));

    let response = controller.handle(&mut session, layout(), up(60.0, 50.0));
    assert!(matches!(
        response,
        Response::StrokeEnded(StrokeOutcome::Committed(_))
    ));
    assert_eq!(controller.state(), InteractionState::Idle);
    assert_eq!(session.edited().get_pixel(50, 50).0[3], 0);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn leaving_the_surface_still_commits_the_stroke() {
    let mut session = session();
    let mut controller = InputController::new();
    controller.handle(
        &mut session,
        layout(),
        down(20.0, 20.0, PointerButton::Primary, Modifiers::NONE),
    );
    let response = controller.handle(&mut session, layout(), InputEvent::PointerLeave);
    assert!(matches!(
        response,
        Response::StrokeEnded(StrokeOutcome::Committed(_))
    ));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn middle_drag_pans_without_touching_pixels() {
    let mut session = session();
    let mut controller = InputController::new();
    let before = session.edited().clone();

    let response = controller.handle(
        &mut session,
        layout(),
        down(10.0, 10.0, PointerButton::Middle, Modifiers::NONE),
    );
    assert_eq!(response, Response::PanStarted);
    controller.handle(
        &mut session,
        layout(),
        InputEvent::PointerMove { pos: pos2(25.0, 5.0) },
    );
    controller.handle(
        &mut session,
        layout(),
        InputEvent::PointerMove { pos: pos2(30.0, 5.0) },
    );
    assert_eq!(session.view().pan, vec2(20.0, -5.0));

    let response = controller.handle(
        &mut session,
        layout(),
        release(30.0, 5.0, PointerButton::Middle),
    );
    assert_eq!(response, Response::Panned);
    assert_eq!(controller.state(), InteractionState::Idle);
    assert_eq!(session.edited(), &before);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn modifier_primary_press_pans() {
    let mut session = session();
    let mut controller = InputController::new();
    let alt = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };
    controller.handle(
        &mut session,
        layout(),
        down(10.0, 10.0, PointerButton::Primary, alt),
    );
    assert!(matches!(controller.state(), InteractionState::Panning { .. }));
    assert!(!session.is_stroke_active());
}

#[test]
fn painting_follows_zoom_and_pan() {
    let mut session = session();
    let mut controller = InputController::new();
    session.set_zoom(2.0);
    session.pan_by(vec2(40.0, 0.0));
    // Display rect is now (-10, -50)..(190, 150); (90, 50) is the raster center.
    controller.handle(
        &mut session,
        layout(),
        down(90.0, 50.0, PointerButton::Primary, Modifiers::NONE),
    );
    assert!(session.selection().is_marked(50, 50));
    assert!(!session.selection().is_marked(90, 50));
}

#[test]
fn wheel_zoom_requires_modifier_and_clamps() {
    let mut session = session();
    let mut controller = InputController::new();

    let plain = controller.handle(
        &mut session,
        layout(),
        InputEvent::Wheel {
            delta_y: 1.0,
            modifiers: Modifiers::NONE,
        },
    );
    assert_eq!(plain, Response::Ignored);

    let response = controller.handle(
        &mut session,
        layout(),
        InputEvent::Wheel {
            delta_y: 1.0,
            modifiers: ctrl(),
        },
    );
    let Response::Zoomed { zoom } = response else {
        panic!("expected zoom, got {response:?}");
    };
    assert!((zoom - 1.1).abs() < 1e-6);

    for _ in 0..60 {
        controller.handle(
            &mut session,
            layout(),
            InputEvent::Wheel {
                delta_y: -1.0,
                modifiers: ctrl(),
            },
        );
    }
    assert_eq!(session.view().zoom(), MIN_ZOOM);
    assert_eq!(controller.state(), InteractionState::Idle);
}

#[test]
fn keyboard_shortcuts_adjust_brush_and_history() {
    let mut session = session();
    let mut controller = InputController::new();

    let grown = controller.handle(
        &mut session,
        layout(),
        key(ShortcutKey::CloseBracket, Modifiers::NONE),
    );
    assert!(matches!(grown, Response::BrushChanged(brush) if brush.size() == 60));
    controller.handle(
        &mut session,
        layout(),
        key(ShortcutKey::OpenBracket, Modifiers::NONE),
    );
    assert_eq!(session.brush().size(), 50);

    controller.handle(&mut session, layout(), key(ShortcutKey::R, Modifiers::NONE));
    assert_eq!(session.brush().mode, BrushMode::Restore);
    controller.handle(&mut session, layout(), key(ShortcutKey::X, Modifiers::NONE));
    assert_eq!(session.brush().mode, BrushMode::Erase);

    controller.handle(
        &mut session,
        layout(),
        down(50.0, 50.0, PointerButton::Primary, Modifiers::NONE),
    );
    controller.handle(&mut session, layout(), up(50.0, 50.0));
    let committed = session.edited().clone();

    let undo = controller.handle(&mut session, layout(), key(ShortcutKey::Z, ctrl()));
    assert_eq!(undo, Response::HistoryMoved { changed: true });
    assert_eq!(session.edited().get_pixel(50, 50).0[3], 255);

    let redo = controller.handle(
        &mut session,
        layout(),
        key(
            ShortcutKey::Z,
            Modifiers {
                shift: true,
                ..ctrl()
            },
        ),
    );
    assert_eq!(redo, Response::HistoryMoved { changed: true });
    assert_eq!(session.edited(), &committed);

    let past_end = controller.handle(&mut session, layout(), key(ShortcutKey::Y, ctrl()));
    assert_eq!(past_end, Response::HistoryMoved { changed: false });
}

#[test]
fn second_press_during_stroke_is_ignored() {
    let mut session = session();
    let mut controller = InputController::new();
    controller.handle(
        &mut session,
        layout(),
        down(50.0, 50.0, PointerButton::Primary, Modifiers::NONE),
    );
    let response = controller.handle(
        &mut session,
        layout(),
        down(10.0, 10.0, PointerButton::Middle, Modifiers::NONE),
    );
    assert_eq!(response, Response::Ignored);
    assert_eq!(controller.state(), InteractionState::Painting);
}

#[test]
fn other_button_release_keeps_stroke_open() {
    let mut session = session();
    let mut controller = InputController::new();
    controller.handle(
        &mut session,
        layout(),
        down(50.0, 50.0, PointerButton::Primary, Modifiers::NONE),
    );

    let response = controller.handle(
        &mut session,
        layout(),
        release(50.0, 50.0, PointerButton::Middle),
    );
    assert_eq!(response, Response::Ignored);
    assert_eq!(controller.state(), InteractionState::Painting);
    assert!(session.is_stroke_active());
    assert_eq!(session.history().len(), 1);

    let response = controller.handle(&mut session, layout(), up(50.0, 50.0));
    assert!(matches!(
        response,
        Response::StrokeEnded(StrokeOutcome::Committed(_))
    ));
    assert_eq!(controller.state(), InteractionState::Idle);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn middle_pan_ignores_primary_release() {
    let mut session = session();
    let mut controller = InputController::new();
    controller.handle(
        &mut session,
        layout(),
        down(10.0, 10.0, PointerButton::Middle, Modifiers::NONE),
    );
    let response = controller.handle(&mut session, layout(), up(10.0, 10.0));
    assert_eq!(response, Response::Ignored);
    assert!(matches!(
        controller.state(),
        InteractionState::Panning {
            button: PointerButton::Middle,
            ..
        }
    ));

    let response = controller.handle(&mut session, layout(), InputEvent::PointerLeave);
    assert_eq!(response, Response::Panned);
    assert_eq!(controller.state(), InteractionState::Idle);
}

#[test]
fn egui_events_convert() {
    let modifiers = egui::Modifiers {
        ctrl: true,
        command: true,
        ..Default::default()
    };
    let press = egui::Event::PointerButton {
        pos: pos2(3.0, 4.0),
        button: egui::PointerButton::Primary,
        pressed: true,
        modifiers,
    };
    assert_eq!(
        InputEvent::from_egui(&press),
        Some(InputEvent::PointerDown {
            pos: pos2(3.0, 4.0),
            button: PointerButton::Primary,
            modifiers: Modifiers {
                ctrl: true,
                command: true,
                ..Modifiers::NONE
            },
        })
    );

    let release = egui::Event::PointerButton {
        pos: pos2(3.0, 4.0),
        button: egui::PointerButton::Middle,
        pressed: false,
        modifiers: egui::Modifiers::NONE,
    };
    assert_eq!(
        InputEvent::from_egui(&release),
        Some(InputEvent::PointerUp {
            pos: pos2(3.0, 4.0),
            button: PointerButton::Middle,
        })
    );

    assert_eq!(
        InputEvent::from_egui(&egui::Event::PointerGone),
        Some(InputEvent::PointerLeave)
    );
    assert_eq!(
        InputEvent::from_egui(&egui::Event::PointerMoved(pos2(1.0, 2.0))),
        Some(InputEvent::PointerMove { pos: pos2(1.0, 2.0) })
    );

    let undo = egui::Event::Key {
        key: egui::Key::Z,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    };
    assert!(matches!(
        InputEvent::from_egui(&undo),
        Some(InputEvent::KeyPress {
            key: ShortcutKey::Z,
            ..
        })
    ));

    let unmapped = egui::Event::Key {
        key: egui::Key::Q,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    };
    assert_eq!(InputEvent::from_egui(&unmapped), None);
    assert_eq!(InputEvent::from_egui(&egui::Event::Copy), None);
}
