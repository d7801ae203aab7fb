//! Interactive refinement of foreground masks.
//!
//! An [`session::EditSession`] holds the original image, the edited cut-out
//! and a bounded undo history. Brush strokes are painted into a transient
//! selection and, on release, resolved against the original's colors so a
//! wide stroke only touches pixels similar to what it mostly covered.
//! [`interaction::InputController`] turns pointer and keyboard events into
//! session calls.

pub mod cli;
pub mod edit;
pub mod formats;
pub mod interaction;
pub mod model;
pub mod script;
pub mod session;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
