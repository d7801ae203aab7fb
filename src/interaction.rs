mod controller;
mod events;
mod transform;

#[cfg(test)]
mod tests;

pub use controller::{InputController, InteractionState, Response};
pub use events::{InputEvent, Modifiers, PointerButton, ShortcutKey};
pub use transform::{
    MAX_ZOOM, MIN_ZOOM, ViewTransform, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, ZoomStep, to_display,
    to_raster,
};
