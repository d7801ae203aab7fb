use egui::{Pos2, Rect, Vec2, pos2};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;
pub const ZOOM_IN_FACTOR: f32 = 1.1;
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

/// Zoom and pan applied to the canvas as a whole, like a visual transform on
/// its container. The raster itself is never resampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_step(&mut self, step: ZoomStep) -> f32 {
        let factor = match step {
            ZoomStep::In => ZOOM_IN_FACTOR,
            ZoomStep::Out => ZOOM_OUT_FACTOR,
        };
        self.set_zoom(self.zoom * factor);
        self.zoom
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.pan += delta;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Bounding rectangle of the canvas after the transform, given where the
    /// untransformed canvas is laid out. Scaling is about the layout center.
    pub fn display_rect(&self, layout: Rect) -> Rect {
        Rect::from_center_size(layout.center() + self.pan, layout.size() * self.zoom)
    }
}

/// Maps a display-space point to raster space using the canvas's
/// post-transform bounding rectangle. X and Y scale independently. Points
/// outside the rectangle map outside the raster; `None` only for a
/// degenerate rectangle.
pub fn to_raster(display_point: Pos2, display_rect: Rect, raster_size: [u32; 2]) -> Option<Pos2> {
    if display_rect.width() <= 0.0 || display_rect.height() <= 0.0 {
        return None;
    }
    let scale_x = raster_size[0] as f32 / display_rect.width();
    let scale_y = raster_size[1] as f32 / display_rect.height();
    Some(pos2(
        (display_point.x - display_rect.min.x) * scale_x,
        (display_point.y - display_rect.min.y) * scale_y,
    ))
}

/// Inverse of [`to_raster`].
pub fn to_display(raster_point: Pos2, display_rect: Rect, raster_size: [u32; 2]) -> Option<Pos2> {
    if raster_size[0] == 0 || raster_size[1] == 0 {
        return None;
    }
    let scale_x = display_rect.width() / raster_size[0] as f32;
    let scale_y = display_rect.height() / raster_size[1] as f32;
    Some(pos2(
        display_rect.min.x + raster_point.x * scale_x,
        display_rect.min.y + raster_point.y * scale_y,
    ))
}
