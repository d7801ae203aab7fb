use serde::{Deserialize, Serialize};

pub const MIN_BRUSH_SIZE: u32 = 10;
pub const MAX_BRUSH_SIZE: u32 = 200;
pub const BRUSH_SIZE_STEP: u32 = 10;
pub const DEFAULT_BRUSH_SIZE: u32 = 50;

/// What a resolved stroke does to the edited raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushMode {
    /// Marked pixels become fully transparent.
    #[default]
    Erase,
    /// Marked pixels take their color back from the original and become opaque.
    Restore,
}

impl BrushMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Erase => Self::Restore,
            Self::Restore => Self::Erase,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Erase => "erase",
            Self::Restore => "restore",
        }
    }

    /// Opaque marker painted into the selection buffer for this mode.
    pub const fn marker(self) -> [u8; 4] {
        match self {
            Self::Erase => [255, 0, 0, 255],
            Self::Restore => [0, 255, 0, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushState {
    size: u32,
    pub mode: BrushMode,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            mode: BrushMode::default(),
        }
    }
}

impl BrushState {
    pub fn new(size: u32, mode: BrushMode) -> Self {
        Self {
            size: clamp_brush_size(size),
            mode,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = clamp_brush_size(size);
    }

    pub fn grow(&mut self) {
        self.set_size(self.size.saturating_add(BRUSH_SIZE_STEP));
    }

    pub fn shrink(&mut self) {
        self.set_size(self.size.saturating_sub(BRUSH_SIZE_STEP));
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Re-applies the size bounds, e.g. after deserializing.
    pub fn sanitized(self) -> Self {
        Self::new(self.size, self.mode)
    }
}

pub fn clamp_brush_size(size: u32) -> u32 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}
