use std::path::Path;
use std::sync::Arc;

use egui::{Pos2, Vec2};
use image::RgbaImage;
use serde::Serialize;

use crate::edit::{
    HistoryManager, LayerOpacity, ResolveOutcome, SelectionBuffer, paint_stroke, render_with,
    resolve,
};
use crate::formats::{encode_png, write_raster};
use crate::interaction::{ViewTransform, ZoomStep};
use crate::model::{BrushMode, BrushState, EditorConfig, ensure_nonempty, ensure_same_dimensions};

use super::{Result, Segmenter, apply_mask};

/// What happened when a stroke ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StrokeOutcome {
    /// Nothing was marked; history is untouched.
    Empty,
    /// The stroke was resolved and a history entry committed.
    Committed(ResolveOutcome),
    /// Resolution failed; the edited raster is unchanged.
    Skipped,
}

/// All state of one image being edited. The original is shared read-only;
/// the edited raster, selection and history belong to the session alone.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: Arc<RgbaImage>,
    edited: RgbaImage,
    selection: SelectionBuffer,
    history: HistoryManager,
    brush: BrushState,
    view: ViewTransform,
    stroke_active: bool,
    config: EditorConfig,
}

impl EditSession {
    /// Starts a session on `original` with `initial` as the first edited
    /// state, which becomes history entry 0.
    pub fn new(original: RgbaImage, initial: RgbaImage, config: EditorConfig) -> Result<Self> {
        ensure_nonempty(&original)?;
        ensure_same_dimensions(&original, &initial)?;
        let config = config.sanitized();

        let (width, height) = original.dimensions();
        let mut history = HistoryManager::new(config.history_depth);
        history.commit(initial.clone());
        log::info!("editing session started on {width}x{height} raster");

        Ok(Self {
            original: Arc::new(original),
            edited: initial,
            selection: SelectionBuffer::new(width, height),
            history,
            brush: config.brush,
            view: ViewTransform::default(),
            stroke_active: false,
            config,
        })
    }

    /// Runs `segmenter` on `original` and starts a session on the masked result.
    pub fn from_segmenter(
        original: RgbaImage,
        segmenter: &dyn Segmenter,
        config: EditorConfig,
    ) -> Result<Self> {
        let mask = segmenter.segment(&original)?;
        let initial = apply_mask(&original, &mask)?;
        Self::new(original, initial, config)
    }

    /// Swaps in a new image. History, selection and view start over; the brush
    /// carries over. On error the current image stays loaded.
    pub fn replace_image(&mut self, original: RgbaImage, initial: RgbaImage) -> Result<()> {
        let mut next = Self::new(original, initial, self.config)?;
        next.brush = self.brush;
        *self = next;
        Ok(())
    }

    pub fn original(&self) -> &RgbaImage {
        &self.original
    }

    pub fn edited(&self) -> &RgbaImage {
        &self.edited
    }

    pub fn selection(&self) -> &SelectionBuffer {
        &self.selection
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn brush(&self) -> BrushState {
        self.brush
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn dimensions(&self) -> [u32; 2] {
        let (width, height) = self.original.dimensions();
        [width, height]
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke_active
    }

    pub fn begin_stroke(&mut self) {
        self.selection.clear();
        self.stroke_active = true;
    }

    /// Stamps the brush at `point` (raster space). Returns newly marked pixels.
    pub fn paint_at(&mut self, point: Pos2) -> usize {
        if !self.stroke_active {
            self.begin_stroke();
        }
        paint_stroke(&mut self.selection, point, self.brush.size(), self.brush.mode)
    }

    /// Resolves the stroke with the brush mode current at this moment and
    /// commits the result. An empty stroke commits nothing.
    pub fn end_stroke(&mut self) -> StrokeOutcome {
        self.stroke_active = false;
        match resolve(
            &self.original,
            &mut self.edited,
            &mut self.selection,
            self.brush.mode,
            self.config.tolerance,
        ) {
            Ok(Some(outcome)) => {
                self.history.commit(self.edited.clone());
                log::debug!(
                    "committed {} stroke, history {}/{}",
                    outcome.mode.label(),
                    self.history.active_index().map_or(0, |index| index + 1),
                    self.history.len()
                );
                StrokeOutcome::Committed(outcome)
            }
            Ok(None) => StrokeOutcome::Empty,
            Err(error) => {
                log::warn!("stroke skipped: {error}");
                self.selection.clear();
                StrokeOutcome::Skipped
            }
        }
    }

    /// Returns whether the edited raster changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.edited.clone_from(snapshot);
                true
            }
            None => false,
        }
    }

    /// Returns whether the edited raster changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.edited.clone_from(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn set_brush_size(&mut self, size: u32) -> BrushState {
        self.brush.set_size(size);
        self.brush
    }

    pub fn grow_brush(&mut self) -> BrushState {
        self.brush.grow();
        self.brush
    }

    pub fn shrink_brush(&mut self) -> BrushState {
        self.brush.shrink();
        self.brush
    }

    pub fn set_mode(&mut self, mode: BrushMode) -> BrushState {
        self.brush.mode = mode;
        self.brush
    }

    pub fn toggle_mode(&mut self) -> BrushState {
        self.brush.toggle_mode();
        self.brush
    }

    pub fn zoom_step(&mut self, step: ZoomStep) -> f32 {
        self.view.zoom_step(step)
    }

    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.view.set_zoom(zoom);
        self.view.zoom()
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.view.pan_by(delta);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// The live frame: ghost, edited raster and, mid-stroke, the selection.
    pub fn render(&self) -> RgbaImage {
        let selection = self.stroke_active.then_some(&self.selection);
        self.composite(selection)
    }

    /// The frame without the transient selection layer.
    pub fn export(&self) -> RgbaImage {
        self.composite(None)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        Ok(encode_png(&self.export())?)
    }

    pub fn export_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_raster(path, &self.export())?;
        log::info!("exported edited raster to {}", path.display());
        Ok(())
    }

    fn composite(&self, selection: Option<&SelectionBuffer>) -> RgbaImage {
        let opacity = LayerOpacity {
            ghost: self.config.ghost_opacity,
            selection: self.config.selection_opacity,
        };
        match render_with(
            &self.original,
            &self.edited,
            selection,
            self.brush.mode,
            opacity,
        ) {
            Ok(frame) => frame,
            Err(error) => {
                log::warn!("compositing failed, showing edited layer only: {error}");
                self.edited.clone()
            }
        }
    }
}
