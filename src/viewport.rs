use crate::config::ViewerConfig;
use crate::error::Result;
use crate::fit::{compute_fit, select_region, CanvasDims, FitMode, Measurements};
use crate::grid::{ControlValues, GridSpec, Pitch, Preset};
use crate::schedule::FrameScheduler;
use crate::shader::{MaskShape, ShadeParams};

/// Mutable view state owned by one running viewer.
#[derive(Debug)]
pub struct ViewportState {
    grid: GridSpec,
    pitch: Pitch,
    shape: MaskShape,
    mode: FitMode,
    scheduler: FrameScheduler,
    dims: Option<CanvasDims>,
}

impl ViewportState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            grid: config.grid,
            pitch: config.pitch,
            shape: config.shape,
            mode: FitMode::Windowed,
            scheduler: FrameScheduler::new(),
            dims: None,
        }
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn shape(&self) -> MaskShape {
        self.shape
    }

    pub fn mode(&self) -> FitMode {
        self.mode
    }

    /// Last size applied to the canvas.
    pub fn dims(&self) -> Option<CanvasDims> {
        self.dims
    }

    /// Returns `true` if the grid changed and the canvas needs refitting.
    pub fn set_grid(&mut self, grid: GridSpec) -> bool {
        let changed = self.grid != grid;
        self.grid = grid;
        changed
    }

    pub fn set_pitch(&mut self, pitch: Pitch) {
        self.pitch = pitch;
    }

    pub fn set_shape(&mut self, shape: MaskShape) {
        self.shape = shape;
    }

    pub fn set_mode(&mut self, mode: FitMode) {
        self.mode = mode;
    }

    /// Reads grid and pitch back from the control strings.
    pub fn sync_from_controls(&mut self, controls: &ControlValues) -> bool {
        self.pitch = controls.pitch();
        self.set_grid(controls.grid())
    }

    pub fn apply_preset(&mut self, preset: Preset, controls: &mut ControlValues) {
        controls.apply_preset(preset);
        self.sync_from_controls(controls);
    }

    pub fn request_recompute(&mut self) -> bool {
        self.scheduler.request_recompute()
    }

    pub fn begin_frame(&mut self) -> u32 {
        self.scheduler.begin_frame()
    }

    /// Fits the current grid into the measured region and records the result.
    pub fn recompute(&mut self, measurements: &Measurements) -> Result<CanvasDims> {
        let region = select_region(self.mode, measurements)?;
        let dims = compute_fit(self.grid, region, self.mode);
        self.dims = Some(dims);
        Ok(dims)
    }

    pub fn shade_params(&self) -> ShadeParams {
        let [w, h] = match self.dims {
            Some(d) => [d.width as f32, d.height as f32],
            None => self.grid.as_vec2(),
        };
        ShadeParams {
            shape: self.shape,
            grid: self.grid,
            pitch: self.pitch,
            resolution: [w, h],
        }
    }
}
