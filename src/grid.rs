//! LED grid dimensions, pitch, and the named presets exposed in the toolbar.

use crate::error::{LedWallError, Result};

/// LED counts offered by the column/row selectors.
pub const GRID_SIZES: [u32; 8] = [8, 16, 32, 64, 96, 128, 192, 256];

/// Index into [`GRID_SIZES`] used when a selector value is unusable.
pub const DEFAULT_GRID_INDEX: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    columns: u32,
    rows: u32,
}

impl GridSpec {
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(LedWallError::InvalidGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Square grid at `n` LEDs per side; zero is bumped to one.
    pub fn square(n: u32) -> Self {
        let n = n.max(1);
        Self { columns: n, rows: n }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.columns as f64 / self.rows as f64
    }

    /// `(columns, rows)` as shader floats.
    pub fn as_vec2(&self) -> [f32; 2] {
        [self.columns as f32, self.rows as f32]
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::square(GRID_SIZES[DEFAULT_GRID_INDEX])
    }
}

/// Fractional size of the lit area of an LED relative to its cell.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pitch(f32);

impl Pitch {
    pub const MIN: f32 = 0.10;
    pub const MAX: f32 = 0.60;
    pub const STEP: f32 = 0.01;
    pub const DEFAULT: f32 = 0.18;

    /// Clamps into `[MIN, MAX]`; non-finite input yields the default.
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Parses a selector value into an LED count, falling back to the mid-range size.
pub fn parse_grid_value(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 1.0 => v.round() as u32,
        _ => GRID_SIZES[DEFAULT_GRID_INDEX],
    }
}

/// Nearest entry of [`GRID_SIZES`]; ties go to the smaller size.
pub fn snap_grid_size(n: u32) -> u32 {
    GRID_SIZES
        .iter()
        .copied()
        .min_by_key(|&size| size.abs_diff(n))
        .unwrap_or(GRID_SIZES[DEFAULT_GRID_INDEX])
}

pub fn parse_pitch_value(raw: &str) -> Pitch {
    raw.trim()
        .parse::<f32>()
        .map(Pitch::new)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    P3,
    P6,
    Tall,
    Wide,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::P3, Preset::P6, Preset::Tall, Preset::Wide];

    pub fn grid(self) -> GridSpec {
        let (columns, rows) = match self {
            Preset::P3 => (128, 128),
            Preset::P6 => (256, 256),
            Preset::Tall => (128, 256),
            Preset::Wide => (256, 128),
        };
        GridSpec { columns, rows }
    }

    pub fn pitch(self) -> Pitch {
        Pitch(0.18)
    }

    /// DOM id of the toolbar button bound to this preset.
    pub fn button_id(self) -> &'static str {
        match self {
            Preset::P3 => "presetP3",
            Preset::P6 => "presetP6",
            Preset::Tall => "presetTall",
            Preset::Wide => "presetWide",
        }
    }
}

/// String-valued snapshot of the grid and pitch controls, as read from or
/// written to the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlValues {
    pub columns: String,
    pub rows: String,
    pub pitch: String,
}

impl ControlValues {
    pub fn from_settings(grid: GridSpec, pitch: Pitch) -> Self {
        Self {
            columns: grid.columns().to_string(),
            rows: grid.rows().to_string(),
            pitch: format!("{:.2}", pitch.get()),
        }
    }

    /// Writes the preset's grid and pitch together.
    pub fn apply_preset(&mut self, preset: Preset) {
        *self = Self::from_settings(preset.grid(), preset.pitch());
    }

    pub fn grid(&self) -> GridSpec {
        GridSpec {
            columns: parse_grid_value(&self.columns),
            rows: parse_grid_value(&self.rows),
        }
    }

    pub fn pitch(&self) -> Pitch {
        parse_pitch_value(&self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            GridSpec::new(0, 4),
            Err(LedWallError::InvalidGrid { columns: 0, rows: 4 })
        );
        assert!(GridSpec::new(4, 0).is_err());
    }

    #[test]
    fn pitch_clamps_and_defaults() {
        assert_eq!(Pitch::new(5.0).get(), Pitch::MAX);
        assert_eq!(Pitch::new(0.0).get(), Pitch::MIN);
        assert_eq!(Pitch::new(f32::NAN).get(), Pitch::DEFAULT);
    }

    #[test]
    fn bad_selector_value_falls_back_to_mid_range() {
        assert_eq!(parse_grid_value(""), 96);
        assert_eq!(parse_grid_value("abc"), 96);
        assert_eq!(parse_grid_value("0"), 96);
        assert_eq!(parse_grid_value(" 192 "), 192);
    }
}
