use crate::grid::{parse_grid_value, snap_grid_size, GridSpec, Pitch};
use crate::shader::MaskShape;

/// Start-up settings for a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerConfig {
    pub grid: GridSpec,
    pub pitch: Pitch,
    pub shape: MaskShape,
}

impl ViewerConfig {
    /// Applies overrides from a page query string such as
    /// `?cols=256&rows=128&pitch=0.2&shape=circle`. Unknown keys and
    /// unparsable values are skipped one by one; counts snap to the nearest
    /// size the grid selectors offer.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let query = search.trim_start_matches('?');
        let mut columns = config.grid.columns();
        let mut rows = config.grid.rows();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "cols" | "columns" => {
                    if value.trim().parse::<f64>().is_ok() {
                        columns = snap_grid_size(parse_grid_value(&value));
                    }
                }
                "rows" => {
                    if value.trim().parse::<f64>().is_ok() {
                        rows = snap_grid_size(parse_grid_value(&value));
                    }
                }
                "pitch" => {
                    if let Ok(p) = value.trim().parse::<f32>() {
                        config.pitch = Pitch::new(p);
                    }
                }
                "shape" => {
                    if let Some(shape) = MaskShape::from_key(&value) {
                        config.shape = shape;
                    }
                }
                other => log::debug!("ignoring query parameter {}", other),
            }
        }
        if let Ok(grid) = GridSpec::new(columns, rows) {
            config.grid = grid;
        }
        config
    }
}
