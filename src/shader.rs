//! GLSL sources for the LED look and a CPU reference of the same per-pixel math.
//!
//! Every output pixel maps to one grid cell. The source frame is point-sampled
//! once at the cell centre, so the video aliases into blocks on purpose, and the
//! colour is multiplied by a mask describing the lit LED inside the cell. Only
//! the LED edge is anti-aliased, across a fixed [`SOFTNESS`] band.
//!
//! Two mask shapes ship as separate programs with different uniform shapes:
//! rounded squares take `vec2 ledCount`, circles take a scalar `ledCount` and
//! derive the row count from `resolution`, rounded to whole LEDs.

use crate::grid::{GridSpec, Pitch};

/// Half-width of the anti-aliasing band, in cell-space units.
pub const SOFTNESS: f32 = 0.03;

pub const U_TEXTURE: &str = "tex0";
pub const U_RESOLUTION: &str = "resolution";
pub const U_LED_COUNT: &str = "ledCount";
pub const U_PITCH: &str = "pitch";

pub const A_POSITION: u32 = 0;
pub const A_TEX_COORD: u32 = 1;

/// Unit quad as two triangles, interleaved `x, y, u, v`.
pub const QUAD_VERTICES: [f32; 24] = [
    0.0, 0.0, 0.0, 0.0, //
    1.0, 0.0, 1.0, 0.0, //
    0.0, 1.0, 0.0, 1.0, //
    0.0, 1.0, 0.0, 1.0, //
    1.0, 0.0, 1.0, 0.0, //
    1.0, 1.0, 1.0, 1.0, //
];

pub const VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;
layout(location = 0) in vec2 aPosition;
layout(location = 1) in vec2 aTexCoord;
out vec2 vTexCoord;
void main() {
    // video rows arrive top-down
    vTexCoord = vec2(aTexCoord.x, 1.0 - aTexCoord.y);
    gl_Position = vec4(aPosition * 2.0 - 1.0, 0.0, 1.0);
}
"#;

pub const ROUNDED_SQUARE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
in vec2 vTexCoord;
out vec4 fragColor;
uniform sampler2D tex0;
uniform vec2 resolution;
uniform vec2 ledCount;
uniform float pitch;

void main() {
    vec2 local = fract(vTexCoord * ledCount);
    vec2 cell = floor(vTexCoord * ledCount) / ledCount;
    vec4 col = texture(tex0, cell + vec2(0.5) / ledCount);

    vec2 d = abs(local - 0.5);
    float halfExtent = pitch * 0.5;
    float cornerRadius = pitch * 0.5;
    float softness = 0.03;
    float dist = length(max(d - vec2(halfExtent - cornerRadius), 0.0)) - cornerRadius;
    float mask = 1.0 - smoothstep(-softness, softness, dist);

    fragColor = col * mask;
}
"#;

pub const CIRCLE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
in vec2 vTexCoord;
out vec4 fragColor;
uniform sampler2D tex0;
uniform vec2 resolution;
uniform float ledCount;
uniform float pitch;

void main() {
    vec2 count = vec2(ledCount, max(floor(ledCount * resolution.y / resolution.x + 0.5), 1.0));
    vec2 local = fract(vTexCoord * count);
    vec2 cell = floor(vTexCoord * count) / count;
    vec4 col = texture(tex0, cell + vec2(0.5) / count);

    float softness = 0.03;
    float dist = distance(local, vec2(0.5));
    float mask = 1.0 - smoothstep(pitch - softness, pitch + softness, dist);

    fragColor = col * mask;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskShape {
    #[default]
    RoundedSquare,
    Circle,
}

impl MaskShape {
    pub fn fragment_source(self) -> &'static str {
        match self {
            MaskShape::RoundedSquare => ROUNDED_SQUARE_FRAGMENT,
            MaskShape::Circle => CIRCLE_FRAGMENT,
        }
    }

    /// Value of the `#shapeSelect` option and the `shape` query parameter.
    pub fn key(self) -> &'static str {
        match self {
            MaskShape::RoundedSquare => "round",
            MaskShape::Circle => "circle",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "round" | "square" => Some(MaskShape::RoundedSquare),
            "circle" => Some(MaskShape::Circle),
            _ => None,
        }
    }
}

/// GLSL `smoothstep`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Grid counts as the given shader program sees them.
fn led_count(shape: MaskShape, grid: GridSpec, resolution: [f32; 2]) -> [f32; 2] {
    match shape {
        MaskShape::RoundedSquare => grid.as_vec2(),
        MaskShape::Circle => {
            let cols = grid.columns() as f32;
            [cols, (cols * resolution[1] / resolution[0]).round().max(1.0)]
        }
    }
}

/// Coverage of the lit LED at position `local` (each axis in `[0, 1)`) inside a cell.
pub fn led_mask(shape: MaskShape, local: [f32; 2], pitch: Pitch) -> f32 {
    let p = pitch.get();
    let dx = local[0] - 0.5;
    let dy = local[1] - 0.5;
    match shape {
        MaskShape::RoundedSquare => {
            let half_extent = p * 0.5;
            let corner = p * 0.5;
            let inset = half_extent - corner;
            let qx = (dx.abs() - inset).max(0.0);
            let qy = (dy.abs() - inset).max(0.0);
            let dist = (qx * qx + qy * qy).sqrt() - corner;
            1.0 - smoothstep(-SOFTNESS, SOFTNESS, dist)
        }
        MaskShape::Circle => {
            let dist = (dx * dx + dy * dy).sqrt();
            1.0 - smoothstep(p - SOFTNESS, p + SOFTNESS, dist)
        }
    }
}

/// Texture coordinate sampled for the cell containing `uv`.
pub fn cell_sample_uv(uv: [f32; 2], count: [f32; 2]) -> [f32; 2] {
    let cx = (uv[0] * count[0]).floor() / count[0];
    let cy = (uv[1] * count[1]).floor() / count[1];
    [cx + 0.5 / count[0], cy + 0.5 / count[1]]
}

/// Inputs shared by every pixel of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeParams {
    pub shape: MaskShape,
    pub grid: GridSpec,
    pub pitch: Pitch,
    pub resolution: [f32; 2],
}

/// CPU rendition of the fragment stage; `sample` reads the source frame at a
/// texture coordinate.
pub fn shade<F>(uv: [f32; 2], params: &ShadeParams, sample: F) -> [f32; 4]
where
    F: Fn([f32; 2]) -> [f32; 4],
{
    let count = led_count(params.shape, params.grid, params.resolution);
    let color = sample(cell_sample_uv(uv, count));
    let local = [fract(uv[0] * count[0]), fract(uv[1] * count[1])];
    let mask = led_mask(params.shape, local, params.pitch);
    color.map(|c| c * mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_matches_glsl_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sources_declare_the_uniforms_the_renderer_binds() {
        for shape in [MaskShape::RoundedSquare, MaskShape::Circle] {
            let src = shape.fragment_source();
            for name in [U_TEXTURE, U_RESOLUTION, U_LED_COUNT, U_PITCH] {
                assert!(src.contains(name), "{:?} missing {}", shape, name);
            }
        }
        assert!(ROUNDED_SQUARE_FRAGMENT.contains("uniform vec2 ledCount"));
        assert!(CIRCLE_FRAGMENT.contains("uniform float ledCount"));
    }

    #[test]
    fn shape_keys_round_trip() {
        assert_eq!(MaskShape::from_key("circle"), Some(MaskShape::Circle));
        assert_eq!(MaskShape::from_key(MaskShape::RoundedSquare.key()), Some(MaskShape::RoundedSquare));
        assert_eq!(MaskShape::from_key("hex"), None);
    }
}
