use led_wall::grid::Pitch;
use led_wall::shader::{cell_sample_uv, led_mask, shade, ShadeParams};
use led_wall::{GridSpec, MaskShape};

const SHAPES: [MaskShape; 2] = [MaskShape::RoundedSquare, MaskShape::Circle];
const PITCHES: [f32; 5] = [Pitch::MIN, 0.18, 0.3, 0.45, Pitch::MAX];

#[test]
fn lit_at_centre_dark_at_corners() {
    for shape in SHAPES {
        for p in PITCHES {
            let pitch = Pitch::new(p);
            assert_eq!(led_mask(shape, [0.5, 0.5], pitch), 1.0, "{shape:?} pitch {p}");
            for corner in [[0.0, 0.0], [0.0, 0.999], [0.999, 0.0], [0.999, 0.999]] {
                assert_eq!(led_mask(shape, corner, pitch), 0.0, "{shape:?} pitch {p} at {corner:?}");
            }
        }
    }
}

#[test]
fn mask_falls_off_monotonically_from_centre() {
    for shape in SHAPES {
        for p in PITCHES {
            let pitch = Pitch::new(p);
            for dir in [[1.0f32, 0.0], [0.0, 1.0], [0.7071, 0.7071], [-1.0, 0.0]] {
                let mut prev = 1.0f32;
                for i in 0..=200 {
                    let t = 0.5 * i as f32 / 200.0;
                    let local = [0.5 + dir[0] * t, 0.5 + dir[1] * t];
                    let m = led_mask(shape, local, pitch);
                    assert!((0.0..=1.0).contains(&m));
                    assert!(m <= prev + 1e-6, "{shape:?} pitch {p} rose at t={t}");
                    prev = m;
                }
            }
        }
    }
}

#[test]
fn soft_edge_is_partial() {
    let pitch = Pitch::new(0.3);
    // rounded edge at radius pitch/2, circle edge at radius pitch
    let r = led_mask(MaskShape::RoundedSquare, [0.5 + 0.15, 0.5], pitch);
    let c = led_mask(MaskShape::Circle, [0.5 + 0.3, 0.5], pitch);
    assert!((r - 0.5).abs() < 1e-3, "{r}");
    assert!((c - 0.5).abs() < 1e-3, "{c}");
}

#[test]
fn samples_cell_centre() {
    assert_eq!(cell_sample_uv([0.6, 0.9], [4.0, 4.0]), [0.625, 0.875]);
    assert_eq!(cell_sample_uv([0.0, 0.0], [8.0, 2.0]), [0.0625, 0.25]);
}

#[test]
fn shade_multiplies_sample_by_mask() {
    let params = ShadeParams {
        shape: MaskShape::RoundedSquare,
        grid: GridSpec::new(4, 4).unwrap(),
        pitch: Pitch::default(),
        resolution: [400.0, 400.0],
    };
    let sample = |uv: [f32; 2]| [uv[0], uv[1], 0.0, 1.0];

    assert_eq!(shade([0.625, 0.875], &params, sample), [0.625, 0.875, 0.0, 1.0]);
    assert_eq!(shade([0.5, 0.75], &params, sample), [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn circle_derives_rows_from_resolution() {
    let params = ShadeParams {
        shape: MaskShape::Circle,
        grid: GridSpec::new(8, 4).unwrap(),
        pitch: Pitch::default(),
        resolution: [800.0, 400.0],
    };
    let sample = |uv: [f32; 2]| [uv[0], uv[1], 1.0, 1.0];
    assert_eq!(shade([0.1875, 0.625], &params, sample), [0.1875, 0.625, 1.0, 1.0]);
}

#[test]
fn circle_rounds_derived_rows_to_whole_leds() {
    // 192x64 fitted into 1366 px of width leaves 455 px of height
    let params = ShadeParams {
        shape: MaskShape::Circle,
        grid: GridSpec::new(192, 64).unwrap(),
        pitch: Pitch::default(),
        resolution: [1366.0, 455.0],
    };
    let sample = |uv: [f32; 2]| [uv[0], uv[1], 1.0, 1.0];
    let last_row = shade([0.5 / 192.0, 63.5 / 64.0], &params, sample);
    assert_eq!(last_row[1], 63.5 / 64.0);
    assert_eq!(last_row[3], 1.0);
}

#[test]
fn circle_glsl_rounds_derived_rows() {
    assert!(led_wall::shader::CIRCLE_FRAGMENT.contains("floor(ledCount * resolution.y / resolution.x + 0.5)"));
}
