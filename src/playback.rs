//! Timeline and clock formatting around the native video element.

/// Formats seconds as `M:SS`; anything non-finite renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// What the scrubber and time label should show this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub max: f64,
    pub value: f64,
    pub label: String,
}

impl TimelineView {
    /// `None` until the media reports a usable duration.
    pub fn from_media(current: f64, duration: f64) -> Option<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return None;
        }
        let value = if current.is_finite() {
            current.clamp(0.0, duration)
        } else {
            0.0
        };
        Some(Self {
            max: duration,
            value,
            label: format!("{} / {}", format_time(value), format_time(duration)),
        })
    }
}

/// Seek position for a scrubber value, clamped into the media.
pub fn scrub_target(raw: &str, duration: f64) -> Option<f64> {
    let t = raw.trim().parse::<f64>().ok().filter(|t| t.is_finite())?;
    if duration.is_finite() && duration > 0.0 {
        Some(t.clamp(0.0, duration))
    } else {
        Some(t.max(0.0))
    }
}
