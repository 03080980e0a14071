//! Frame clock.
//!
//! Tracks host timestamps (milliseconds) and derives the per-frame delta.
//! The first frame's delta is the raw first timestamp: there is no previous
//! timestamp to subtract, and it is not clamped.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldTime {
    /// Scaled milliseconds since the clock started.
    pub elapsed_ms: f64,
    /// Scaled delta of the last frame.
    pub delta_ms: f64,
    pub time_scale: f64,
    pub frame_count: u64,
    /// Host timestamp of the last frame, if any.
    pub last_timestamp_ms: Option<f64>,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed_ms: 0.0,
            delta_ms: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            last_timestamp_ms: None,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(time_scale: f64) -> Self {
        WorldTime {
            time_scale,
            ..Default::default()
        }
    }

    /// Unscaled delta between `timestamp_ms` and the previous timestamp.
    pub fn raw_delta(&self, timestamp_ms: f64) -> f64 {
        timestamp_ms - self.last_timestamp_ms.unwrap_or(0.0)
    }

    /// Instantaneous frame rate from the last delta, if it is positive.
    pub fn fps(&self) -> Option<f64> {
        (self.delta_ms > 0.0).then(|| 1000.0 / self.delta_ms)
    }
}
