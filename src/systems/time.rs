//! Time update.
//!
//! Advances the engine's [`WorldTime`] once per frame from the host
//! timestamp and returns the scaled delta handed to scene systems.
use crate::resources::worldtime::WorldTime;

/// Record a new frame at `timestamp_ms` and return the scaled delta in ms.
///
/// The delta is `timestamp - previous timestamp`, with the first frame using
/// the raw timestamp. `time_scale` multiplies it before it reaches `elapsed`.
pub fn update_world_time(wt: &mut WorldTime, timestamp_ms: f64) -> f64 {
    let scaled = wt.raw_delta(timestamp_ms) * wt.time_scale;
    wt.last_timestamp_ms = Some(timestamp_ms);
    wt.elapsed_ms += scaled;
    wt.delta_ms = scaled;
    wt.frame_count += 1;
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_raw_timestamp() {
        let mut wt = WorldTime::default();
        assert_eq!(update_world_time(&mut wt, 1234.0), 1234.0);
        assert_eq!(wt.frame_count, 1);
        assert_eq!(update_world_time(&mut wt, 1250.0), 16.0);
        assert_eq!(wt.elapsed_ms, 1250.0);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_time_scale_applies_to_delta_and_elapsed() {
        let mut wt = WorldTime::with_time_scale(0.5);
        update_world_time(&mut wt, 0.0);
        assert_eq!(update_world_time(&mut wt, 20.0), 10.0);
        assert_eq!(wt.elapsed_ms, 10.0);
        assert_eq!(wt.fps(), Some(100.0));
    }

    #[test]
    fn test_zero_delta_has_no_fps() {
        let mut wt = WorldTime::default();
        update_world_time(&mut wt, 0.0);
        assert_eq!(wt.fps(), None);
    }
}
