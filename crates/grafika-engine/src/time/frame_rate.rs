use std::time::Instant;

use super::FrameTime;

/// Counts frames and reports an average rate once per window of frames.
#[derive(Debug, Clone)]
pub struct FrameRate {
    window: u32,
    frames: u32,
    window_start: Option<Instant>,
}

impl FrameRate {
    /// `window` is the number of frames averaged per sample (at least 1).
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            frames: 0,
            window_start: None,
        }
    }

    /// Records a frame. Returns frames/second when a window completes.
    pub fn record(&mut self, ft: &FrameTime) -> Option<f32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(ft.now);
            return None;
        };

        self.frames += 1;
        if self.frames < self.window {
            return None;
        }

        let secs = ft.now.saturating_duration_since(start).as_secs_f32();
        let frames = self.frames;
        self.frames = 0;
        self.window_start = Some(ft.now);

        (secs > 0.0).then(|| frames as f32 / secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(now: Instant, i: u64) -> FrameTime {
        FrameTime { dt: 0.0, now, frame_index: i }
    }

    #[test]
    fn reports_once_per_window() {
        let start = Instant::now();
        let mut rate = FrameRate::new(4);

        assert_eq!(rate.record(&frame(start, 0)), None);
        for i in 1..4 {
            let now = start + Duration::from_millis(10 * i);
            assert_eq!(rate.record(&frame(now, i)), None);
        }

        let fps = rate
            .record(&frame(start + Duration::from_millis(40), 4))
            .expect("window complete");
        assert!((fps - 100.0).abs() < 0.01);

        assert_eq!(rate.record(&frame(start + Duration::from_millis(50), 5)), None);
    }

    #[test]
    fn zero_window_is_treated_as_one() {
        let start = Instant::now();
        let mut rate = FrameRate::new(0);
        assert_eq!(rate.record(&frame(start, 0)), None);
        let fps = rate.record(&frame(start + Duration::from_millis(20), 1));
        assert!(fps.is_some());
    }
}
