use std::collections::VecDeque;

const SAMPLE_COUNT: usize = 60;

/// Rolling frame-rate average over the last [`SAMPLE_COUNT`] frames.
pub struct DebugStats {
    frame_times: VecDeque<f32>,
    frames_recorded: u64,
    fps: f32,
}

impl Default for DebugStats {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugStats {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frames_recorded: 0,
            fps: 0.0,
        }
    }

    pub fn record_frame(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(dt);
        self.frames_recorded += 1;

        let avg_dt: f32 = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        self.fps = 1.0 / avg_dt;
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// True once per full sample window, used to throttle title updates.
    pub fn window_complete(&self) -> bool {
        self.frames_recorded > 0 && self.frames_recorded % SAMPLE_COUNT as u64 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_from_steady_frames() {
        let mut stats = DebugStats::new();
        for _ in 0..10 {
            stats.record_frame(1.0 / 50.0);
        }
        assert!((stats.fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_non_positive_frames_ignored() {
        let mut stats = DebugStats::new();
        stats.record_frame(0.0);
        stats.record_frame(-1.0);
        assert_eq!(stats.fps(), 0.0);
        assert!(!stats.window_complete());
    }

    #[test]
    fn test_old_samples_roll_off() {
        let mut stats = DebugStats::new();
        for _ in 0..SAMPLE_COUNT {
            stats.record_frame(1.0);
        }
        for _ in 0..SAMPLE_COUNT {
            stats.record_frame(0.5);
        }
        assert!((stats.fps() - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_window_complete_once_per_window() {
        let mut stats = DebugStats::new();
        let mut completions = 0;
        for _ in 0..SAMPLE_COUNT * 3 {
            stats.record_frame(0.016);
            if stats.window_complete() {
                completions += 1;
            }
        }
        assert_eq!(completions, 3);
    }
}
