/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with frame metrics shown in the
 * control panel and the on-canvas overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Time spent in the last simulation step
 * - Simulation step counter
 * - Steps run in the last frame
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub steps: u64,
    pub steps_this_frame: usize,
}

impl DebugInfo {
    // Lines shown by the on-canvas overlay
    pub fn lines(&self, agents: usize, arena_width: f64, arena_height: f64) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Step time: {:.3} ms", self.step_time.as_secs_f64() * 1000.0),
            format!("Steps: {}", self.steps),
            format!("Steps this frame: {}", self.steps_this_frame),
            format!("Boids: {}", agents),
            format!("Arena: {:.0}x{:.0}", arena_width, arena_height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_lists_agent_count_and_arena() {
        let info = DebugInfo {
            steps: 12,
            ..DebugInfo::default()
        };
        let lines = info.lines(101, 640.0, 480.0);
        assert!(lines.contains(&"Boids: 101".to_string()));
        assert!(lines.contains(&"Steps: 12".to_string()));
        assert!(lines.contains(&"Arena: 640x480".to_string()));
    }
}
