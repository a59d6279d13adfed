// Animation-callback rate estimation.
//
// Frames are counted over a schedule of windows: 500 ms, 1000 ms, 2000 ms,
// then 3000 ms repeatedly. Only the 3000 ms windows are kept as samples; once
// three exist their rounded mean becomes the final rate and sampling stops
// for good. Time only advances while the host reports the page visible, so a
// hidden tab pauses the current window instead of restarting it.

use smallvec::SmallVec;
use std::time::Duration;

use super::constants::{
    CALIBRATION_SAMPLES, FIRST_WINDOW_MS, SAMPLE_WINDOW_MS, WARMUP_WINDOW_MAX_MS,
};

/// A completed measurement window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowReport {
    pub window_ms: u32,
    pub frames: u32,
    pub rate: u32,
    /// Whether the window was long enough to count as a calibration sample.
    pub retained: bool,
    /// Set on the window that froze the estimate.
    pub final_rate: Option<u32>,
}

/// Window length following one of `window_ms`.
pub fn next_window_ms(window_ms: u32) -> u32 {
    if window_ms >= WARMUP_WINDOW_MAX_MS {
        SAMPLE_WINDOW_MS
    } else {
        window_ms.saturating_mul(2).min(WARMUP_WINDOW_MAX_MS)
    }
}

/// `round(frames * 1000 / window_ms)`.
pub fn rate_for(frames: u32, window_ms: u32) -> u32 {
    if window_ms == 0 {
        return 0;
    }
    (frames as f64 * 1000.0 / window_ms as f64).round() as u32
}

#[derive(Clone, Debug)]
pub struct FrameRateEstimator {
    window_ms: u32,
    elapsed: Duration,
    frames: u32,
    samples: SmallVec<[u32; CALIBRATION_SAMPLES]>,
    latest: Option<u32>,
    final_rate: Option<u32>,
    running: bool,
}

impl Default for FrameRateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRateEstimator {
    pub fn new() -> Self {
        Self {
            window_ms: FIRST_WINDOW_MS,
            elapsed: Duration::ZERO,
            frames: 0,
            samples: SmallVec::new(),
            latest: None,
            final_rate: None,
            running: false,
        }
    }

    /// Page became visible. Returns whether frames should be fed, which is
    /// never the case once the estimate is frozen.
    pub fn resume(&mut self) -> bool {
        self.running = self.final_rate.is_none();
        self.running
    }

    /// Page became hidden; the current window keeps its progress.
    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_frozen(&self) -> bool {
        self.final_rate.is_some()
    }

    pub fn final_rate(&self) -> Option<u32> {
        self.final_rate
    }

    /// Best rate known right now: the frozen estimate, else the most recent
    /// window's measurement.
    pub fn current_rate(&self) -> Option<u32> {
        self.final_rate.or(self.latest)
    }

    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Feed one animation callback that arrived `dt` after the previous one
    /// (or after `resume`). A callback landing on or past the window end
    /// closes the window and is counted towards the next one.
    ///
    /// A gap of a whole window or more is a main-thread stall, not a frame
    /// rate: the window in progress is thrown away and measured again.
    pub fn record_frame(&mut self, dt: Duration) -> Option<WindowReport> {
        if !self.running {
            return None;
        }
        let window = Duration::from_millis(self.window_ms as u64);
        if dt >= window {
            self.elapsed = Duration::ZERO;
            self.frames = 0;
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < window {
            self.frames += 1;
            return None;
        }
        // dt < window, so the carry is shorter than any later window and at
        // most one window closes per callback
        let overflow = self.elapsed - window;
        Some(self.close_window(overflow))
    }

    fn close_window(&mut self, overflow: Duration) -> WindowReport {
        let window_ms = self.window_ms;
        let frames = self.frames;
        let rate = rate_for(frames, window_ms);
        let retained = window_ms >= SAMPLE_WINDOW_MS;

        self.latest = Some(rate);
        if retained {
            self.samples.push(rate);
        }
        if self.samples.len() >= CALIBRATION_SAMPLES {
            let sum: u64 = self.samples.iter().map(|&s| s as u64).sum();
            let mean = (sum as f64 / self.samples.len() as f64).round() as u32;
            self.final_rate = Some(mean);
            self.running = false;
        }

        self.window_ms = next_window_ms(window_ms);
        self.elapsed = overflow;
        self.frames = 1;

        WindowReport {
            window_ms,
            frames,
            rate,
            retained,
            final_rate: self.final_rate,
        }
    }
}
