// Host-side tests for frame-rate calibration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod frame_rate {
    include!("../src/core/frame_rate.rs");
}

use frame_rate::*;
use std::time::Duration;

// 50 fps, so every window boundary lands exactly on a frame
const DT: Duration = Duration::from_millis(20);

fn feed(est: &mut FrameRateEstimator, frames: usize, dt: Duration) -> Vec<WindowReport> {
    (0..frames).filter_map(|_| est.record_frame(dt)).collect()
}

#[test]
fn window_schedule_doubles_then_settles() {
    assert_eq!(next_window_ms(500), 1000);
    assert_eq!(next_window_ms(1000), 2000);
    assert_eq!(next_window_ms(2000), 3000);
    assert_eq!(next_window_ms(3000), 3000);
    assert_eq!(next_window_ms(1500), 2000);
}

#[test]
fn rate_is_rounded_frames_per_second() {
    assert_eq!(rate_for(30, 500), 60);
    assert_eq!(rate_for(179, 3000), 60);
    assert_eq!(rate_for(0, 1000), 0);
    assert_eq!(rate_for(10, 0), 0);
}

#[test]
fn nothing_is_counted_before_resume() {
    let mut est = FrameRateEstimator::new();
    assert!(!est.is_running());
    assert!(feed(&mut est, 1000, DT).is_empty());
    assert_eq!(est.current_rate(), None);
}

#[test]
fn full_calibration_runs_through_every_window() {
    let mut est = FrameRateEstimator::new();
    assert!(est.resume());
    let reports = feed(&mut est, 25 + 50 + 100 + 3 * 150, DT);

    let windows: Vec<u32> = reports.iter().map(|r| r.window_ms).collect();
    assert_eq!(windows, vec![500, 1000, 2000, 3000, 3000, 3000]);
    let rates: Vec<u32> = reports.iter().map(|r| r.rate).collect();
    assert_eq!(rates, vec![48, 50, 50, 50, 50, 50]);
    let retained: Vec<bool> = reports.iter().map(|r| r.retained).collect();
    assert_eq!(retained, vec![false, false, false, true, true, true]);

    assert_eq!(est.samples(), &[50, 50, 50]);
    assert_eq!(reports.last().unwrap().final_rate, Some(50));
    assert!(reports[..5].iter().all(|r| r.final_rate.is_none()));
    assert_eq!(est.final_rate(), Some(50));
    assert!(est.is_frozen());
    assert!(!est.is_running());
}

#[test]
fn frozen_estimate_is_never_resampled() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    feed(&mut est, 625, DT);
    assert!(est.is_frozen());

    assert!(!est.resume());
    assert!(feed(&mut est, 1000, Duration::from_millis(5)).is_empty());
    assert_eq!(est.current_rate(), Some(50));
    assert_eq!(est.samples().len(), 3);
}

#[test]
fn warm_up_windows_provide_a_provisional_rate() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    assert_eq!(est.current_rate(), None);
    let reports = feed(&mut est, 25, DT);
    assert_eq!(reports.len(), 1);
    assert_eq!(est.current_rate(), Some(48));
    assert!(est.samples().is_empty());
    assert_eq!(est.window_ms(), 1000);
}

#[test]
fn hidden_page_pauses_without_restarting_the_window() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    assert!(feed(&mut est, 10, DT).is_empty());

    est.pause();
    assert!(!est.is_running());
    assert!(feed(&mut est, 100, DT).is_empty());

    assert!(est.resume());
    assert!(feed(&mut est, 14, DT).is_empty());
    let reports = feed(&mut est, 1, DT);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].window_ms, 500);
    assert_eq!(reports[0].frames, 24);
}

#[test]
fn final_rate_is_rounded_mean_of_samples() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    // warm-up: 500 + 1000 + 2000 ms at 50 fps
    feed(&mut est, 25 + 50 + 100, DT);
    assert_eq!(est.window_ms(), 3000);

    // one 3000 ms window at 50 fps
    let first = feed(&mut est, 150, DT);
    assert_eq!(first[0].rate, 50);

    // two 3000 ms windows at 100 fps
    let rest = feed(&mut est, 600, Duration::from_millis(10));
    let rates: Vec<u32> = rest.iter().map(|r| r.rate).collect();
    assert_eq!(rates, vec![100, 100]);
    assert_eq!(est.samples(), &[50, 100, 100]);
    // (50 + 100 + 100) / 3 = 83.33
    assert_eq!(est.final_rate(), Some(83));
}

#[test]
fn main_thread_stall_never_becomes_a_sample() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    // warm-up plus the first 3000 ms sample at 50 fps
    let before = feed(&mut est, 25 + 50 + 100 + 150, DT);
    assert_eq!(before.len(), 4);
    assert_eq!(est.samples(), &[50]);

    // a seven second gap discards the window in progress
    assert_eq!(est.record_frame(Duration::from_millis(7000)), None);
    assert_eq!(est.samples(), &[50]);
    assert_eq!(est.window_ms(), 3000);

    let after = feed(&mut est, 300, DT);
    assert_eq!(after.len(), 2);
    assert!(after.iter().all(|r| r.rate > 0));
    assert!(est.samples().iter().all(|&s| s > 0));
    assert_eq!(est.samples(), &[50, 50, 50]);
    assert_eq!(est.final_rate(), Some(50));
}

#[test]
fn stall_during_warm_up_restarts_that_window() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    assert!(feed(&mut est, 10, DT).is_empty());
    assert_eq!(est.record_frame(Duration::from_millis(600)), None);
    assert_eq!(est.window_ms(), 500);
    assert_eq!(est.current_rate(), None);

    let reports = feed(&mut est, 25, DT);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].frames, 24);
    assert_eq!(reports[0].rate, 48);
}

#[test]
fn at_most_one_window_closes_per_callback() {
    let mut est = FrameRateEstimator::new();
    est.resume();
    // 499 ms gaps: just under the first window each time
    let gap = Duration::from_millis(499);
    let mut previous_closed = false;
    for _ in 0..40 {
        let closed = est.record_frame(gap).is_some();
        assert!(!(closed && previous_closed), "carry closed a second window");
        previous_closed = closed;
    }
    assert!(est.samples().iter().all(|&s| s > 0));
}
