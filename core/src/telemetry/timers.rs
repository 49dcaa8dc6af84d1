// ## src/telemetry/timers.rs

//! telemetry/timers.rs
//! Stage timers for one encrypt or decrypt call.
//!
//! Summary: Records durations for read, fingerprint, key derivation,
//! encrypt/decrypt and envelope encode/decode stages.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    Read,
    Fingerprint,
    DeriveKey,
    Encrypt,
    Decrypt,
    Encode,
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read        => "read",
            Stage::Fingerprint => "fingerprint",
            Stage::DeriveKey   => "derive_key",
            Stage::Encrypt     => "encrypt",
            Stage::Decrypt     => "decrypt",
            Stage::Encode      => "encode",
            Stage::Decode      => "decode",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    /// Get total duration for a stage.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    /// Whether the stage was recorded at all (even with a zero duration).
    pub fn contains(&self, stage: Stage) -> bool {
        self.times.contains_key(&stage)
    }

    /// Get duration in milliseconds (f64).
    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    /// Sum of all stage durations in milliseconds (f64).
    pub fn total_ms(&self) -> f64 {
        self.times.values().copied().sum::<Duration>().as_secs_f64() * 1_000.0
    }

    /// Check that every expected stage was recorded.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.contains(*s))
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::DeriveKey, Duration::from_millis(3));
        times.add(Stage::DeriveKey, Duration::from_millis(2));
        times.add(Stage::Encrypt, Duration::from_millis(1));

        assert_eq!(times.get(Stage::DeriveKey), Duration::from_millis(5));
        assert!((times.get_ms(Stage::DeriveKey) - 5.0).abs() < 1e-9);
        assert!((times.total_ms() - 6.0).abs() < 1e-9);
        assert_eq!(times.get(Stage::Decrypt), Duration::ZERO);
        assert!(!times.contains(Stage::Decrypt));
    }

    #[test]
    fn timer_charges_closure_to_stage() {
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Fingerprint, || {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        timer.finish();

        assert_eq!(out, 7);
        assert!(timer.stage_times.get(Stage::Fingerprint) >= Duration::from_millis(2));
        assert!(timer.elapsed() >= timer.stage_times.get(Stage::Fingerprint));
        assert!(timer.stage_times.has_all(&[Stage::Fingerprint]));
    }

    #[test]
    fn stage_times_serialize_by_stage_name() {
        let mut times = StageTimes::default();
        times.add(Stage::Decode, Duration::from_millis(1));
        let json = serde_json::to_value(&times).unwrap();
        assert!(json["times"].get("Decode").is_some());
    }
}
