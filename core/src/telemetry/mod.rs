//! telemetry/mod.rs
//! Stage timing for encrypt/decrypt calls.
//!
//! Notes:
//! - Key stretching dominates every call; per-stage timings make that visible
//!   to callers without a profiler.
//! - Timings are reported through the stats structs and `tracing`, never persisted.

pub mod timers;

pub use timers::*;
