// lib.rs - Frame latency telemetry API
mod time;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "human-log")]
mod log;

pub use time::{now_ns, since_ms};

/// Record a measurement in milliseconds
///
/// Emits the measurement to the configured backend (log or json)
pub fn record_ms(name: &str, start_ns: u64) {
    let ms = since_ms(start_ns);

    #[cfg(feature = "json")]
    json::emit(name, ms);

    #[cfg(all(not(feature = "json"), feature = "human-log"))]
    log::emit(name, ms);
}

/// Time a closure and emit its latency under `name`
///
/// The main helper for measuring a per-frame annotate pass
pub fn time_call<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let t0 = now_ns();
    let out = f();
    record_ms(name, t0);
    out
}
