use std::time::Instant;

/// Runs `f`, reporting its wall time through `tracing` when `enabled`.
pub fn time<T>(name: &str, enabled: bool, f: impl FnOnce() -> T) -> T {
    if !enabled {
        return f();
    }
    let start = Instant::now();
    let out = f();
    let ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::debug!(phase = name, elapsed_ms = ms, "{name} time: {ms:.3}ms");
    out
}
