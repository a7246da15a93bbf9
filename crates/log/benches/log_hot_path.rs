// Hot-path benchmarks for the console logger.
//
// Sinks are in-memory or discarding so the numbers measure filtering and
// line composition, not terminal I/O.

use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use nebula_console_log::{FixedClock, Level, Logger, debug, info};
use time::macros::datetime;

fn sink_logger(colors: bool, timestamp: bool) -> Logger {
    Logger::builder()
        .colors(colors)
        .timestamp(timestamp)
        .clock(FixedClock(datetime!(2024-01-02 03:04:05 UTC)))
        .writer(io::sink())
        .build()
        .expect("failed to build logger")
}

fn filtered(c: &mut Criterion) {
    let logger = sink_logger(true, true);
    logger.set_level(Level::Warn);

    c.bench_function("filtered_debug", |b| {
        b.iter(|| debug!(logger, "value={}", black_box(7)));
    });
}

fn written(c: &mut Criterion) {
    let plain = sink_logger(false, false);
    c.bench_function("info_bare", |b| {
        b.iter(|| info!(plain, "value={}", black_box(7)));
    });

    let full = sink_logger(true, true);
    c.bench_function("info_colored_timestamped", |b| {
        b.iter(|| info!(full, "user {} logged in at {}", black_box("alice"), black_box(42)));
    });
}

criterion_group!(benches, filtered, written);
criterion_main!(benches);
