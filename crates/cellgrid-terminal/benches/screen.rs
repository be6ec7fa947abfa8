//! Criterion benchmarks for cellgrid-terminal
//!
//! Run with: cargo bench -p cellgrid-terminal
//!
//! Compares a full redraw against flushes with a small and a large share
//! of changed cells. All output goes to an in-memory buffer.

use cellgrid_terminal::{Color, Screen, ScreenConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn screen(width: u16, height: u16) -> Screen<char, Vec<u8>> {
    Screen::new(ScreenConfig::new(width, height), Vec::with_capacity(64 * 1024))
        .expect("in-memory screen")
}

// =============================================================================
// REDRAW
// =============================================================================

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("redraw");
    group.throughput(Throughput::Elements(80 * 24));

    let mut s = screen(80, 24);
    group.bench_function("full_80x24", |b| {
        b.iter(|| {
            s.writer_mut().clear();
            s.redraw().expect("redraw");
        });
    });

    group.finish();
}

// =============================================================================
// FLUSH
// =============================================================================

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush");
    group.throughput(Throughput::Elements(80 * 24));

    let mut s = screen(80, 24);
    group.bench_function("no_changes_80x24", |b| {
        b.iter(|| {
            s.writer_mut().clear();
            s.flush().expect("flush");
        });
    });

    let mut s = screen(80, 24);
    let mut tick = 0u16;
    group.bench_function("ten_percent_80x24", |b| {
        b.iter(|| {
            tick = tick.wrapping_add(1);
            for i in 0..192u16 {
                let n = i.wrapping_mul(10).wrapping_add(tick) % (80 * 24);
                s.set_cell(n % 80, n / 80, if tick % 2 == 0 { 'x' } else { 'o' });
            }
            s.writer_mut().clear();
            s.flush().expect("flush");
        });
    });

    let mut s = screen(80, 24);
    group.bench_function("full_change_80x24", |b| {
        b.iter(|| {
            tick = tick.wrapping_add(1);
            s.set_fg(Color::gray(tick as u8));
            s.clear(black_box('#'));
            s.writer_mut().clear();
            s.flush().expect("flush");
        });
    });

    group.finish();
}

// =============================================================================
// WRITES
// =============================================================================

fn bench_write_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_string");
    let text: Vec<char> = "the quick brown fox jumps over the lazy dog\n"
        .chars()
        .collect();
    group.throughput(Throughput::Elements(text.len() as u64));

    let mut s = screen(80, 24);
    group.bench_function("scrolling_text", |b| {
        b.iter(|| s.write_string(black_box(&text).iter().copied()));
    });

    group.finish();
}

criterion_group!(benches, bench_redraw, bench_flush, bench_write_string);
criterion_main!(benches);
