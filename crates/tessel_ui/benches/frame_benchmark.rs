//! # Frame Benchmark
//!
//! Measures the steady-state cost of a typical frame:
//! - a window with a few dozen widgets under moving input
//! - id derivation
//! - walking the finished command list
//!
//! Run with: `cargo bench --package tessel_ui`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tessel_ui::{Context, Id, MouseButton, Options, Rect, Response, TextBuffer};

/// Application state the benchmark window edits.
struct State {
    checks: [bool; 3],
    sliders: [f32; 4],
    name: TextBuffer,
}

impl State {
    fn new() -> Self {
        Self {
            checks: [true, false, true],
            sliders: [0.25, 0.5, 0.75, 1.0],
            name: TextBuffer::with_text(64, "tessel").expect("capacity > 1"),
        }
    }
}

fn build_frame(ctx: &mut Context, state: &mut State, rows: usize) {
    ctx.begin().expect("frame begins");
    ctx.window("Bench", Rect::new(20.0, 20.0, 400.0, 600.0), Options::NONE, |ctx| {
        if ctx.header("Controls", Options::EXPANDED).contains(Response::ACTIVE) {
            ctx.layout_row(&[120.0, -1.0], 0.0);
            for (i, checked) in state.checks.iter_mut().enumerate() {
                ctx.push_id_index(i);
                ctx.label("Option");
                ctx.checkbox("enabled", checked);
                ctx.pop_id();
            }
            for (i, value) in state.sliders.iter_mut().enumerate() {
                ctx.push_id_index(i);
                ctx.label("Level");
                ctx.slider("level", value, 0.0, 1.0);
                ctx.pop_id();
            }
            ctx.label("Name");
            ctx.textbox("name", &mut state.name);
        }
        ctx.layout_row(&[-1.0], 0.0);
        for i in 0..rows {
            ctx.push_id_index(i);
            ctx.button("Row button");
            ctx.pop_id();
        }
        ctx.text("The quick brown fox jumps over the lazy dog. ".repeat(4).as_str());
    });
    ctx.end().expect("frame ends");
}

/// Benchmark: full frames with the cursor sweeping over the window.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    for rows in [10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let mut ctx = Context::new();
            let mut state = State::new();
            let mut tick = 0u32;
            b.iter(|| {
                tick = tick.wrapping_add(1);
                let x = 40.0 + (tick % 300) as f32;
                ctx.input_mousemove(x, 120.0);
                if tick % 8 == 0 {
                    ctx.input_mousedown(x, 120.0, MouseButton::Left);
                } else if tick % 8 == 1 {
                    ctx.input_mouseup(x, 120.0, MouseButton::Left);
                }
                build_frame(&mut ctx, &mut state, rows);
                black_box(ctx.frame())
            });
        });
    }
    group.finish();
}

/// Benchmark: deriving ids from labels.
fn bench_id_hashing(c: &mut Criterion) {
    c.bench_function("id_child_str", |b| {
        b.iter(|| black_box(Id::ROOT).child_str(black_box("Settings/Display/Resolution")));
    });
}

/// Benchmark: iterating a finished frame's command list.
fn bench_command_iteration(c: &mut Criterion) {
    let mut ctx = Context::new();
    let mut state = State::new();
    build_frame(&mut ctx, &mut state, 100);
    c.bench_function("command_iteration", |b| {
        b.iter(|| ctx.commands().map(Iterator::count).unwrap_or(0));
    });
}

criterion_group!(benches, bench_frame, bench_id_hashing, bench_command_iteration);
criterion_main!(benches);
