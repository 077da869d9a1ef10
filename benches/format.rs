//! Criterion benchmarks for the calculator output path.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use savings_site::animation::AnimationRun;
use savings_site::calculator::SavingsInput;
use savings_site::{NumberFormat, NumberLocale};

/// One animation frame: sample the run and format the value.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for end in [1_000.0, 12_000.0, 9_876_543.21].iter() {
        group.bench_with_input(BenchmarkId::new("sample_and_format", end), end, |b, &end| {
            let run = AnimationRun::new(0.0, end, 0.0, 600.0);
            let locale = NumberLocale::DE;
            let mut now = 0.0;
            b.iter(|| {
                now = (now + 16.7) % 640.0;
                let frame = run.frame(black_box(now));
                black_box(locale.format_currency(frame.value))
            });
        });
    }

    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    c.bench_function("recompute_from_raw", |b| {
        b.iter(|| {
            let s = SavingsInput::from_raw(black_box("10"), black_box("25.50")).savings();
            black_box(s.yearly)
        });
    });
}

criterion_group!(benches, bench_frame, bench_recompute);
criterion_main!(benches);
