// File: crates/texfig-core/benches/export_bench.rs
// Summary: Criterion benches for building the sample figure and rendering both backends.

use criterion::{criterion_group, criterion_main, black_box, Criterion};
use texfig_core::export::BackendKind;
use texfig_core::{pipeline, FigureConfig};

fn bench_export(c: &mut Criterion) {
    let cfg = FigureConfig::default();
    let fig = pipeline::build_figure(&cfg).expect("build figure");

    let mut group = c.benchmark_group("render");
    for kind in [BackendKind::Pgf, BackendKind::Tikz] {
        let backend = cfg.backend(kind);
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter(|| black_box(backend.render(black_box(&fig))));
        });
    }
    group.finish();

    c.bench_function("build_figure", |b| {
        b.iter(|| black_box(pipeline::build_figure(black_box(&cfg))));
    });
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
