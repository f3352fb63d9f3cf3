use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use iconlabel::prelude::*;
use iconlabel::text::DEFAULT_FONT_CANDIDATES;

const LABELS: [&[&str]; 3] = [
    &["HELLO"],
    &["TEAM", "ALPHA"],
    &["ABCDEFGH", "IJKLMNOP", "QRSTUVWX", "YZ123456"],
];

pub fn bench_icon(c: &mut Criterion) {
    let font = match std::env::var_os("ICONLABEL_FONT") {
        Some(path) => Font::open(path),
        None => Font::discover(DEFAULT_FONT_CANDIDATES).map(|(font, _)| font),
    };
    let Ok(font) = font else {
        eprintln!("no font found, set ICONLABEL_FONT to run the icon benchmarks");
        return;
    };

    let mut c = c.benchmark_group("icon");
    c.sample_size(10)
        .warm_up_time(Duration::from_millis(1500))
        .measurement_time(Duration::from_secs(5));

    let engine = LayoutEngine::new(&font);
    let renderer = Renderer::new(&font);

    for lines in LABELS {
        let label = Label::from_raw(lines, &[]).unwrap();

        c.bench_function(format!("layout {} line(s)", lines.len()).as_str(), |b| {
            b.iter(|| engine.layout(&label))
        });

        c.bench_function(format!("render + encode {} line(s)", lines.len()).as_str(), |b| {
            b.iter(|| renderer.render(&label).encode_png().unwrap())
        });
    }

    c.finish();
}

criterion_group!(benches, bench_icon);
criterion_main!(benches);
