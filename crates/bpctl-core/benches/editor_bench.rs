use bpctl_core::editor;
use bpctl_core::{BuildpackList, Target};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_editor(c: &mut Criterion) {
    let list = BuildpackList::from_urls(
        (0..64).map(|i| format!("https://github.com/example/buildpack-{i}")),
    );
    let url = "https://github.com/heroku/heroku-buildpack-ruby";

    c.bench_function("add_middle", |b| {
        b.iter(|| editor::add(black_box(&list), Target::At(32), url))
    });

    c.bench_function("set_append", |b| {
        b.iter(|| editor::set(black_box(&list), Target::At(99), url))
    });
}

criterion_group!(benches, bench_editor);
criterion_main!(benches);
