use criterion::{criterion_group, criterion_main};

mod command;

criterion_group!(
    benches,
    command::bench_split,
    command::bench_parse_framed,
    command::bench_dispatch
);
criterion_main!(benches);
