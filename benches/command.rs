use criterion::{Criterion, Throughput};
use serialcmd::command::tokenizer::split;
use serialcmd::command::*;
use serialcmd::transport::BufferedTransport;
use std::hint::black_box;

fn noop(args: &Args<'_>) -> CommandResult {
    black_box(args.len());
    Ok(())
}

const COMMANDS: &[Command<'static>] = &[
    Command::new("status", &noop),
    Command::new("reset", &noop),
    Command::new("set", &noop),
    Command::new("blink", &noop),
];

pub fn bench_split(c: &mut Criterion) {
    let section = "0 1 2 3 4 5 6 7 8 9";
    let mut group = c.benchmark_group("tokenizer");
    group.throughput(Throughput::Bytes(section.len() as u64));
    group.bench_function("split_ten_args", |b| {
        b.iter(|| split(black_box(section), ' '))
    });
    group.finish();
}

pub fn bench_parse_framed(c: &mut Criterion) {
    let config = ParserConfig::new().with_start_char('[').with_stop_char(']');
    let line = "[blink 3 200]";
    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("parse_framed", |b| {
        b.iter(|| parse(black_box(line), &config))
    });
    group.finish();
}

pub fn bench_dispatch(c: &mut Criterion) {
    let transport: BufferedTransport<1, 64> = BufferedTransport::new();
    let mut dispatcher = Dispatcher::new(transport, Registry::new(COMMANDS));
    dispatcher.set_echo(false);

    c.bench_function("dispatch_line", |b| {
        b.iter(|| {
            dispatcher
                .transport_mut()
                .push_line("blink 3 200")
                .expect("queue has room");
            black_box(dispatcher.run())
        })
    });
}
