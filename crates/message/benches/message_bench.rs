use criterion::{Criterion, criterion_group, criterion_main};
use micro_message::directive::{Pipeline, add_header, remove_header, set_body, set_destination, set_source};
use micro_message::wrapper::{header, header_values};
use micro_message::{Message, WMessage};
use std::hint::black_box;

const HEADERS: [(&str, &str); 8] = [
    ("Host", "127.0.0.1:8080"),
    ("User-Agent", "curl/7.79.1"),
    ("Accept", "text/html"),
    ("Accept", "*/*"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
    ("Cache-Control", "max-age=0"),
    ("Via", "proxy-1"),
];

fn build(pipeline: &Pipeline<Message>) -> Message {
    Message::new() << pipeline << set_body("hello") << set_source("client-A") << set_destination("server-B")
}

fn bench_build_message(c: &mut Criterion) {
    let mut pipeline = Pipeline::<Message>::new();
    pipeline.extend(HEADERS.iter().map(|(name, value)| add_header(*name, *value)));

    c.bench_function("build_message", |b| {
        b.iter(|| black_box(build(black_box(&pipeline))));
    });
}

fn bench_build_wide_message(c: &mut Criterion) {
    c.bench_function("build_wide_message", |b| {
        b.iter(|| {
            let mut message = WMessage::new();
            for (name, value) in HEADERS {
                message.add_header(black_box(name), black_box(value));
            }
            black_box(message)
        });
    });
}

fn bench_extract_header(c: &mut Criterion) {
    let mut pipeline = Pipeline::<Message>::new();
    pipeline.extend(HEADERS.iter().map(|(name, value)| add_header(*name, *value)));
    let message = build(&pipeline);

    c.bench_function("extract_first_header", |b| {
        b.iter(|| black_box(message.extract(black_box(&header("Accept")))).is_ok());
    });

    c.bench_function("extract_header_values", |b| {
        b.iter(|| black_box(message.extract(black_box(&header_values("Accept")))).len());
    });
}

fn bench_remove_header(c: &mut Criterion) {
    let mut pipeline = Pipeline::<Message>::new();
    pipeline.extend(HEADERS.iter().map(|(name, value)| add_header(*name, *value)));
    let message = build(&pipeline);

    c.bench_function("remove_duplicated_header", |b| {
        b.iter(|| black_box(message.clone() << remove_header("Accept")));
    });
}

criterion_group!(benches, bench_build_message, bench_build_wide_message, bench_extract_header, bench_remove_header);
criterion_main!(benches);
