use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sipc_codec::{format, Arg, Cursor};

fn parse_trivial_request(c: &mut Criterion) {
    let template: &[u8] = b"R 3:cmd -123 [ 23 3:abc ] nan inf -inf 1|\n 3:cde abcdp3\n";
    c.bench_function("parse trivial request", |b| {
        b.iter(|| {
            let mut buf = template.to_vec();
            let mut cursor = Cursor::init(&mut buf).unwrap();
            cursor.start().unwrap();
            while black_box(cursor.any().unwrap()) != sipc_codec::Atom::End {}
        })
    });
}

fn parse_nested_array(c: &mut Criterion) {
    let mut template = String::from("R");
    for _ in 0..16 {
        template.push_str(" [");
    }
    template.push_str(" 0");
    for _ in 0..16 {
        template.push_str(" ]");
    }
    template.push('\n');
    let template = template.into_bytes();

    c.bench_function("parse 16-deep array", |b| {
        b.iter(|| {
            let mut buf = template.clone();
            let mut cursor = Cursor::init(&mut buf).unwrap();
            cursor.start().unwrap();
            black_box(cursor.any().unwrap());
        })
    });
}

fn format_integers(c: &mut Criterion) {
    c.bench_function("format u64 round-trip values", |b| {
        b.iter(|| {
            let mut buf = [0u8; 32];
            for v in [0u64, 0x180, 0x8000_0000, u64::MAX] {
                black_box(format(&mut buf, "%llu", &[Arg::Unsigned(v)]).unwrap());
            }
        })
    });
}

criterion_group!(benches, parse_trivial_request, parse_nested_array, format_integers);
criterion_main!(benches);
