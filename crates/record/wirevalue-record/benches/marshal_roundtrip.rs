use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wirevalue_core::{parse, serialize, GenericValue};
use wirevalue_record::{descriptor, from_value, to_value, DescriptorError, Record, RecordDescriptor};

#[derive(Clone, Default)]
struct SampleRecord {
    id: u32,
    name: String,
    weights: Vec<f64>,
    attrs: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct Batch {
    samples: Vec<SampleRecord>,
}

impl Record for SampleRecord {
    const NAME: &'static str = "SampleRecord";

    fn describe() -> Result<RecordDescriptor<Self>, DescriptorError> {
        RecordDescriptor::builder(Self::NAME)
            .field("id", |s: &SampleRecord| &s.id, |s: &mut SampleRecord| &mut s.id)
            .field("name", |s: &SampleRecord| &s.name, |s: &mut SampleRecord| &mut s.name)
            .field("weights", |s: &SampleRecord| &s.weights, |s: &mut SampleRecord| &mut s.weights)
            .field("attrs", |s: &SampleRecord| &s.attrs, |s: &mut SampleRecord| &mut s.attrs)
            .build()
    }
}

impl Record for Batch {
    const NAME: &'static str = "Batch";

    fn describe() -> Result<RecordDescriptor<Self>, DescriptorError> {
        RecordDescriptor::builder(Self::NAME)
            .field("samples", |b: &Batch| &b.samples, |b: &mut Batch| &mut b.samples)
            .build()
    }
}

fn make_batch(n: usize) -> Batch {
    let samples = (0..n)
        .map(|i| SampleRecord {
            id: i as u32,
            name: format!("sample-{i}"),
            weights: (0..16).map(|w| w as f64 * 0.25).collect(),
            attrs: HashMap::from([
                ("site".to_string(), "north".to_string()),
                ("rev".to_string(), i.to_string()),
            ]),
        })
        .collect();
    Batch { samples }
}

fn bench_marshal(c: &mut Criterion) {
    let d = descriptor::<Batch>().expect("batch descriptor");
    let batch = make_batch(256);
    let value = to_value(&batch, d);
    let text = serialize(&value);

    c.bench_function("to_value_256", |b| b.iter(|| black_box(to_value(black_box(&batch), d))));

    c.bench_function("from_value_256", |b| {
        b.iter(|| {
            let mut out = Batch::default();
            black_box(from_value(black_box(&value), d, &mut out));
            out
        })
    });

    c.bench_function("text_to_record_256", |b| {
        b.iter(|| {
            let parsed: GenericValue = parse(black_box(&text)).expect("parse");
            let mut out = Batch::default();
            from_value(&parsed, d, &mut out);
            out
        })
    });
}

criterion_group!(benches, bench_marshal);
criterion_main!(benches);
