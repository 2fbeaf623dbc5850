use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use verity::prelude::*;

fn bench_path_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_resolution");

    let value = Value::new(json!({
        "user": {"name": "Ada", "tags": ["a", "b", "c"]},
        "items": [{"name": "first"}, {"name": "second"}],
    }));

    group.bench_function("top_level", |b| b.iter(|| value.get(black_box("user"))));

    group.bench_function("nested_key", |b| {
        b.iter(|| value.get(black_box("user.name")))
    });

    group.bench_function("array_index", |b| {
        b.iter(|| value.get(black_box("items.1.name")))
    });

    group.bench_function("missing", |b| {
        b.iter(|| value.get(black_box("user.email.domain")))
    });

    group.finish();
}

fn bench_builtin_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin_rules");

    let text = Value::new(json!("Hello World"));
    let list = Value::new(json!(["a", "b"]));

    group.bench_function("present", |b| b.iter(|| Present.verify(black_box(&text))));
    group.bench_function("required", |b| b.iter(|| Required.verify(black_box(&text))));
    group.bench_function("slice_valid", |b| b.iter(|| Slice.verify(black_box(&list))));
    group.bench_function("slice_invalid", |b| b.iter(|| Slice.verify(black_box(&text))));

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let verifications = vec![
        verify!("title", Required),
        verify!("tags", Slice),
        verify!("author.name", Present),
        verify!("summary", Slice),
    ];

    let valid = json!({
        "title": "Horses",
        "tags": ["animals"],
        "author": {"name": "Ada"},
    });

    let invalid = json!({
        "title": "",
        "tags": "animals",
        "author": {},
    });

    group.bench_function("valid_payload", |b| {
        b.iter(|| validate(black_box(&valid), &verifications))
    });

    group.bench_function("invalid_payload", |b| {
        b.iter(|| validate(black_box(&invalid), &verifications))
    });

    group.bench_function("absent_root", |b| {
        b.iter(|| validate(black_box(Value::absent()), &verifications))
    });

    group.bench_function("error_body", |b| {
        let errors: ValidationErrors = validate(&invalid, &verifications).into();
        b.iter(|| black_box(&errors).to_json())
    });

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_path_resolution,
    bench_builtin_rules,
    bench_validate,
);

criterion_main!(validation_benches);
