use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use threat_report::{extract_entities, extract_severities, ReportPipeline};

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    // Representative inputs across kinds and sizes
    let candidates = [
        ("text-log", threat_report::samples::SAMPLE_TEXT_LOG.to_string()),
        ("json-alerts", threat_report::samples::SAMPLE_JSON_ALERTS.to_string()),
        (
            "dense-entities",
            (0..200)
                .map(|i| {
                    format!(
                        "event {} from 10.{}.{}.1 T1{:03}.001 CVE-2023-{:04} severity=high",
                        i,
                        i % 256,
                        (i * 7) % 256,
                        i % 600,
                        1000 + i
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    ];

    for (name, data) in &candidates {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(format!("entities/{}", name), |b| {
            b.iter_batched(
                || data.clone(),
                |text| {
                    let _ = extract_entities(&text);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("severities/{}", name), |b| {
            b.iter_batched(
                || data.clone(),
                |text| {
                    let _ = extract_severities(&text);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = ReportPipeline::heuristic();
    let data = threat_report::samples::SAMPLE_TEXT_LOG;

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("run/text-log", |b| {
        b.iter(|| {
            let _ = pipeline.run(data);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_extraction, bench_full_pipeline);
criterion_main!(benches);
