use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizlens_core::record::{QuizResponseRecord, RecordSet};
use quizlens_core::{attempts, engine, mistakes, overall, questions, trends};

fn make_records(rows: usize) -> RecordSet {
    let records = (0..rows)
        .map(|i| QuizResponseRecord {
            user_id: format!("u{}", i % 50),
            question_no: (i % 20) as i64 + 1,
            quiz_question_id: format!("q{}", i % 20),
            selected_option: ["A", "B", "C", "D"][i % 4].to_string(),
            is_correct: i % 3 != 0,
            attempts: (i % 4) as i64 + 1,
            score: (i % 2) as f64,
            total_score: (i % 11) as f64,
        })
        .collect();
    RecordSet::new(records)
}

fn bench_metric_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_families");
    let records = make_records(10_000);

    group.bench_function("overall", |b| {
        b.iter(|| overall::compute(black_box(&records)))
    });
    group.bench_function("questions", |b| {
        b.iter(|| questions::compute(black_box(&records)))
    });
    group.bench_function("attempts", |b| {
        b.iter(|| attempts::compute(black_box(&records)))
    });
    group.bench_function("mistakes", |b| {
        b.iter(|| mistakes::compute(black_box(&records)))
    });
    group.bench_function("trends", |b| {
        b.iter(|| trends::compute(black_box(&records)))
    });

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_report");

    for rows in [1_000usize, 10_000, 100_000] {
        let records = make_records(rows);
        group.bench_function(format!("rows={rows}"), |b| {
            b.iter(|| engine::compute_report(black_box("bench"), black_box(&records), Vec::new()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_metric_families, bench_full_report);
criterion_main!(benches);
