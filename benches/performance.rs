use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_core::{AgingService, PayrollService, StatementService};
use tally_domain::{DocumentKind, DocumentStatus, FinancialDocument, PayrollRow, PayrollSelection};

fn build_sample_documents(count: usize) -> Vec<FinancialDocument> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|idx| {
            let date = start + Duration::days((idx * 7 % 365) as i64);
            let kind = match idx % 4 {
                0 | 1 => DocumentKind::Invoice,
                2 => DocumentKind::Payment,
                _ => DocumentKind::CreditNote,
            };
            let status = if idx % 3 == 0 {
                DocumentStatus::Paid
            } else {
                DocumentStatus::Pending
            };
            FinancialDocument::new(
                format!("doc-{idx}"),
                date,
                kind,
                format!("REF-{idx}"),
                1_000 + (idx % 100) as i64 * 25,
            )
            .with_due_date(date + Duration::days(30))
            .with_status(status)
        })
        .collect()
}

fn bench_statement(c: &mut Criterion) {
    let docs = build_sample_documents(10_000);
    c.bench_function("statement_build_10k", |b| {
        b.iter(|| {
            let lines = StatementService::build(black_box(&docs)).expect("build");
            black_box(lines);
        })
    });
}

fn bench_aging(c: &mut Criterion) {
    let docs = build_sample_documents(10_000);
    let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    c.bench_function("aging_bucket_10k", |b| {
        b.iter(|| {
            let report = AgingService::bucket(black_box(&docs), reference).expect("aging");
            black_box(report);
        })
    });
}

fn bench_payroll(c: &mut Criterion) {
    let rows: Vec<PayrollRow> = (0..5_000)
        .map(|idx| PayrollRow::new(format!("emp-{idx}"), 250_000 + idx as i64))
        .collect();
    let selection = PayrollSelection::all(&rows);
    c.bench_function("payroll_aggregate_5k", |b| {
        b.iter(|| {
            let totals = PayrollService::aggregate(black_box(&rows), &selection).expect("aggregate");
            black_box(totals);
        })
    });
}

criterion_group!(benches, bench_statement, bench_aging, bench_payroll);
criterion_main!(benches);
