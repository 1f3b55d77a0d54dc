use chrono::{Duration, NaiveDate};
use tally_core::{AgingService, PayrollService, StatementService};
use tally_domain::{
    AgingBucket, DocumentKind, DocumentStatus, FinancialDocument, PayrollBatchTotals, PayrollField,
    PayrollRow, PayrollSelection,
};

/// Small deterministic generator so fixtures are reproducible without extra crates.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn sample_documents(seed: u64, count: usize) -> Vec<FinancialDocument> {
    let mut rng = Lcg(seed);
    let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    (0..count)
        .map(|idx| {
            let date = start + Duration::days(rng.below(300) as i64);
            let kind = match rng.below(5) {
                0 => DocumentKind::Invoice,
                1 => DocumentKind::Payment,
                2 => DocumentKind::CreditNote,
                3 => DocumentKind::Bill,
                _ => DocumentKind::Other("Adjustment".into()),
            };
            let status = match rng.below(4) {
                0 => DocumentStatus::Draft,
                1 => DocumentStatus::Pending,
                2 => DocumentStatus::Paid,
                _ => DocumentStatus::Overdue,
            };
            let mut doc = FinancialDocument::new(
                format!("doc-{idx}"),
                date,
                kind,
                format!("REF-{idx:04}"),
                rng.below(50_000) as i64,
            )
            .with_status(status);
            if rng.below(3) != 0 {
                doc = doc.with_due_date(date + Duration::days(rng.below(60) as i64));
            }
            doc
        })
        .collect()
}

fn sample_rows(seed: u64, count: usize) -> Vec<PayrollRow> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|idx| PayrollRow {
            employee_id: format!("emp-{idx}"),
            basic_salary: rng.below(500_000) as i64,
            allowances: rng.below(50_000) as i64,
            bonus: rng.below(20_000) as i64,
            overtime: rng.below(10_000) as i64,
            deductions_statutory: rng.below(80_000) as i64,
            deductions_other: rng.below(400_000) as i64,
        })
        .collect()
}

#[test]
fn aging_conserves_outstanding_amounts() {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    for seed in 1..20 {
        let docs = sample_documents(seed, 40);
        let report = AgingService::bucket(&docs, reference).expect("bucket aging");
        let expected: i64 = docs
            .iter()
            .filter(|doc| doc.status != DocumentStatus::Paid)
            .map(|doc| doc.amount)
            .sum();
        assert_eq!(report.total(), expected, "seed {seed}");
        assert_eq!(report.iter().count(), AgingBucket::ALL.len());
    }
}

#[test]
fn statement_is_independent_of_input_order_for_distinct_dates() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let docs: Vec<FinancialDocument> = sample_documents(7, 25)
        .into_iter()
        .enumerate()
        .map(|(idx, mut doc)| {
            doc.date = start + Duration::days(idx as i64 * 3);
            doc.due_date = None;
            doc
        })
        .collect();
    let mut reversed = docs.clone();
    reversed.reverse();
    let mut rotated = docs.clone();
    rotated.rotate_left(11);

    let baseline = StatementService::build(&docs).expect("baseline");
    assert_eq!(StatementService::build(&reversed).expect("reversed"), baseline);
    assert_eq!(StatementService::build(&rotated).expect("rotated"), baseline);
}

#[test]
fn statement_final_balance_is_order_independent() {
    let docs = sample_documents(11, 60);
    let mut shuffled = docs.clone();
    shuffled.reverse();

    let a = StatementService::build(&docs).expect("build");
    let b = StatementService::build(&shuffled).expect("build");

    assert_eq!(a.len(), docs.len());
    assert_eq!(
        a.last().map(|line| line.balance),
        b.last().map(|line| line.balance)
    );
    assert!(a.windows(2).all(|pair| pair[0].document.date <= pair[1].document.date));
}

#[test]
fn statement_does_not_mutate_input() {
    let docs = sample_documents(3, 10);
    let snapshot = docs.clone();
    let _ = StatementService::build(&docs).expect("build");
    assert_eq!(docs, snapshot);
}

#[test]
fn net_pay_formula_holds_including_negative_results() {
    let mut rows = sample_rows(5, 50);
    rows.push(PayrollRow {
        employee_id: "overdrawn".into(),
        basic_salary: 100_000,
        deductions_statutory: 60_000,
        deductions_other: 70_000,
        ..PayrollRow::default()
    });
    assert!(rows
        .iter()
        .any(|row| matches!(row.checked_net_pay(), Some(net) if net < 0)));
    for row in &rows {
        let expected = row.basic_salary + row.allowances + row.bonus + row.overtime
            - row.deductions_statutory
            - row.deductions_other;
        assert_eq!(PayrollService::net_pay(row), Ok(expected));
    }
}

#[test]
fn aggregate_over_everything_or_nothing() {
    let rows = sample_rows(9, 12);

    let all = PayrollService::aggregate_selected(&rows, &vec![true; rows.len()]).expect("all");
    let none = PayrollService::aggregate_selected(&rows, &vec![false; rows.len()]).expect("none");

    for field in PayrollField::ALL {
        let expected: i64 = rows.iter().map(|row| row.get(field)).sum();
        assert_eq!(all.get(field), expected, "{field}");
    }
    let expected_net: i64 = rows
        .iter()
        .map(|row| row.checked_net_pay().expect("net pay in range"))
        .sum();
    assert_eq!(all.net_pay, expected_net);
    assert_eq!(none, PayrollBatchTotals::default());
}

#[test]
fn aggregate_is_order_independent() {
    let rows = sample_rows(13, 8);
    let selection: PayrollSelection = ["emp-1", "emp-4", "emp-6"].into_iter().collect();
    let mut reversed = rows.clone();
    reversed.reverse();

    assert_eq!(
        PayrollService::aggregate(&rows, &selection).expect("forward"),
        PayrollService::aggregate(&reversed, &selection).expect("reversed")
    );
}

#[test]
fn computations_are_idempotent() {
    let docs = sample_documents(21, 30);
    let rows = sample_rows(21, 6);
    let reference = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let selection = PayrollSelection::all(&rows);

    assert_eq!(
        StatementService::build(&docs).expect("first"),
        StatementService::build(&docs).expect("second")
    );
    assert_eq!(
        AgingService::bucket(&docs, reference).expect("first"),
        AgingService::bucket(&docs, reference).expect("second")
    );
    assert_eq!(
        PayrollService::aggregate(&rows, &selection).expect("first"),
        PayrollService::aggregate(&rows, &selection).expect("second")
    );
    assert_eq!(tally_core::format(-1_234, "EUR"), tally_core::format(-1_234, "EUR"));
}
