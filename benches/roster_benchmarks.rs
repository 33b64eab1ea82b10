//! Performance benchmarks for the Roster Engine.
//!
//! Covers the operations that touch the whole roster:
//! - Recomputing the filtered view after a filter change
//! - Executing a ranged leave command (copy, replace, recompute)
//! - Parsing a full add command
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use roster_engine::commands::{AddLeaveCommand, Command, Index};
use roster_engine::config::EngineConfig;
use roster_engine::models::{AnnualLeave, Attendance, Employee};
use roster_engine::parser::parse_command;
use roster_engine::roster::{EmployeePredicate, Roster};

const LAST_NAMES: &[&str] = &["Bee", "Choo", "Kurz", "Meier", "Tan"];

/// Creates a roster of `size` employees with distinct names.
fn create_roster(size: usize) -> Roster {
    let employees = (0..size)
        .map(|i| Employee {
            name: format!("Employee{} {}", i, LAST_NAMES[i % LAST_NAMES.len()])
                .parse()
                .unwrap(),
            phone: "91234567".parse().unwrap(),
            email: format!("employee{i}@example.com").parse().unwrap(),
            address: "Block 1, Some Street".parse().unwrap(),
            bank_account: "12345678".parse().unwrap(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            salary: "3000.00".parse().unwrap(),
            annual_leave: AnnualLeave::new(14),
            attendance: Attendance::new(),
        })
        .collect();
    Roster::from_employees(employees)
}

fn bench_set_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_filter");

    for size in [100_usize, 1_000, 10_000] {
        let mut roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), &size, |b, _| {
            b.iter(|| {
                roster.set_filter(EmployeePredicate::name_keywords("meier"));
                black_box(roster.filtered_len())
            })
        });
    }

    group.finish();
}

fn bench_add_leave_range(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
    let command = Command::AddLeave(AddLeaveCommand::range(Index::from_zero_based(0), start, end));
    let roster = create_roster(1_000);

    c.bench_function("add_leave_range_14_days", |b| {
        b.iter(|| {
            let mut roster = roster.clone();
            black_box(command.execute(&mut roster).unwrap())
        })
    });
}

fn bench_parse_add(c: &mut Criterion) {
    let config = EngineConfig::default();
    let input = "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 \
                 b/1234567890234 jd/10/05/2003 s/4000.00 al/4";

    c.bench_function("parse_add_command", |b| {
        b.iter(|| black_box(parse_command(black_box(input), &config).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_set_filter,
    bench_add_leave_range,
    bench_parse_add,
);
criterion_main!(benches);
