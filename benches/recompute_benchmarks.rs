//! Performance benchmarks for the Attendance Computation Engine.
//!
//! This benchmark suite tracks the cost of the two API operations:
//! - Recomputing one week for the bundled demo tenant
//! - Recomputing a month for 100 employees
//! - Summarizing a month for 100 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::models::{DateRange, Employee, PunchAction, PunchLogEntry};
use attendance_engine::stores::MemoryStore;

use axum::{body::Body, http::Request};
use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tower::ServiceExt;

const TENANT: &str = "tenant_default";

/// Creates a state seeded from the bundled demo configuration.
fn create_demo_state() -> AppState {
    let store = MemoryStore::new();
    ConfigLoader::new("./config/tenant_default")
        .seed(&store)
        .expect("Failed to load config");
    AppState::new(store)
}

/// Seeds `count` employees on the standard policy with punches on every
/// weekday of January 2026.
fn seed_workforce(state: &AppState, count: usize) {
    let employees: Vec<Employee> = (0..count)
        .map(|i| Employee {
            id: format!("emp_bench_{i:04}"),
            week_off: [true, false, false, false, false, false, true],
            shift_assignments: Default::default(),
            policy_id: Some("standard".to_string()),
            leave_balance: Decimal::ZERO,
        })
        .collect();

    let month = DateRange {
        start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    };
    let mut punches = Vec::new();
    for employee in &employees {
        for date in month.iter_days() {
            if matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun) {
                continue;
            }
            for (time, action) in [
                (NaiveTime::from_hms_opt(9, 5, 0).unwrap(), PunchAction::In),
                (NaiveTime::from_hms_opt(18, 10, 0).unwrap(), PunchAction::Out),
            ] {
                punches.push(PunchLogEntry {
                    employee_id: employee.id.clone(),
                    date,
                    timestamp: date.and_time(time),
                    action,
                    mode: "biometric".to_string(),
                });
            }
        }
    }

    state.store().seed_employees(TENANT, employees);
    state.store().seed_punches(TENANT, punches);
}

fn post_body(uri: &str, start: &str, end: &str) -> (String, String) {
    let body = serde_json::json!({
        "tenant_id": TENANT,
        "start_date": start,
        "end_date": end
    });
    (uri.to_string(), body.to_string())
}

async fn fire(state: AppState, uri: &str, body: String) -> axum::response::Response {
    create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Benchmark: recompute one week for the three demo employees.
fn bench_recompute_week(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_demo_state();
    let (uri, body) = post_body("/recompute", "2026-01-12", "2026-01-18");

    c.bench_function("recompute_week_demo_tenant", |b| {
        b.to_async(&rt).iter(|| {
            let state = state.clone();
            let body = body.clone();
            let uri = uri.clone();
            async move { black_box(fire(state, &uri, body).await) }
        })
    });
}

/// Benchmark: recompute a month for 100 employees.
fn bench_recompute_month_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_demo_state();
    seed_workforce(&state, 100);
    let (uri, body) = post_body("/recompute", "2026-01-01", "2026-01-31");

    let mut group = c.benchmark_group("recompute");
    group.throughput(Throughput::Elements(100));
    group.sample_size(10);
    group.bench_function("month_100_employees", |b| {
        b.to_async(&rt).iter(|| {
            let state = state.clone();
            let body = body.clone();
            let uri = uri.clone();
            async move { black_box(fire(state, &uri, body).await) }
        })
    });
    group.finish();
}

/// Benchmark: summarize a month for 100 employees with records present.
fn bench_summarize_month_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_demo_state();
    seed_workforce(&state, 100);

    // Populate records once; summarize is read-only.
    let (uri, body) = post_body("/recompute", "2026-01-01", "2026-01-31");
    rt.block_on(fire(state.clone(), &uri, body));

    let (uri, body) = post_body("/summarize", "2026-01-01", "2026-01-31");
    let mut group = c.benchmark_group("summarize");
    group.throughput(Throughput::Elements(100));
    group.sample_size(10);
    group.bench_function("month_100_employees", |b| {
        b.to_async(&rt).iter(|| {
            let state = state.clone();
            let body = body.clone();
            let uri = uri.clone();
            async move { black_box(fire(state, &uri, body).await) }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_recompute_week,
    bench_recompute_month_100,
    bench_summarize_month_100
);
criterion_main!(benches);
