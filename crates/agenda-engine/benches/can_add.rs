use agenda_engine::{can_add_appointment, find_conflicting_appointments, Appointment};
use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A full day of back-to-back 15-minute appointments.
fn booked_day() -> Vec<Appointment> {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    (0..96)
        .map(|i| {
            let s = start + Duration::minutes(15 * i);
            Appointment::new(i as u64, s, s + Duration::minutes(15), "", i as u64)
        })
        .collect()
}

fn bench_can_add(c: &mut Criterion) {
    let existing = booked_day();
    let day_end = existing[existing.len() - 1].end;
    let after_hours = Appointment::new(999, day_end, day_end + Duration::hours(1), "", 1);
    let first_slot = existing[0].clone();

    c.bench_function("can_add_full_scan", |b| {
        b.iter(|| can_add_appointment(black_box(&after_hours), black_box(&existing)))
    });
    c.bench_function("can_add_early_conflict", |b| {
        b.iter(|| can_add_appointment(black_box(&first_slot), black_box(&existing)))
    });
    c.bench_function("find_conflicts_full_day", |b| {
        b.iter(|| find_conflicting_appointments(black_box(&first_slot), black_box(&existing)))
    });
}

criterion_group!(benches, bench_can_add);
criterion_main!(benches);
