//! Integration tests for the monthly series invariants.

use claimcast_calendar::{MonthStart, month_sequence};
use claimcast_series::{MonthlySeries, SeriesError};

#[test]
fn single_observation_is_valid() {
    let start = MonthStart::new(2019, 1).unwrap();
    let s = MonthlySeries::new(vec![start], vec![0.0]).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.first_date(), s.last_date());
}

#[test]
fn new_and_from_start_agree() {
    let start = MonthStart::new(2020, 6).unwrap();
    let values: Vec<f64> = (0..30).map(|i| i as f64 * 10.0).collect();
    let a = MonthlySeries::new(month_sequence(start, 30), values.clone()).unwrap();
    let b = MonthlySeries::from_start(start, values).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_violation_is_listed() {
    let d = |y, m| MonthStart::new(y, m).unwrap();
    let dates = vec![d(2019, 1), d(2019, 1), d(2019, 5), d(2019, 4)];
    let values = vec![1.0, 2.0, f64::INFINITY, 3.0];
    let err = MonthlySeries::new(dates, values).unwrap_err();
    match err {
        SeriesError::Validation { count, details } => {
            // duplicate, gap, out-of-order, non-finite
            assert_eq!(count, 4, "details: {details}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
