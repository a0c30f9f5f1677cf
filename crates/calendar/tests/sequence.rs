use claimcast_calendar::{MonthStart, month_sequence};

#[test]
fn six_years_of_months() {
    let start = MonthStart::new(2019, 1).unwrap();
    let dates = month_sequence(start, 72);
    assert_eq!(dates.len(), 72);

    assert_eq!(dates[0].to_string(), "2019-01-01");
    assert_eq!(dates[11].to_string(), "2019-12-01");
    assert_eq!(dates[12].to_string(), "2020-01-01");
    assert_eq!(dates[71].to_string(), "2024-12-01");
}

#[test]
fn months_cycle_one_to_twelve() {
    let start = MonthStart::new(2019, 4).unwrap();
    let dates = month_sequence(start, 36);
    for (i, d) in dates.iter().enumerate() {
        let expected = ((3 + i) % 12) as u8 + 1;
        assert_eq!(d.month(), expected, "index {i}");
    }
}

#[test]
fn consecutive_entries_are_one_month_apart() {
    let start = MonthStart::new(2018, 9).unwrap();
    let dates = month_sequence(start, 50);
    for pair in dates.windows(2) {
        assert_eq!(pair[0].months_until(pair[1]), 1);
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn length_always_matches() {
    let start = MonthStart::new(2019, 1).unwrap();
    for n in [0, 1, 12, 13, 72, 500] {
        let dates = month_sequence(start, n);
        assert_eq!(dates.len(), n, "expected length {n}, got {}", dates.len());
    }
}

#[test]
fn add_months_agrees_with_sequence() {
    let start = MonthStart::new(2023, 8).unwrap();
    let dates = month_sequence(start, 30);
    assert_eq!(start.add_months(29), *dates.last().unwrap());
}
