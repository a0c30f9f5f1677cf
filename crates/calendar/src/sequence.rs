//! Monthly sequence generation.

use crate::month::MonthStart;

/// Generates a contiguous sequence of first-of-month dates.
///
/// Starting from `start`, produces exactly `n_months` consecutive months by
/// repeatedly stepping with [`MonthStart::next`].
///
/// # Example
///
/// ```ignore
/// let start = MonthStart::new(2019, 11).unwrap();
/// let dates = month_sequence(start, 3);
/// // 2019-11-01, 2019-12-01, 2020-01-01
/// ```
pub fn month_sequence(start: MonthStart, n_months: usize) -> Vec<MonthStart> {
    let mut dates = Vec::with_capacity(n_months);
    if n_months == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_months {
        current = current.next();
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = MonthStart::new(2019, 1).unwrap();
        assert!(month_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = MonthStart::new(2019, 6).unwrap();
        let dates = month_sequence(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn year_transition() {
        let start = MonthStart::new(2019, 11).unwrap();
        let dates = month_sequence(start, 4);
        assert_eq!(dates[0], MonthStart::new(2019, 11).unwrap());
        assert_eq!(dates[1], MonthStart::new(2019, 12).unwrap());
        assert_eq!(dates[2], MonthStart::new(2020, 1).unwrap());
        assert_eq!(dates[3], MonthStart::new(2020, 2).unwrap());
    }
}
