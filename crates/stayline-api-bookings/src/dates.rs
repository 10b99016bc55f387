//! Stay date-range logic.
//!
//! Stays are half-open ranges: a booking occupies its room from
//! `check_in` (inclusive) to `check_out` (exclusive), so a guest checking
//! out on the same day another checks in is not a conflict.

use chrono::NaiveDate;

/// Check that a requested stay is a valid non-empty range.
#[must_use]
pub fn stay_is_valid(check_in: NaiveDate, check_out: NaiveDate) -> bool {
    check_in < check_out
}

/// Check whether two half-open stay ranges overlap.
///
/// Each range must start before the other ends.
#[must_use]
pub fn stays_overlap(
    a_check_in: NaiveDate,
    a_check_out: NaiveDate,
    b_check_in: NaiveDate,
    b_check_out: NaiveDate,
) -> bool {
    a_check_in < b_check_out && b_check_in < a_check_out
}

/// Expand stays into the sorted, deduplicated list of occupied dates.
///
/// Check-out days are not occupied.
#[must_use]
pub fn booked_dates(stays: &[(NaiveDate, NaiveDate)]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = stays
        .iter()
        .flat_map(|&(check_in, check_out)| {
            check_in
                .iter_days()
                .take_while(move |d| *d < check_out)
        })
        .collect();

    dates.sort_unstable();
    dates.dedup();
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn valid_stay_requires_positive_length() {
        assert!(stay_is_valid(d("2026-08-10"), d("2026-08-12")));
        assert!(!stay_is_valid(d("2026-08-10"), d("2026-08-10")));
        assert!(!stay_is_valid(d("2026-08-12"), d("2026-08-10")));
    }

    #[test]
    fn overlapping_stays_are_detected() {
        // Partial overlap on either side.
        assert!(stays_overlap(
            d("2026-08-10"),
            d("2026-08-14"),
            d("2026-08-12"),
            d("2026-08-16")
        ));
        assert!(stays_overlap(
            d("2026-08-12"),
            d("2026-08-16"),
            d("2026-08-10"),
            d("2026-08-14")
        ));
        // Containment.
        assert!(stays_overlap(
            d("2026-08-10"),
            d("2026-08-20"),
            d("2026-08-12"),
            d("2026-08-14")
        ));
        // Identical ranges.
        assert!(stays_overlap(
            d("2026-08-10"),
            d("2026-08-14"),
            d("2026-08-10"),
            d("2026-08-14")
        ));
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        // One guest checks out the day the next checks in.
        assert!(!stays_overlap(
            d("2026-08-10"),
            d("2026-08-14"),
            d("2026-08-14"),
            d("2026-08-18")
        ));
        assert!(!stays_overlap(
            d("2026-08-14"),
            d("2026-08-18"),
            d("2026-08-10"),
            d("2026-08-14")
        ));
    }

    #[test]
    fn disjoint_stays_do_not_overlap() {
        assert!(!stays_overlap(
            d("2026-08-10"),
            d("2026-08-12"),
            d("2026-08-20"),
            d("2026-08-22")
        ));
    }

    #[test]
    fn booked_dates_exclude_checkout_days() {
        let dates = booked_dates(&[(d("2026-08-10"), d("2026-08-13"))]);

        assert_eq!(
            dates,
            vec![d("2026-08-10"), d("2026-08-11"), d("2026-08-12")]
        );
    }

    #[test]
    fn booked_dates_merge_and_dedupe() {
        let dates = booked_dates(&[
            (d("2026-08-12"), d("2026-08-14")),
            (d("2026-08-10"), d("2026-08-13")),
        ]);

        assert_eq!(
            dates,
            vec![
                d("2026-08-10"),
                d("2026-08-11"),
                d("2026-08-12"),
                d("2026-08-13"),
            ]
        );
    }

    #[test]
    fn no_stays_means_no_booked_dates() {
        assert!(booked_dates(&[]).is_empty());
    }
}
