use chrono::{NaiveDate, NaiveDateTime};

/// Mean synodic month in days (new moon to new moon).
pub const SYNODIC_MONTH: f64 = 29.530588853;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Reference new moon: 2000-01-06 18:14 UTC.
fn reference_new_moon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 6)
        .and_then(|d| d.and_hms_opt(18, 14, 0))
        .expect("reference epoch is a valid timestamp")
}

/// Fraction of the synodic month elapsed at the given instant.
///
/// 0 is new moon, 0.5 is full moon, and the value wraps back to 0 at the
/// next new moon. Dates before the reference epoch normalize into [0,1)
/// through the Euclidean remainder.
pub fn phase_fraction_at(at: NaiveDateTime) -> f64 {
    let elapsed_days =
        at.signed_duration_since(reference_new_moon()).num_seconds() as f64 / SECONDS_PER_DAY;
    let age = elapsed_days.rem_euclid(SYNODIC_MONTH);
    age / SYNODIC_MONTH
}

/// Phase fraction for a calendar date, taken at local midnight.
pub fn phase_fraction(date: NaiveDate) -> f64 {
    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    phase_fraction_at(midnight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fraction_stays_in_unit_interval() {
        let start = date(1969, 7, 20);
        for offset in 0..800 {
            let f = phase_fraction(start + Duration::days(offset));
            assert!((0.0..1.0).contains(&f), "day offset {} gave {}", offset, f);
        }
    }

    #[test]
    fn epoch_is_a_new_moon() {
        let f = phase_fraction_at(reference_new_moon());
        assert!(f.abs() < 1e-9, "got {}", f);
    }

    #[test]
    fn known_full_moon_lands_mid_cycle() {
        // 2024-01-25 was a full moon; midnight that day should sit near 0.5.
        let f = phase_fraction(date(2024, 1, 25));
        assert!((f - 0.5).abs() < 0.05, "got {}", f);
    }

    #[test]
    fn known_new_moon_lands_near_wrap() {
        // 2024-01-11 was a new moon.
        let f = phase_fraction(date(2024, 1, 11));
        assert!(f < 0.05 || f > 0.95, "got {}", f);
    }

    #[test]
    fn periodic_over_one_synodic_month() {
        let month = Duration::seconds((SYNODIC_MONTH * SECONDS_PER_DAY).round() as i64);
        for &(y, m, d) in &[(2024, 1, 1), (1999, 12, 31), (2030, 6, 15)] {
            let at = date(y, m, d).and_hms_opt(12, 0, 0).unwrap();
            let a = phase_fraction_at(at);
            let b = phase_fraction_at(at + month);
            let diff = (a - b).abs();
            let wrapped = diff.min(1.0 - diff);
            assert!(wrapped < 1e-5, "{}-{}-{}: {} vs {}", y, m, d, a, b);
        }
    }

    #[test]
    fn pre_epoch_dates_normalize() {
        let f = phase_fraction(date(1988, 3, 1));
        assert!((0.0..1.0).contains(&f), "got {}", f);
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let d = date(2025, 8, 30);
        assert_eq!(phase_fraction(d), phase_fraction(d));
    }
}
