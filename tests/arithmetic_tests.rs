use tarikh::{
    add_days, day_of_year, difference_in_days, difference_in_ymd, get_weekday_name,
    normalize_to_gregorian, CalendarType, DateDelta, DateParts,
};

#[test]
fn test_difference_in_days() {
    assert_eq!(
        difference_in_days(DateParts::new(2024, 3, 20), DateParts::new(2024, 3, 21)),
        1
    );
}

#[test]
fn test_add_days() {
    assert_eq!(
        add_days(DateParts::new(2024, 3, 20), 10),
        DateParts::new(2024, 3, 30)
    );
    assert_eq!(
        add_days(DateParts::new(2024, 3, 20), -80),
        DateParts::new(2023, 12, 31)
    );
}

#[test]
fn test_difference_in_ymd() {
    assert_eq!(
        difference_in_ymd(DateParts::new(2024, 3, 20), DateParts::new(2025, 4, 25)),
        DateDelta {
            years: 1,
            months: 1,
            days: 5,
        }
    );
}

#[test]
fn test_day_of_year_bounds() {
    assert_eq!(day_of_year(DateParts::new(2024, 1, 1)), 1);
    assert_eq!(day_of_year(DateParts::new(2024, 12, 31)), 366);
}

#[test]
fn test_weekday_name() {
    assert_eq!(get_weekday_name(DateParts::new(2024, 3, 20)), "چهارشنبه");
}

#[test]
fn test_add_then_difference_round_trip() {
    let start = DateParts::new(2024, 3, 20);
    for offset in [-1000, -366, -1, 0, 1, 59, 365, 10_000] {
        let moved = add_days(start, offset);
        assert_eq!(difference_in_days(start, moved), offset);
        assert_eq!(add_days(moved, -offset), start);
    }
}

#[test]
fn test_jalali_age_via_normalization() {
    // 1357/11/22 to 1403/1/1, measured on the Gregorian calendar
    let start = normalize_to_gregorian(DateParts::new(1357, 11, 22), CalendarType::Jalali).unwrap();
    let end = normalize_to_gregorian(DateParts::new(1403, 1, 1), CalendarType::Jalali).unwrap();
    assert_eq!(start, DateParts::new(1979, 2, 11));
    assert_eq!(
        difference_in_ymd(start, end),
        DateDelta {
            years: 45,
            months: 1,
            days: 9,
        }
    );
}

#[cfg(feature = "chrono")]
mod against_chrono {
    use chrono::{Datelike, Duration, NaiveDate};
    use tarikh::{add_days, day_of_year, difference_in_days, weekday_index, DateParts};

    fn dates() -> impl Iterator<Item = NaiveDate> {
        let start = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
        (0..3_652_059).step_by(97).map(move |n| start + Duration::days(n))
    }

    #[test]
    fn test_add_days_matches_chrono() {
        for naive in dates() {
            for offset in [-400, -31, -1, 1, 29, 365, 1461] {
                let expected = naive + Duration::days(offset);
                if expected.year() < 1 {
                    continue;
                }
                assert_eq!(
                    add_days(DateParts::from(naive), offset as i32),
                    DateParts::from(expected),
                    "{} + {}",
                    naive,
                    offset
                );
            }
        }
    }

    #[test]
    fn test_ordinal_and_weekday_match_chrono() {
        for naive in dates() {
            let date = DateParts::from(naive);
            assert_eq!(day_of_year(date), naive.ordinal(), "{}", naive);
            assert_eq!(
                weekday_index(date),
                naive.weekday().num_days_from_sunday(),
                "{}",
                naive
            );
        }
    }

    #[test]
    fn test_difference_matches_chrono() {
        let origin = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        for naive in dates() {
            assert_eq!(
                difference_in_days(DateParts::from(origin), DateParts::from(naive)) as i64,
                (naive - origin).num_days()
            );
        }
    }
}

#[test]
fn test_difference_in_ymd_keeps_negative_days_after_single_borrow() {
    // borrowing February 2024 (29 days) is not enough for 31 -> 1
    assert_eq!(
        difference_in_ymd(DateParts::new(2024, 1, 31), DateParts::new(2024, 3, 1)),
        DateDelta {
            years: 0,
            months: 1,
            days: -1,
        }
    );
}

#[test]
fn test_difference_in_ymd_end_before_start() {
    assert_eq!(
        difference_in_ymd(DateParts::new(2024, 3, 20), DateParts::new(2024, 3, 10)),
        DateDelta {
            years: -1,
            months: 11,
            days: 19,
        }
    );
    assert_eq!(
        difference_in_ymd(DateParts::new(2024, 3, 20), DateParts::new(2023, 1, 10)),
        DateDelta {
            years: -2,
            months: 9,
            days: 21,
        }
    );
}
