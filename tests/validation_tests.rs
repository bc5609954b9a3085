use tarikh::{
    days_in_jalali_month, is_leap_gregorian, is_leap_islamic, is_leap_jalali, is_leap_year,
    is_valid_date, is_valid_gregorian_date, is_valid_islamic_date, is_valid_jalali_date,
    jalali_calendar, try_is_leap_jalali, CalendarType, DateParts, JALALI_BREAKS,
};

#[test]
fn test_jalali_leap_years() {
    assert!(is_leap_jalali(1399));
    assert!(!is_leap_jalali(1400));
    assert!(is_leap_jalali(1403));
    assert!(!is_leap_jalali(1404));
}

#[test]
fn test_gregorian_leap_day_validity() {
    assert!(is_valid_gregorian_date(DateParts::new(2024, 2, 29)));
    assert!(!is_valid_gregorian_date(DateParts::new(2023, 2, 29)));
}

#[test]
fn test_jalali_esfand_30_requires_leap() {
    assert!(!is_valid_jalali_date(DateParts::new(1401, 12, 30)));
    assert!(is_valid_jalali_date(DateParts::new(1399, 12, 30)));
}

#[test]
fn test_jalali_leap_years_are_spaced_four_or_five_apart() {
    let leaps: Vec<i32> = (1..3177).filter(|&y| is_leap_jalali(y)).collect();
    for pair in leaps.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap == 4 || gap == 5, "gap {} between {} and {}", gap, pair[0], pair[1]);
    }
}

#[test]
fn test_jalali_year_lengths_match_leap_flag() {
    use tarikh::jalali_to_gregorian;
    use tarikh::gregorian_to_jdn;
    for year in 1200..1600 {
        let start = gregorian_to_jdn(jalali_to_gregorian(DateParts::new(year, 1, 1)));
        let next = gregorian_to_jdn(jalali_to_gregorian(DateParts::new(year + 1, 1, 1)));
        let expected = if is_leap_jalali(year) { 366 } else { 365 };
        assert_eq!(next - start, expected, "length of Jalali year {}", year);
        assert_eq!(
            days_in_jalali_month(year, 12),
            if is_leap_jalali(year) { 30 } else { 29 }
        );
    }
}

#[test]
fn test_break_point_domain() {
    assert!(try_is_leap_jalali(JALALI_BREAKS[0]).is_ok());
    assert!(try_is_leap_jalali(JALALI_BREAKS[0] - 1).is_err());
    assert!(try_is_leap_jalali(JALALI_BREAKS[19] - 1).is_ok());
    assert!(try_is_leap_jalali(JALALI_BREAKS[19]).is_err());
    assert_eq!(jalali_calendar(1403).map(|y| y.gregorian_year), Ok(2024));
    assert_eq!(jalali_calendar(1403).map(|y| y.march_day), Ok(20));
}

#[test]
#[should_panic]
fn test_jalali_leap_below_table_panics() {
    is_leap_jalali(-62);
}

#[test]
fn test_validators_never_panic_on_wild_input() {
    for &year in &[i32::MIN / 2, -10_000, -62, 0, 3178, 10_000, i32::MAX / 2] {
        for month in [0, 1, 12, 13] {
            for day in [0, 1, 29, 30, 31, 32] {
                let date = DateParts::new(year, month, day);
                for calendar in CalendarType::all() {
                    let _ = is_valid_date(date, calendar);
                }
            }
        }
    }
}

#[test]
fn test_islamic_validity() {
    assert!(is_valid_islamic_date(DateParts::new(1445, 12, 30)));
    assert!(!is_valid_islamic_date(DateParts::new(1446, 12, 30)));
    assert!(is_valid_islamic_date(DateParts::new(9666, 1, 1)));
    assert!(!is_valid_islamic_date(DateParts::new(0, 1, 1)));
}

#[test]
fn test_leap_year_dispatch() {
    assert_eq!(is_leap_year(2024, CalendarType::Gregorian), is_leap_gregorian(2024));
    assert_eq!(is_leap_year(1445, CalendarType::Islamic), is_leap_islamic(1445));
    assert_eq!(is_leap_year(1399, CalendarType::Jalali), is_leap_jalali(1399));
}
