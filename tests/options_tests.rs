use tarikh::{month_name, CalendarOptions, CalendarType, IslamicYearOffsets, Locale};

#[test]
fn test_default_options() {
    let opts = CalendarOptions::default();
    assert_eq!(opts.islamic_offsets, IslamicYearOffsets::builtin());
    assert_eq!(opts.locale, Locale::fa_ir());
}

#[test]
fn test_month_names() {
    assert_eq!(month_name(CalendarType::Jalali, 1), Some("فروردین"));
    assert_eq!(month_name(CalendarType::Islamic, 12), Some("ذی‌الحجه"));
    assert_eq!(month_name(CalendarType::Gregorian, 0), None);
}

#[cfg(feature = "serde")]
mod serde_support {
    use tarikh::{
        list_jalali_holidays, CalendarType, DateDelta, DateParts, IslamicYearOffsets,
    };

    #[test]
    fn test_offsets_from_json_map() {
        let offsets: IslamicYearOffsets =
            serde_json::from_str(r#"{"1446": 1, "1447": -1}"#).unwrap();
        assert_eq!(offsets.get(1446), 1);
        assert_eq!(offsets.get(1447), -1);
        assert_eq!(offsets.get(1448), 0);
    }

    #[test]
    fn test_date_parts_json() {
        let json = serde_json::to_string(&DateParts::new(1403, 1, 1)).unwrap();
        assert_eq!(json, r#"{"year":1403,"month":1,"day":1}"#);
        let back: DateParts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DateParts::new(1403, 1, 1));
    }

    #[test]
    fn test_holiday_result_uses_type_key() {
        let holidays = list_jalali_holidays(1403);
        let value = serde_json::to_value(holidays[0]).unwrap();
        assert_eq!(value["title"], "نوروز");
        assert_eq!(value["type"], "Official");
        assert_eq!(value["year"], 1403);
    }

    #[test]
    fn test_enums_and_delta() {
        assert_eq!(
            serde_json::to_string(&CalendarType::Jalali).unwrap(),
            r#""Jalali""#
        );
        let delta: DateDelta =
            serde_json::from_str(r#"{"years":1,"months":2,"days":3}"#).unwrap();
        assert_eq!(delta.months, 2);
    }
}
