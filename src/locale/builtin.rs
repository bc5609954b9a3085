//! Built-in locale data.

use crate::date::CalendarType;
use crate::error::ErrorCode;

/// Names and messages presented to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Indexed 0 = Sunday .. 6 = Saturday.
    pub weekday_names: [&'static str; 7],
    pub jalali_month_names: [&'static str; 12],
    pub gregorian_month_names: [&'static str; 12],
    pub islamic_month_names: [&'static str; 12],
    pub invalid_jalali_date: &'static str,
    pub invalid_gregorian_date: &'static str,
    pub invalid_islamic_date: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::fa_ir()
    }
}

impl Locale {
    /// Persian (Iran) locale.
    pub fn fa_ir() -> Self {
        Locale {
            weekday_names: [
                "یکشنبه",
                "دوشنبه",
                "سه‌شنبه",
                "چهارشنبه",
                "پنجشنبه",
                "جمعه",
                "شنبه",
            ],
            jalali_month_names: [
                "فروردین",
                "اردیبهشت",
                "خرداد",
                "تیر",
                "مرداد",
                "شهریور",
                "مهر",
                "آبان",
                "آذر",
                "دی",
                "بهمن",
                "اسفند",
            ],
            gregorian_month_names: [
                "ژانویه",
                "فوریه",
                "مارس",
                "آوریل",
                "مه",
                "ژوئن",
                "ژوئیه",
                "اوت",
                "سپتامبر",
                "اکتبر",
                "نوامبر",
                "دسامبر",
            ],
            islamic_month_names: [
                "محرم",
                "صفر",
                "ربیع‌الاول",
                "ربیع‌الثانی",
                "جمادی‌الاول",
                "جمادی‌الثانی",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذی‌القعده",
                "ذی‌الحجه",
            ],
            invalid_jalali_date: "تاریخ شمسی وارد شده معتبر نیست",
            invalid_gregorian_date: "تاریخ میلادی وارد شده معتبر نیست",
            invalid_islamic_date: "تاریخ قمری وارد شده معتبر نیست",
        }
    }

    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            weekday_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            jalali_month_names: [
                "Farvardin",
                "Ordibehesht",
                "Khordad",
                "Tir",
                "Mordad",
                "Shahrivar",
                "Mehr",
                "Aban",
                "Azar",
                "Dey",
                "Bahman",
                "Esfand",
            ],
            gregorian_month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            islamic_month_names: [
                "Muharram",
                "Safar",
                "Rabi al-Awwal",
                "Rabi al-Thani",
                "Jumada al-Awwal",
                "Jumada al-Thani",
                "Rajab",
                "Shaban",
                "Ramadan",
                "Shawwal",
                "Dhu al-Qadah",
                "Dhu al-Hijjah",
            ],
            invalid_jalali_date: "The Jalali date is not valid",
            invalid_gregorian_date: "The Gregorian date is not valid",
            invalid_islamic_date: "The Islamic date is not valid",
        }
    }

    /// Month name in `calendar`, or `None` for a month outside 1-12.
    pub fn month_name(&self, calendar: CalendarType, month: u32) -> Option<&'static str> {
        let names = match calendar {
            CalendarType::Jalali => &self.jalali_month_names,
            CalendarType::Gregorian => &self.gregorian_month_names,
            CalendarType::Islamic => &self.islamic_month_names,
        };
        month
            .checked_sub(1)
            .and_then(|i| names.get(i as usize))
            .copied()
    }

    pub(crate) fn error_message(&self, code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::InvalidJalaliDate => self.invalid_jalali_date,
            ErrorCode::InvalidGregorianDate => self.invalid_gregorian_date,
            ErrorCode::InvalidIslamicDate => self.invalid_islamic_date,
        }
    }
}
