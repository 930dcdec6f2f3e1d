//! Marathi names for Gregorian months, weekdays and the lunar months (मास)
//! overlapping each Gregorian month.

use chrono::Month;

use crate::dataset::is_covered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    pub name: &'static str,
    pub marathi_name: &'static str,
}

/// Lunar month change within a Gregorian month. `day` is the first day of
/// the `next` lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub day: u32,
    pub prev: &'static str,
    pub next: &'static str,
}

pub const WEEKDAYS: [&str; 7] = ["रवि", "सोम", "मंगळ", "बुध", "गुरू", "शुक्र", "शनि"];

const MONTHS: [MonthInfo; 12] = [
    MonthInfo { name: "जानेवारी", marathi_name: "पौष / माघ" },
    MonthInfo { name: "फेब्रुवारी", marathi_name: "माघ / फाल्गुन" },
    MonthInfo { name: "मार्च", marathi_name: "फाल्गुन / चैत्र" },
    MonthInfo { name: "एप्रिल", marathi_name: "चैत्र / वैशाख" },
    MonthInfo { name: "मे", marathi_name: "वैशाख / अधिक ज्येष्ठ" },
    MonthInfo { name: "जून", marathi_name: "अधिक ज्येष्ठ / निज ज्येष्ठ" },
    MonthInfo { name: "जुलै", marathi_name: "निज ज्येष्ठ / आषाढ" },
    MonthInfo { name: "ऑगस्ट", marathi_name: "आषाढ / श्रावण" },
    MonthInfo { name: "सप्टेंबर", marathi_name: "श्रावण / भाद्रपद" },
    MonthInfo { name: "ऑक्टोबर", marathi_name: "भाद्रपद / अश्विन" },
    MonthInfo { name: "नोव्हेंबर", marathi_name: "अश्विन / कार्तिक" },
    MonthInfo { name: "डिसेंबर", marathi_name: "कार्तिक / मार्गशीर्ष" },
];

// 2026 only. May and June straddle the intercalary (अधिक) ज्येष्ठ.
const TRANSITIONS: [Transition; 12] = [
    Transition { day: 19, prev: "पौष", next: "माघ" },
    Transition { day: 18, prev: "माघ", next: "फाल्गुन" },
    Transition { day: 19, prev: "फाल्गुन", next: "चैत्र" },
    Transition { day: 18, prev: "चैत्र", next: "वैशाख" },
    Transition { day: 17, prev: "वैशाख", next: "अ. ज्येष्ठ" },
    Transition { day: 16, prev: "अ. ज्येष्ठ", next: "नि. ज्येष्ठ" },
    Transition { day: 15, prev: "नि. ज्येष्ठ", next: "आषाढ" },
    Transition { day: 13, prev: "आषाढ", next: "श्रावण" },
    Transition { day: 12, prev: "श्रावण", next: "भाद्रपद" },
    Transition { day: 10, prev: "भाद्रपद", next: "अश्विन" },
    Transition { day: 10, prev: "अश्विन", next: "कार्तिक" },
    Transition { day: 9, prev: "कार्तिक", next: "मार्गशीर्ष" },
];

fn index(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

pub fn month_info(month: Month) -> &'static MonthInfo {
    &MONTHS[index(month)]
}

pub fn transition(month: Month) -> &'static Transition {
    &TRANSITIONS[index(month)]
}

/// The lunar month a Gregorian day falls into, `None` outside the covered
/// year. The transition day itself already belongs to the next lunar month.
pub fn lunar_month_name(month: Month, day: u32, year: i32) -> Option<&'static str> {
    if !is_covered(year) {
        return None;
    }

    let t = transition(month);
    Some(if day < t.day { t.prev } else { t.next })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    fn months() -> impl Iterator<Item = Month> {
        (1..=12).filter_map(Month::from_u32)
    }

    #[test]
    fn january_switches_on_the_19th() {
        assert_eq!(lunar_month_name(Month::January, 18, 2026), Some("पौष"));
        assert_eq!(lunar_month_name(Month::January, 19, 2026), Some("माघ"));
    }

    #[test]
    fn threshold_day_belongs_to_next() {
        for month in months() {
            let t = transition(month);
            assert_eq!(lunar_month_name(month, t.day - 1, 2026), Some(t.prev));
            assert_eq!(lunar_month_name(month, t.day, 2026), Some(t.next));
            assert_eq!(lunar_month_name(month, 1, 2026), Some(t.prev));
            assert_eq!(lunar_month_name(month, 31, 2026), Some(t.next));
        }
    }

    #[test]
    fn other_years_have_no_lunar_month() {
        for year in [2024, 2025, 2027] {
            for month in months() {
                for day in 1..=31 {
                    assert_eq!(lunar_month_name(month, day, year), None);
                }
            }
        }
    }

    #[test]
    fn consecutive_months_chain() {
        let all: Vec<_> = months().map(transition).collect();
        for pair in all.windows(2) {
            assert_eq!(pair[0].next, pair[1].prev);
        }
    }

    #[test]
    fn month_names() {
        assert_eq!(month_info(Month::January).name, "जानेवारी");
        assert_eq!(month_info(Month::December).marathi_name, "कार्तिक / मार्गशीर्ष");
        assert_eq!(WEEKDAYS[0], "रवि");
        assert_eq!(WEEKDAYS[4], "गुरू");
    }
}
