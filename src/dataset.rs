//! Static festival and holiday data.
//!
//! The table below is only valid for [`COVERED_YEAR`]. Every query for another
//! year yields "no data" instead of extrapolating.

use chrono::Month;
use derive_more::Constructor;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The only year the static tables describe.
pub const COVERED_YEAR: i32 = 2026;

/// Whether the static event and lunar tables hold data for `year`.
pub fn is_covered(year: i32) -> bool {
    year == COVERED_YEAR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: &'static str,
    pub is_holiday: bool,
    pub description: Option<&'static str>,
}

impl CalendarEvent {
    const fn new(title: &'static str, is_holiday: bool) -> Self {
        CalendarEvent {
            title,
            is_holiday,
            description: None,
        }
    }

    const fn with_description(
        title: &'static str,
        is_holiday: bool,
        description: &'static str,
    ) -> Self {
        CalendarEvent {
            title,
            is_holiday,
            description: Some(description),
        }
    }

    /// Title up to the first `" / "`, short enough for a grid cell.
    pub fn short_title(&self) -> &'static str {
        self.title.split(" / ").next().unwrap_or(self.title)
    }
}

/// A festival entry of a month, as listed below the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct Festival {
    pub day: u32,
    pub event: &'static CalendarEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct DayKey {
    month0: u32,
    day: u32,
}

impl DayKey {
    fn new(month: Month, day: u32) -> Self {
        DayKey {
            month0: month.number_from_month() - 1,
            day,
        }
    }
}

type EventTable = BTreeMap<DayKey, Vec<CalendarEvent>>;

static EVENTS: Lazy<EventTable> = Lazy::new(|| {
    let mut table = EventTable::new();
    for &(month0, day, event) in EVENT_DATA {
        table
            .entry(DayKey { month0, day })
            .or_insert_with(Vec::new)
            .push(event);
    }
    log::debug!("Loaded {} event days for {}", table.len(), COVERED_YEAR);
    table
});

/// All events on the given day, empty for uncovered years.
pub fn events_for(month: Month, day: u32, year: i32) -> &'static [CalendarEvent] {
    if !is_covered(year) {
        return &[];
    }

    EVENTS
        .get(&DayKey::new(month, day))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The event on the given day, if there is one and `year` is covered.
pub fn event_for(month: Month, day: u32, year: i32) -> Option<&'static CalendarEvent> {
    events_for(month, day, year).first()
}

/// Every event of the month, ordered by day.
pub fn festivals_of_month(month: Month, year: i32) -> Vec<Festival> {
    if !is_covered(year) {
        return Vec::new();
    }

    let begin = DayKey::new(month, 1);
    let end = DayKey::new(month, 31);

    EVENTS
        .range(begin..=end)
        .flat_map(|(key, events)| events.iter().map(move |event| Festival::new(key.day, event)))
        .collect()
}

const EVENT_DATA: &[(u32, u32, CalendarEvent)] = &[
    // January
    (0, 1, CalendarEvent::new("नवीन वर्ष / भगवानबाबा पुण्यतिथी", false)),
    (0, 2, CalendarEvent::new("अप्पा महाराज पुण्यतिथी", false)),
    (0, 3, CalendarEvent::new("सावित्रीबाई फुले जयंती", false)),
    (0, 6, CalendarEvent::new("पत्रकार दिन", false)),
    (0, 11, CalendarEvent::new("भाऊसाहेब महाराज पुण्यतिथी", false)),
    (0, 12, CalendarEvent::new("स्वामी विवेकानंद / जिजाऊ मासाहेब जयंती", false)),
    (0, 14, CalendarEvent::new("भोगि / षट्तिला एकादशी", false)),
    (0, 15, CalendarEvent::new("मकर संक्रांत", true)),
    (0, 16, CalendarEvent::new("महादेव महाराज पुण्यतिथी", false)),
    (0, 24, CalendarEvent::with_description("अंगारकी संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:१६")),
    (0, 26, CalendarEvent::new("प्रजासत्ताक दिन / रथसप्तमी", true)),
    (0, 29, CalendarEvent::new("जया एकादशी", false)),
    (0, 30, CalendarEvent::new("महात्मा गांधी पुण्यतिथी", false)),

    // February
    (1, 1, CalendarEvent::new("संत रोहिदास जयंती", false)),
    (1, 2, CalendarEvent::new("गोंदवलेकर महाराज पुण्यतिथी", false)),
    (1, 6, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:२७")),
    (1, 13, CalendarEvent::new("विजया एकादशी", false)),
    (1, 15, CalendarEvent::new("प्रदोष", false)),
    (1, 16, CalendarEvent::new("महाशिवरात्री", true)),
    (1, 17, CalendarEvent::new("संत गाडगे महाराज पुण्यतिथी", false)),
    (1, 19, CalendarEvent::new("छ. शिवाजी महाराज जयंती", true)),
    (1, 23, CalendarEvent::new("संत गाडगे महाराज जयंती", false)),
    (1, 26, CalendarEvent::new("स्वातंत्र्यवीर सावरकर पुण्यतिथी", false)),
    (1, 27, CalendarEvent::new("आमलकी एकादशी / मराठी राजभाषा दिन", false)),

    // March
    (2, 1, CalendarEvent::new("काशिनाथ महाराज पुण्यतिथी", false)),
    (2, 3, CalendarEvent::new("होळी पौर्णिमा", true)),
    (2, 4, CalendarEvent::new("धुलिवंदन", true)),
    (2, 7, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:१६")),
    (2, 8, CalendarEvent::new("जागतिक महिला दिन / संत तुकाराम बीज", false)),
    (2, 10, CalendarEvent::new("सावित्रीबाई फुले स्मृतीदिन", false)),
    (2, 12, CalendarEvent::new("यशवंतराव चव्हाण जयंती", false)),
    (2, 15, CalendarEvent::new("पापमोचनी एकादशी", false)),
    (2, 19, CalendarEvent::new("गुढीपाडवा (हिंदू नववर्ष)", true)),
    (2, 22, CalendarEvent::new("विनायक चतुर्थी", false)),
    (2, 27, CalendarEvent::new("श्री राम नवमी", true)),
    (2, 30, CalendarEvent::new("महावीर जयंती / कामदा एकादशी", true)),
    (2, 31, CalendarEvent::new("मेहेर बाबा पुण्यतिथी", false)),

    // April
    (3, 2, CalendarEvent::new("हनुमान जयंती", true)),
    (3, 5, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:४५")),
    (3, 7, CalendarEvent::new("जागतिक आरोग्य दिन", false)),
    (3, 11, CalendarEvent::new("महात्मा फुले जयंती", false)),
    (3, 13, CalendarEvent::new("वरुथिनी एकादशी", false)),
    (3, 14, CalendarEvent::new("डॉ. बाबासाहेब आंबेडकर जयंती", true)),
    (3, 18, CalendarEvent::new("महर्षी कर्वे जयंती", false)),
    (3, 21, CalendarEvent::new("अक्षय्य तृतीया / बसवेश्वर जयंती", true)),
    (3, 23, CalendarEvent::new("विनायक चतुर्थी / छत्रपती शिवाजी महाराज पुण्यतिथी", false)),
    (3, 29, CalendarEvent::new("मोहिनी एकादशी", false)),

    // May
    (4, 1, CalendarEvent::new("महाराष्ट्र दिन / कामगार दिन", true)),
    (4, 5, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय १०:१६")),
    (4, 8, CalendarEvent::new("रवींद्रनाथ टागोर जयंती", false)),
    (4, 13, CalendarEvent::new("अपरा एकादशी", false)),
    (4, 17, CalendarEvent::new("अधिक ज्येष्ठ मास प्रारंभ", false)),
    (4, 23, CalendarEvent::new("बुद्ध पौर्णिमा", true)),
    (4, 27, CalendarEvent::new("पंडित नेहरू पुण्यतिथी", false)),
    (4, 28, CalendarEvent::new("स्वातंत्र्यवीर सावरकर जयंती", false)),
    (4, 29, CalendarEvent::new("कमला एकादशी (अधिक)", false)),
    (4, 31, CalendarEvent::new("अहिल्यादेवी होळकर जयंती", false)),

    // June
    (5, 3, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:५०")),
    (5, 5, CalendarEvent::new("जागतिक पर्यावरण दिन", false)),
    (5, 6, CalendarEvent::new("शिवराज्याभिषेक दिन", false)),
    (5, 11, CalendarEvent::new("कमला एकादशी (अधिक)", false)),
    (5, 12, CalendarEvent::new("साने गुरुजी पुण्यतिथी", false)),
    (5, 14, CalendarEvent::new("निज ज्येष्ठ मास प्रारंभ", false)),
    (5, 17, CalendarEvent::new("राजमाता जिजाऊ पुण्यतिथी", false)),
    (5, 18, CalendarEvent::new("राणी लक्ष्मीबाई पुण्यतिथी", false)),
    (5, 21, CalendarEvent::new("वटपौर्णिमा", false)),
    (5, 27, CalendarEvent::new("निर्जला एकादशी", false)),

    // July
    (6, 1, CalendarEvent::new("वसंतराव नाईक जयंती", false)),
    (6, 3, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:४९")),
    (6, 11, CalendarEvent::new("योगिनी एकादशी", false)),
    (6, 26, CalendarEvent::new("आषाढी एकादशी (महाएकादशी)", true)),
    (6, 29, CalendarEvent::new("गुरुपौर्णिमा", false)),

    // August
    (7, 1, CalendarEvent::new("लोकमान्य टिळक पुण्यतिथी / अण्णाभाऊ साठे जयंती", false)),
    (7, 2, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:३३")),
    (7, 8, CalendarEvent::new("कामिका एकादशी", false)),
    (7, 15, CalendarEvent::new("स्वातंत्र्य दिन", true)),
    (7, 16, CalendarEvent::new("पतेती (पारशी नववर्ष)", false)),
    (7, 17, CalendarEvent::new("नागपंचमी", true)),
    (7, 23, CalendarEvent::new("पुत्रदा एकादशी", false)),
    (7, 27, CalendarEvent::new("नारळी पौर्णिमा / रक्षाबंधन", true)),
    (7, 31, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०९:०८")),

    // September
    (8, 4, CalendarEvent::new("श्रीकृष्ण जयंती (गोकुळाष्टमी)", true)),
    (8, 5, CalendarEvent::new("दहीहंडी / शिक्षक दिन", false)),
    (8, 7, CalendarEvent::new("अजा एकादशी", false)),
    (8, 14, CalendarEvent::new("श्री गणेश चतुर्थी", true)),
    (8, 16, CalendarEvent::new("ऋषी पंचमी", false)),
    (8, 17, CalendarEvent::new("गौरी आवाहन", false)),
    (8, 18, CalendarEvent::new("गौरी पूजन", false)),
    (8, 19, CalendarEvent::new("गौरी विसर्जन", false)),
    (8, 21, CalendarEvent::new("परिवर्तिनी एकादशी", false)),
    (8, 23, CalendarEvent::new("अनंत चतुर्दशी (गणेश विसर्जन)", true)),
    (8, 29, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०८:१७")),

    // October
    (9, 2, CalendarEvent::new("महात्मा गांधी जयंती", true)),
    (9, 7, CalendarEvent::new("इंदिरा एकादशी", false)),
    (9, 10, CalendarEvent::new("घटस्थापना (नवरात्र आरंभ)", true)),
    (9, 17, CalendarEvent::new("सरस्वती आवाहन", false)),
    (9, 18, CalendarEvent::new("सरस्वती पूजन", false)),
    (9, 19, CalendarEvent::new("दुर्गाष्टमी", false)),
    (9, 20, CalendarEvent::new("दसरा (विजयादशमी)", true)),
    (9, 21, CalendarEvent::new("पाशांकुशा एकादशी", false)),
    (9, 26, CalendarEvent::new("कोजागिरी पौर्णिमा", false)),
    (9, 29, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०८:४३")),
    (9, 31, CalendarEvent::new("राष्ट्रीय एकता दिवस (सरदार पटेल जयंती)", false)),

    // November
    (10, 5, CalendarEvent::new("रमा एकादशी", false)),
    (10, 8, CalendarEvent::new("नरक चतुर्दशी (दिवाळी)", true)),
    (10, 9, CalendarEvent::new("लक्ष्मीपूजन (दिवाळी)", true)),
    (10, 10, CalendarEvent::new("बलिप्रतिपदा / पाडवा (दिवाळी)", true)),
    (10, 11, CalendarEvent::new("भाऊबीज (दिवाळी)", true)),
    (10, 14, CalendarEvent::new("बाल दिन / पंडित नेहरू जयंती", false)),
    (10, 20, CalendarEvent::new("कार्तिकी एकादशी (प्रबोधिनी)", true)),
    (10, 24, CalendarEvent::new("गुरुनानक जयंती", true)),
    (10, 28, CalendarEvent::with_description("संकष्ट चतुर्थी / महात्मा फुले पुण्यतिथी", false, "चन्द्रोदय ०८:४५")),

    // December
    (11, 3, CalendarEvent::new("जागतिक अपंग दिन", false)),
    (11, 5, CalendarEvent::new("उत्पत्ती एकादशी", false)),
    (11, 6, CalendarEvent::new("डॉ. आंबेडकर महापरिनिर्वाण दिन", false)),
    (11, 15, CalendarEvent::new("सर्दार पटेल पुण्यतिथी", false)),
    (11, 19, CalendarEvent::new("मोक्षदा एकादशी / गीता जयंती", false)),
    (11, 20, CalendarEvent::new("संत गाडगे महाराज पुण्यतिथी", false)),
    (11, 25, CalendarEvent::new("ख्रिसमस (नाताळ)", true)),
    (11, 27, CalendarEvent::with_description("संकष्ट चतुर्थी", false, "चन्द्रोदय ०८:५०")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    fn months() -> impl Iterator<Item = Month> {
        (1..=12).filter_map(Month::from_u32)
    }

    #[test]
    fn makar_sankranti_is_a_holiday() {
        let event = event_for(Month::January, 15, 2026).expect("event on 15 January");
        assert_eq!(event.title, "मकर संक्रांत");
        assert!(event.is_holiday);
        assert_eq!(event.description, None);
    }

    #[test]
    fn description_is_kept() {
        let event = event_for(Month::January, 24, 2026).expect("event on 24 January");
        assert_eq!(event.description, Some("चन्द्रोदय ०९:१६"));
    }

    #[test]
    fn other_years_have_no_data() {
        for year in [1900, 2000, 2025, 2027, 2100] {
            for month in months() {
                for day in 1..=31 {
                    assert!(event_for(month, day, year).is_none());
                    assert!(events_for(month, day, year).is_empty());
                }
                assert!(festivals_of_month(month, year).is_empty());
            }
        }
    }

    #[test]
    fn lookup_matches_table_exactly() {
        for month in months() {
            for day in 1..=31 {
                let month0 = month.number_from_month() - 1;
                let expected = EVENT_DATA
                    .iter()
                    .find(|(m, d, _)| *m == month0 && *d == day)
                    .map(|(_, _, event)| event);
                assert_eq!(event_for(month, day, 2026), expected);
            }
        }
    }

    #[test]
    fn days_without_entry_are_empty() {
        assert!(event_for(Month::January, 4, 2026).is_none());
        assert!(event_for(Month::July, 31, 2026).is_none());
    }

    #[test]
    fn festivals_are_sorted_by_day() {
        for month in months() {
            let festivals = festivals_of_month(month, 2026);
            assert!(!festivals.is_empty());
            assert!(festivals.windows(2).all(|w| w[0].day < w[1].day));
        }

        let january = festivals_of_month(Month::January, 2026);
        assert_eq!(january.len(), 13);
        assert_eq!(january[0].day, 1);
        assert_eq!(january[12].day, 30);
    }

    #[test]
    fn festivals_do_not_leak_into_neighbour_months() {
        let october = festivals_of_month(Month::October, 2026);
        assert_eq!(october.last().map(|f| f.day), Some(31));
        let november = festivals_of_month(Month::November, 2026);
        assert_eq!(november.first().map(|f| f.day), Some(5));
    }

    #[test]
    fn short_title_cuts_at_separator() {
        let event = event_for(Month::January, 26, 2026).expect("event on 26 January");
        assert_eq!(event.short_title(), "प्रजासत्ताक दिन");

        let event = event_for(Month::January, 15, 2026).expect("event on 15 January");
        assert_eq!(event.short_title(), "मकर संक्रांत");
    }

    #[test]
    fn table_has_every_entry_once() {
        assert_eq!(EVENT_DATA.len(), 120);
        let total: usize = EVENTS.values().map(Vec::len).sum();
        assert_eq!(total, EVENT_DATA.len());
        assert_eq!(EVENTS.len(), EVENT_DATA.len());
    }
}
