use chrono::{Days, NaiveDate};

/// Accepted input formats, tried in order.
const INPUT_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `mm/dd/yyyy` (the prompt format) or ISO `yyyy-mm-dd`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Last day of the seven-day window starting at `start` (inclusive).
pub fn week_end(start: NaiveDate) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(6))
}
