//! Lenient field parsers. Dirty cells degrade to defaults instead of failing an import.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;
use runway_core::DayOrder;

/// Parse a money cell. Thousands separators, quotes and currency symbols are ignored,
/// `(12.50)` is negative, and anything unparseable is 0.
pub fn parse_amount(raw: &str) -> f64 {
    let s: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '"' | '$' | '₹'))
        .collect();
    let s = s.trim();
    let (negate, s) = match s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        Some(inner) => (true, inner.trim()),
        None => (false, s),
    };
    let value = s.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    if negate { -value } else { value }
}

fn month_from_abbrev(s: &str) -> Option<u32> {
    let month = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn full_year(y: i32) -> i32 {
    if y < 100 { 2000 + y } else { y }
}

/// Date cell parser. Compiled once per import.
pub struct DateParser {
    day_order: DayOrder,
    iso_re: Regex,
    numeric_re: Regex,
    named_month_re: Regex,
}

impl DateParser {
    pub fn new(day_order: DayOrder) -> Result<Self> {
        Ok(Self {
            day_order,
            // Date-times keep only their date part.
            iso_re: Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{1,2})-(?P<d>\d{1,2})(?:[T ].*)?$")?,
            numeric_re: Regex::new(r"^(?P<a>\d{1,2})[/.-](?P<b>\d{1,2})[/.-](?P<y>\d{2}|\d{4})$")?,
            // Tally style: 01-Apr-2024 / 1-Apr-24
            named_month_re: Regex::new(r"^(?P<d>\d{1,2})[- ](?P<mon>[A-Za-z]{3})[- ](?P<y>\d{2}|\d{4})$")?,
        })
    }

    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let s = raw.trim();

        if let Some(caps) = self.iso_re.captures(s) {
            return NaiveDate::from_ymd_opt(caps["y"].parse().ok()?, caps["m"].parse().ok()?, caps["d"].parse().ok()?);
        }

        if let Some(caps) = self.numeric_re.captures(s) {
            let a: u32 = caps["a"].parse().ok()?;
            let b: u32 = caps["b"].parse().ok()?;
            let y = full_year(caps["y"].parse().ok()?);
            let (m, d) = match self.day_order {
                DayOrder::DayFirst => (b, a),
                DayOrder::MonthFirst => (a, b),
            };
            return NaiveDate::from_ymd_opt(y, m, d);
        }

        if let Some(caps) = self.named_month_re.captures(s) {
            let d: u32 = caps["d"].parse().ok()?;
            let m = month_from_abbrev(&caps["mon"])?;
            let y = full_year(caps["y"].parse().ok()?);
            return NaiveDate::from_ymd_opt(y, m, d);
        }

        None
    }
}
