// File: crates/chart-core/src/format.rs
// Summary: Number formatting for tick labels, value labels and hover text.

use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ValueFormat {
    /// Shortest round-trip form: `23.37`, `56`.
    #[default]
    Plain,
    /// Fixed number of decimals.
    Fixed(usize),
    /// Integer with thousands separators: `228,000`.
    Thousands,
    /// Dollars with separators: `$168,000`.
    Dollars,
    /// Dollars in thousands: `$168K`.
    DollarsK,
    /// Thousands suffix: `356K`.
    Kilo,
    /// `23.37%`.
    Percent,
    /// Always signed with fixed decimals: `+2.10%`, `-0.45%`.
    SignedPercent(usize),
    /// Plain value followed by a suffix: `65 days`.
    Suffix(String),
    /// Value is a day number from CE; rendered as `%Y-%m-%d`.
    Date,
    /// One label per data index; falls back to `Plain` out of range.
    Custom(Vec<String>),
}

impl ValueFormat {
    /// Format `value` located at data index `index`.
    pub fn format_at(&self, index: usize, value: f64) -> String {
        match self {
            ValueFormat::Plain => plain(value),
            ValueFormat::Fixed(d) => format!("{:.*}", *d, value),
            ValueFormat::Thousands => thousands(value.round() as i64),
            ValueFormat::Dollars => dollars(value),
            ValueFormat::DollarsK => {
                let k = (value / 1000.0).round() as i64;
                if k < 0 { format!("-${}K", -k) } else { format!("${}K", k) }
            }
            ValueFormat::Kilo => format!("{}K", (value / 1000.0).trunc() as i64),
            ValueFormat::Percent => format!("{}%", plain(value)),
            ValueFormat::SignedPercent(d) => format!("{:+.*}%", *d, value),
            ValueFormat::Suffix(s) => format!("{} {}", plain(value), s),
            ValueFormat::Date => date_from_days(value)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| plain(value)),
            ValueFormat::Custom(labels) => labels.get(index).cloned().unwrap_or_else(|| plain(value)),
        }
    }

    /// Tick labels have no index; `Custom` degrades to `Plain`.
    pub fn format_tick(&self, value: f64) -> String {
        match self {
            ValueFormat::Custom(_) => plain(value),
            ValueFormat::Date => date_from_days(value)
                .map(|d| d.format("%b %d").to_string())
                .unwrap_or_else(|| plain(value)),
            other => other.format_at(usize::MAX, value),
        }
    }
}

/// Shortest representation; integral values print without a fraction.
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.6}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 { format!("-{}", out) } else { out }
}

pub fn dollars(value: f64) -> String {
    let n = value.round() as i64;
    if n < 0 { format!("-${}", thousands(-n)) } else { format!("${}", thousands(n)) }
}

/// Day number from CE (as produced by `days_from_date`) back to a date.
pub fn date_from_days(days: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.round() as i32)
}

/// Calendar date to the numeric axis value used by `ValueFormat::Date`.
pub fn days_from_date(date: NaiveDate) -> f64 {
    use chrono::Datelike;
    date.num_days_from_ce() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_drops_trailing_zeros() {
        assert_eq!(plain(56.0), "56");
        assert_eq!(plain(23.37), "23.37");
        assert_eq!(plain(-0.5), "-0.5");
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(228000), "228,000");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(-1234567), "-1,234,567");
        assert_eq!(ValueFormat::Dollars.format_at(0, 168000.0), "$168,000");
    }

    #[test]
    fn percent_variants() {
        assert_eq!(ValueFormat::Percent.format_at(0, 42.5), "42.5%");
        assert_eq!(ValueFormat::SignedPercent(2).format_at(0, 2.1), "+2.10%");
        assert_eq!(ValueFormat::SignedPercent(1).format_at(0, -6.3), "-6.3%");
    }

    #[test]
    fn kilo_and_dollars_k() {
        assert_eq!(ValueFormat::Kilo.format_tick(356700.0), "356K");
        assert_eq!(ValueFormat::DollarsK.format_tick(62500.0), "$63K");
    }

    #[test]
    fn custom_falls_back_outside_range() {
        let f = ValueFormat::Custom(vec!["a".into(), "b".into()]);
        assert_eq!(f.format_at(1, 3.0), "b");
        assert_eq!(f.format_at(5, 3.0), "3");
        assert_eq!(f.format_tick(3.0), "3");
    }

    #[test]
    fn dates_round_trip_through_day_numbers() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();
        let v = days_from_date(d);
        assert_eq!(ValueFormat::Date.format_at(0, v), "2025-10-28");
        assert_eq!(ValueFormat::Date.format_tick(v), "Oct 28");
    }
}
