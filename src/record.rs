//! Typed medal records and the row normalizer.

use serde::{Serialize, Serializer};

use crate::parser::Row;

/// Medal colour. Rows with any other medal text never become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Exact, case-sensitive match against `Gold`, `Silver` and `Bronze`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Gold" => Some(Medal::Gold),
            "Silver" => Some(Medal::Silver),
            "Bronze" => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// Athlete gender as written in the source. Only `Men` and `Women` count
/// towards participation splits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Men,
    Women,
    Other(String),
}

impl Gender {
    pub fn parse(value: &str) -> Self {
        match value {
            "Men" => Gender::Men,
            "Women" => Gender::Women,
            other => Gender::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Other(raw) => raw,
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One medal awarded to one athlete in one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OlympicRecord {
    pub city: String,
    pub year: i32,
    pub sport: String,
    pub discipline: String,
    pub event: String,
    pub athlete: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_gender: Option<String>,
    pub medal: Medal,
}

/// Reads a leading base-10 integer the way a lenient `parseInt` does:
/// optional sign, then digits, anything after the digits ignored.
/// Returns `None` when there are no digits or the value overflows.
pub fn parse_year(value: &str) -> Option<i32> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i32 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn field<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}

fn optional(row: &Row, key: &str) -> Option<String> {
    Some(field(row, key))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Converts a canonical row into a record, or `None` if it cannot be used.
///
/// A row is kept when `year` parses, `country`, `athlete` and `medal` are
/// non-empty and the medal is one of the three colours. Per-view minimums
/// (e.g. a non-empty `sport`) are applied by the aggregations themselves.
pub fn normalize(row: &Row) -> Option<OlympicRecord> {
    let year = parse_year(field(row, "year"))?;

    let country = field(row, "country");
    let athlete = field(row, "athlete");
    if country.is_empty() || athlete.is_empty() {
        return None;
    }
    let medal = Medal::parse(field(row, "medal"))?;

    Some(OlympicRecord {
        city: field(row, "city").to_string(),
        year,
        sport: field(row, "sport").to_string(),
        discipline: field(row, "discipline").to_string(),
        event: field(row, "event").to_string(),
        athlete: athlete.to_string(),
        gender: Gender::parse(field(row, "gender")),
        country_code: optional(row, "country_code"),
        country: country.to_string(),
        event_gender: optional(row, "event_gender"),
        medal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_row() -> Row {
        row(&[
            ("city", "Beijing"),
            ("year", "2008"),
            ("sport", "Athletics"),
            ("discipline", "Athletics"),
            ("event", "100m"),
            ("athlete", "BOLT, Usain"),
            ("gender", "Men"),
            ("country_code", "JAM"),
            ("country", "Jamaica"),
            ("event_gender", "M"),
            ("medal", "Gold"),
        ])
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2008"), Some(2008));
        assert_eq!(parse_year(" 1976"), Some(1976));
        assert_eq!(parse_year("2004.0"), Some(2004));
        assert_eq!(parse_year("-12"), Some(-12));
        assert_eq!(parse_year("0"), Some(0));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("abc"), None);
        assert_eq!(parse_year("-"), None);
        assert_eq!(parse_year("99999999999"), None);
    }

    #[test]
    fn test_normalize_full_row() {
        let record = normalize(&full_row()).unwrap();
        assert_eq!(record.year, 2008);
        assert_eq!(record.gender, Gender::Men);
        assert_eq!(record.medal, Medal::Gold);
        assert_eq!(record.country_code.as_deref(), Some("JAM"));
        assert_eq!(record.event_gender.as_deref(), Some("M"));
    }

    #[test]
    fn test_normalize_rejects_bad_year() {
        let mut r = full_row();
        r.insert("year".to_string(), "n/a".to_string());
        assert!(normalize(&r).is_none());

        r.insert("year".to_string(), String::new());
        assert!(normalize(&r).is_none());
    }

    #[test]
    fn test_normalize_rejects_missing_required_fields() {
        for key in ["country", "athlete", "medal"] {
            let mut r = full_row();
            r.insert(key.to_string(), String::new());
            assert!(normalize(&r).is_none(), "empty {key} should be rejected");
        }
    }

    #[test]
    fn test_normalize_rejects_unknown_medal() {
        let mut r = full_row();
        r.insert("medal".to_string(), "gold".to_string());
        assert!(normalize(&r).is_none());
    }

    #[test]
    fn test_normalize_keeps_empty_sport_and_gender() {
        let mut r = full_row();
        r.insert("sport".to_string(), String::new());
        r.insert("gender".to_string(), String::new());
        r.shift_remove("country_code");

        let record = normalize(&r).unwrap();
        assert_eq!(record.sport, "");
        assert_eq!(record.gender, Gender::Other(String::new()));
        assert_eq!(record.country_code, None);
    }

    #[test]
    fn test_record_serializes_year_as_number() {
        let record = normalize(&full_row()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["year"], 2008);
        assert_eq!(json["gender"], "Men");
        assert_eq!(json["medal"], "Gold");
        assert_eq!(json["countryCode"], "JAM");
    }
}
