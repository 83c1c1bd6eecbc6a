use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

pub type RecordId = i64;

/// One quoted item as it arrives from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Record {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            title: None,
            author: None,
            link: None,
            content: None,
            platform: None,
            date: None,
        }
    }

    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or("Untitled")
    }

    /// The record date at calendar-day granularity.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; anything else yields `None`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        non_empty(self.date.as_deref()).and_then(parse_calendar_date)
    }
}

/// Parse an ISO-like date string down to its calendar day.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 1,
            "title": "Wall",
            "author": "A",
            "link": "https://example.com/1",
            "content": "stone",
            "platform": "X",
            "date": "2024-06-06"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.title.as_deref(), Some("Wall"));
        assert_eq!(record.platform.as_deref(), Some("X"));
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let record: Record = serde_json::from_str(r#"{"id": 7, "extra": true}"#).unwrap();
        assert_eq!(record, Record::new(7));
    }

    #[test]
    fn test_display_title_fallback() {
        let mut record = Record::new(1);
        assert_eq!(record.display_title(), "Untitled");
        record.title = Some(String::new());
        assert_eq!(record.display_title(), "Untitled");
        record.title = Some("Gate".into());
        assert_eq!(record.display_title(), "Gate");
    }

    #[test]
    fn test_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 12);
        assert_eq!(parse_calendar_date("2024-06-12"), expected);
        assert_eq!(parse_calendar_date(" 2024-06-12 "), expected);
        assert_eq!(parse_calendar_date("2024-06-12T23:10:00Z"), expected);
        assert_eq!(parse_calendar_date("June 12"), None);
    }

    #[test]
    fn test_calendar_date_absent() {
        let mut record = Record::new(1);
        assert_eq!(record.calendar_date(), None);
        record.date = Some("garbage".into());
        assert_eq!(record.calendar_date(), None);
    }
}
