use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a status, kind, or decision. Accepts `under_review`,
/// `under-review`, and `UnderReview`.
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(raw.parse::<T>()?)
}

pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

pub fn parse_opt_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected RFC 3339): {error}"))
}

/// Map a `--value` / `--clear-value` pair to a tri-state update field.
#[must_use]
pub fn set_or_clear<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}

#[cfg(test)]
mod tests {
    use thesis_core::enums::{CommitteeDecision, MilestoneStatus, ThesisStatus};

    use super::*;

    #[test]
    fn parses_status_spellings() {
        for raw in ["under_review", "under-review", "UnderReview"] {
            let status: ThesisStatus = parse_enum(raw).expect("status should parse");
            assert_eq!(status, ThesisStatus::UnderReview);
        }
        let decision: CommitteeDecision = parse_enum("minor-revision").expect("should parse");
        assert_eq!(decision, CommitteeDecision::MinorRevision);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<MilestoneStatus>("done").expect_err("should fail");
        assert!(err.to_string().contains("done"));
    }

    #[test]
    fn parses_dates_and_timestamps() {
        assert_eq!(
            parse_date("2026-06-30", "deadline").unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
        );
        assert!(parse_date("30.06.2026", "deadline").is_err());
        assert_eq!(parse_opt_date(None, "deadline").unwrap(), None);
        let ts = parse_timestamp("2026-10-19T10:00:00+02:00", "at").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-10-19T08:00:00+00:00");
    }

    #[test]
    fn set_or_clear_tristate() {
        assert_eq!(set_or_clear(Some(1), false), Some(Some(1)));
        assert_eq!(set_or_clear::<i32>(None, true), Some(None));
        assert_eq!(set_or_clear::<i32>(None, false), None);
    }
}
