use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected a DD/MM/YYYY date, got {0:?}")]
    Malformed(String),
    #[error("no such calendar date: {0:?}")]
    OutOfRange(String),
}

/// Whole days between `today` and a `DD/MM/YYYY` date, clamped at zero.
///
/// Both ends are taken at local midnight, so a date later today is 0 and
/// tomorrow is 1. Past dates collapse to 0 as well.
pub fn days_left(date: &str, today: NaiveDate) -> Result<u32, DateParseError> {
    let mut parts = date.splitn(3, '/');
    let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DateParseError::Malformed(date.to_string()));
    };

    let field = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|_| DateParseError::Malformed(date.to_string()))
    };
    let (day, month, year) = (field(day)?, field(month)?, field(year)?);

    let target = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DateParseError::OutOfRange(date.to_string()))?;

    let diff = target.signed_duration_since(today).num_days();
    Ok(diff.max(0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test_case("22/06/2025", 2 ; "two days out")]
    #[test_case("21/06/2025", 1 ; "tomorrow")]
    #[test_case("20/06/2025", 0 ; "today")]
    #[test_case("19/06/2025", 0 ; "past date clamps to zero")]
    #[test_case("15/07/2025", 25 ; "next month")]
    #[test_case("20/06/2026", 365 ; "one year out")]
    fn counts_whole_days(date: &str, expected: u32) {
        assert_eq!(days_left(date, today()), Ok(expected));
    }

    #[test_case("2025-06-22" ; "wrong separator")]
    #[test_case("22/06" ; "missing year")]
    #[test_case("aa/bb/cccc" ; "non numeric fields")]
    #[test_case("22/06/2025/9" ; "trailing field")]
    #[test_case("" ; "empty")]
    fn rejects_malformed_input(date: &str) {
        assert!(matches!(
            days_left(date, today()),
            Err(DateParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        assert!(matches!(
            days_left("31/02/2025", today()),
            Err(DateParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn idempotent_for_fixed_today() {
        let first = days_left("22/06/2025", today());
        let second = days_left("22/06/2025", today());
        assert_eq!(first, second);
    }
}
