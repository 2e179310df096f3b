use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An aquarium visitor. Visitors are insert/list only; there is no update or
/// delete path for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    /// Assigned by the database on insert; `None` before that.
    pub id: Option<i64>,
    pub name: String,
    pub contact: String,
    pub ticket_count: u32,
    pub visit_date: NaiveDate,
}

impl Visitor {
    pub fn new(name: &str, contact: &str, ticket_count: u32, visit_date: NaiveDate) -> Self {
        Visitor {
            id: None,
            name: name.to_string(),
            contact: contact.to_string(),
            ticket_count,
            visit_date,
        }
    }
}

/// Parse a visit date in `YYYY-MM-DD` form.
///
/// Rejects dates that do not exist on the calendar ("2024-02-30"), so a
/// `Visitor` can only ever hold a real date.
pub fn parse_visit_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid visit date {:?} (expected YYYY-MM-DD)", input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_leap_day() {
        let date = parse_visit_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_nonexistent_date() {
        assert!(parse_visit_date("2024-02-30").is_err());
        assert!(parse_visit_date("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_visit_date("tomorrow").is_err());
        assert!(parse_visit_date("29-02-2024").is_err());
        assert!(parse_visit_date("").is_err());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert!(parse_visit_date(" 2024-06-01 ").is_ok());
    }
}
