use chrono::NaiveDate;

use crate::core::{AgeReport, BirthDate, format_mdy};

/// Full report as a single JSON object for programmatic consumption
pub(crate) fn output_report_json(birth: BirthDate, report: &AgeReport, next: NaiveDate) -> String {
    let output = serde_json::json!({
        "birth_date": birth.to_string(),
        "years": report.years,
        "months_until_birthday": report.months_until_birthday,
        "days_until_birthday": report.days_until_birthday,
        "is_birthday_today": report.is_birthday_today,
        "next_birthday": format_mdy(next),
    });

    serde_json::to_string(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_json_carries_all_fields() {
        let birth: BirthDate = "12/25/1990".parse().unwrap();
        let report = AgeReport {
            years: 32,
            months_until_birthday: 11,
            days_until_birthday: 28,
            is_birthday_today: false,
        };
        let next = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();

        let json = output_report_json(birth, &report, next);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["birth_date"].as_str(), Some("12/25/1990"));
        assert_eq!(value["years"].as_i64(), Some(32));
        assert_eq!(value["months_until_birthday"].as_i64(), Some(11));
        assert_eq!(value["days_until_birthday"].as_i64(), Some(28));
        assert_eq!(value["is_birthday_today"].as_bool(), Some(false));
        assert_eq!(value["next_birthday"].as_str(), Some("12/25/2023"));
    }

    #[test]
    fn report_json_on_birthday() {
        let birth: BirthDate = "06/15/1990".parse().unwrap();
        let report = AgeReport {
            years: 34,
            months_until_birthday: 0,
            days_until_birthday: 0,
            is_birthday_today: true,
        };
        let next = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let json = output_report_json(birth, &report, next);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_birthday_today"].as_bool(), Some(true));
        assert_eq!(value["next_birthday"].as_str(), Some("06/15/2024"));
    }
}
