//! Timestamp formatting with Turkish month abbreviations.

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_TR: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

/// `14 Oca 2024 15:30` — day, short month, year, 24-hour clock.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    format!(
        "{} {} {} {:02}:{:02}",
        ts.day(),
        MONTHS_TR[ts.month0() as usize],
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 14, 15, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "14 Oca 2024 15:30");
    }

    #[test]
    fn test_format_date_pads_time_not_day() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 3, 9, 5, 59).unwrap();
        assert_eq!(format_date(&ts), "3 Ağu 2025 09:05");
    }

    #[test]
    fn test_format_date_december() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_date(&ts), "31 Ara 2023 23:59");
    }
}
