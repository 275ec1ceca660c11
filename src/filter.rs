use std::cmp::Reverse;

use chrono::NaiveDateTime;

use crate::types::LogRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Splits a raw timestamp at the first space into date and time parts.
/// A timestamp with no space is all date part with an empty time part.
pub fn split_timestamp(timestamp: &str) -> (&str, &str) {
    match timestamp.split_once(' ') {
        Some((date, time)) => (date, time),
        None => (timestamp, ""),
    }
}

pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp.trim(), TIMESTAMP_FORMAT).ok()
}

/// Narrows a collection by the current filter inputs without mutating it.
///
/// A record is kept iff the date filter is empty or equals the record's
/// date part, and the time filter is empty or is a prefix of the record's
/// time part. The prefix test is what makes partial-time filtering work:
/// "14" matches "14:23:00".
pub fn filter_logs(logs: &[LogRecord], date_filter: &str, time_filter: &str) -> Vec<LogRecord> {
    logs.iter()
        .filter(|record| {
            let (date, time) = split_timestamp(&record.timestamp);
            let date_match = date_filter.is_empty() || date == date_filter;
            let time_match = time_filter.is_empty() || time.starts_with(time_filter);
            date_match && time_match
        })
        .cloned()
        .collect()
}

/// Orders a collection newest-first by parsed timestamp. Records whose
/// timestamp does not parse sort after all parseable ones.
pub fn sort_latest_first(logs: &mut [LogRecord]) {
    logs.sort_by_cached_key(|record| Reverse(parse_timestamp(&record.timestamp)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str) -> LogRecord {
        LogRecord {
            timestamp: timestamp.to_string(),
            face_name: None,
            objects_detected: Vec::new(),
            alert: false,
            capture_path: None,
        }
    }

    fn timestamps(logs: &[LogRecord]) -> Vec<&str> {
        logs.iter().map(|r| r.timestamp.as_str()).collect()
    }

    #[test]
    fn empty_filters_keep_everything() {
        let logs = vec![
            record("2024-01-01 10:00:00"),
            record("2024-01-02 09:00:00"),
            record("garbage"),
        ];
        assert_eq!(filter_logs(&logs, "", ""), logs);
    }

    #[test]
    fn date_filter_keeps_exact_date_matches_only() {
        let logs = vec![
            record("2024-01-01 10:00:00"),
            record("2024-01-02 09:00:00"),
            record("2024-01-01 23:59:59"),
        ];
        let filtered = filter_logs(&logs, "2024-01-01", "");
        assert_eq!(
            timestamps(&filtered),
            vec!["2024-01-01 10:00:00", "2024-01-01 23:59:59"]
        );
        for excluded in logs.iter().filter(|r| !filtered.contains(*r)) {
            assert_ne!(split_timestamp(&excluded.timestamp).0, "2024-01-01");
        }
    }

    #[test]
    fn time_filter_is_a_prefix_match() {
        let logs = vec![
            record("2024-01-01 14:23:00"),
            record("2024-01-01 14:59:59"),
            record("2024-01-01 15:00:00"),
        ];
        let filtered = filter_logs(&logs, "", "14");
        assert_eq!(
            timestamps(&filtered),
            vec!["2024-01-01 14:23:00", "2024-01-01 14:59:59"]
        );
        assert_eq!(filter_logs(&logs, "", "14:23").len(), 1);
    }

    #[test]
    fn date_and_time_filters_compose() {
        let logs = vec![
            record("2024-01-01 14:23:00"),
            record("2024-01-02 14:23:00"),
            record("2024-01-01 09:00:00"),
        ];
        let filtered = filter_logs(&logs, "2024-01-01", "14");
        assert_eq!(timestamps(&filtered), vec!["2024-01-01 14:23:00"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let logs = vec![
            record("2024-01-01 14:23:00"),
            record("2024-01-02 09:00:00"),
        ];
        let once = filter_logs(&logs, "2024-01-01", "14");
        let twice = filter_logs(&once, "2024-01-01", "14");
        assert_eq!(once, twice);
    }

    #[test]
    fn spaceless_timestamp_has_empty_time_part() {
        let logs = vec![record("2024-01-01")];
        assert_eq!(split_timestamp("2024-01-01"), ("2024-01-01", ""));
        // Date-only records still match their date, but any time filter
        // excludes them.
        assert_eq!(filter_logs(&logs, "2024-01-01", "").len(), 1);
        assert!(filter_logs(&logs, "", "14").is_empty());
    }

    #[test]
    fn sort_orders_newest_first() {
        let mut logs = vec![
            record("2024-01-01 10:00:00"),
            record("2024-01-02 09:00:00"),
        ];
        sort_latest_first(&mut logs);
        assert_eq!(
            timestamps(&logs),
            vec!["2024-01-02 09:00:00", "2024-01-01 10:00:00"]
        );
    }

    #[test]
    fn sort_is_non_increasing_by_parsed_timestamp() {
        let mut logs = vec![
            record("2024-02-29 00:00:01"),
            record("2023-12-31 23:59:59"),
            record("2024-03-01 12:00:00"),
            record("2024-02-29 00:00:00"),
        ];
        sort_latest_first(&mut logs);
        let parsed: Vec<_> = logs
            .iter()
            .map(|r| parse_timestamp(&r.timestamp).unwrap())
            .collect();
        assert!(parsed.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let mut logs = vec![
            record("not a timestamp"),
            record("2024-01-02 09:00:00"),
            record(""),
            record("2024-01-01 10:00:00"),
        ];
        sort_latest_first(&mut logs);
        assert_eq!(
            timestamps(&logs),
            vec![
                "2024-01-02 09:00:00",
                "2024-01-01 10:00:00",
                "not a timestamp",
                ""
            ]
        );
    }

    #[test]
    fn parse_rejects_date_only_strings() {
        assert!(parse_timestamp("2024-01-01 10:00:00").is_some());
        assert!(parse_timestamp("2024-01-01").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
