use std::collections::{BTreeMap, HashMap};

use crate::filter::split_timestamp;
use crate::types::{ChartDataset, LogRecord};

/// Bars beyond this would be unreadable at dashboard widths; keep the
/// most frequent objects only.
const MAX_OBJECT_BARS: usize = 8;

/// Aggregate view over both log collections, built once per load and
/// turned into the datasets the three charts draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSummary {
    /// Detections per calendar date, ascending by date.
    pub per_day: Vec<(String, u32)>,
    /// Most frequently detected objects, descending by count.
    pub objects: Vec<(String, u32)>,
    /// Known/unknown crossed with alert/safe, in fixed label order.
    pub outcomes: Vec<(String, u32)>,
}

impl DetectionSummary {
    pub fn build(known: &[LogRecord], unknown: &[LogRecord]) -> Self {
        let mut per_day: BTreeMap<String, u32> = BTreeMap::new();
        let mut object_counts: HashMap<String, u32> = HashMap::new();
        let mut known_alert = 0u32;
        let mut known_safe = 0u32;
        let mut unknown_alert = 0u32;
        let mut unknown_safe = 0u32;

        for (records, is_known) in [(known, true), (unknown, false)] {
            for record in records {
                let (date, _) = split_timestamp(&record.timestamp);
                *per_day.entry(date.to_string()).or_default() += 1;
                for object in &record.objects_detected {
                    *object_counts.entry(object.clone()).or_default() += 1;
                }
                match (is_known, record.alert) {
                    (true, true) => known_alert += 1,
                    (true, false) => known_safe += 1,
                    (false, true) => unknown_alert += 1,
                    (false, false) => unknown_safe += 1,
                }
            }
        }

        let mut objects: Vec<(String, u32)> = object_counts.into_iter().collect();
        // Tie-break by name so the ordering is stable across loads.
        objects.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        objects.truncate(MAX_OBJECT_BARS);

        DetectionSummary {
            per_day: per_day.into_iter().collect(),
            objects,
            outcomes: vec![
                ("Known / Safe".to_string(), known_safe),
                ("Known / Alert".to_string(), known_alert),
                ("Unknown / Safe".to_string(), unknown_safe),
                ("Unknown / Alert".to_string(), unknown_alert),
            ],
        }
    }

    pub fn per_day_dataset(&self) -> ChartDataset {
        pairs_to_dataset(&self.per_day)
    }

    pub fn objects_dataset(&self) -> ChartDataset {
        pairs_to_dataset(&self.objects)
    }

    pub fn outcomes_dataset(&self) -> ChartDataset {
        pairs_to_dataset(&self.outcomes)
    }
}

fn pairs_to_dataset(pairs: &[(String, u32)]) -> ChartDataset {
    ChartDataset {
        labels: pairs.iter().map(|(label, _)| label.clone()).collect(),
        data: pairs.iter().map(|(_, count)| f64::from(*count)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, objects: &[&str], alert: bool) -> LogRecord {
        LogRecord {
            timestamp: timestamp.to_string(),
            face_name: None,
            objects_detected: objects.iter().map(|s| s.to_string()).collect(),
            alert,
            capture_path: None,
        }
    }

    #[test]
    fn per_day_counts_merge_both_collections() {
        let known = vec![
            record("2024-01-01 10:00:00", &[], false),
            record("2024-01-02 09:00:00", &[], false),
        ];
        let unknown = vec![record("2024-01-01 23:00:00", &[], true)];
        let summary = DetectionSummary::build(&known, &unknown);
        assert_eq!(
            summary.per_day,
            vec![
                ("2024-01-01".to_string(), 2),
                ("2024-01-02".to_string(), 1)
            ]
        );
    }

    #[test]
    fn objects_rank_by_frequency_then_name() {
        let known = vec![
            record("2024-01-01 10:00:00", &["person", "bag"], false),
            record("2024-01-01 11:00:00", &["person"], false),
        ];
        let unknown = vec![record("2024-01-01 12:00:00", &["cat", "bag"], false)];
        let summary = DetectionSummary::build(&known, &unknown);
        assert_eq!(
            summary.objects,
            vec![
                ("person".to_string(), 2),
                ("bag".to_string(), 2),
                ("cat".to_string(), 1)
            ]
        );
    }

    #[test]
    fn objects_are_capped() {
        let objects: Vec<String> = (0..12).map(|i| format!("object-{i:02}")).collect();
        let refs: Vec<&str> = objects.iter().map(String::as_str).collect();
        let known = vec![record("2024-01-01 10:00:00", &refs, false)];
        let summary = DetectionSummary::build(&known, &[]);
        assert_eq!(summary.objects.len(), MAX_OBJECT_BARS);
    }

    #[test]
    fn outcome_split_counts_all_four_buckets() {
        let known = vec![
            record("2024-01-01 10:00:00", &[], false),
            record("2024-01-01 11:00:00", &[], true),
            record("2024-01-01 12:00:00", &[], false),
        ];
        let unknown = vec![record("2024-01-01 13:00:00", &[], true)];
        let summary = DetectionSummary::build(&known, &unknown);
        assert_eq!(
            summary.outcomes,
            vec![
                ("Known / Safe".to_string(), 2),
                ("Known / Alert".to_string(), 1),
                ("Unknown / Safe".to_string(), 0),
                ("Unknown / Alert".to_string(), 1),
            ]
        );
    }

    #[test]
    fn datasets_keep_label_and_value_alignment() {
        let known = vec![record("2024-01-02 10:00:00", &["person"], true)];
        let summary = DetectionSummary::build(&known, &[]);
        let per_day = summary.per_day_dataset();
        assert_eq!(per_day.labels, vec!["2024-01-02"]);
        assert_eq!(per_day.data, vec![1.0]);
        let outcomes = summary.outcomes_dataset();
        assert_eq!(outcomes.labels.len(), outcomes.data.len());
        assert_eq!(outcomes.data, vec![0.0, 1.0, 0.0, 0.0]);
    }
}
