use serde::Deserialize;

/// One detection event as served by the log API. Records are immutable
/// once fetched; collections are replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogRecord {
    /// "YYYY-MM-DD HH:MM:SS"-like wall-clock string.
    pub timestamp: String,
    /// Identity of the recognized face, if any.
    #[serde(default)]
    pub face_name: Option<String>,
    pub objects_detected: Vec<String>,
    pub alert: bool,
    /// URL of the capture image associated with this event.
    #[serde(default)]
    pub capture_path: Option<String>,
}

/// Labeled numeric series handed to the chart factories. Transient;
/// chart code reads it at draw time and does not retain it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let record: LogRecord = serde_json::from_str(
            r#"{
                "timestamp": "2024-03-01 14:23:00",
                "face_name": "alice",
                "objects_detected": ["person", "backpack"],
                "alert": true,
                "capture_path": "/captures/known/alice.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(record.timestamp, "2024-03-01 14:23:00");
        assert_eq!(record.face_name.as_deref(), Some("alice"));
        assert_eq!(record.objects_detected, vec!["person", "backpack"]);
        assert!(record.alert);
        assert_eq!(
            record.capture_path.as_deref(),
            Some("/captures/known/alice.jpg")
        );
    }

    #[test]
    fn optional_fields_default_to_none() {
        let record: LogRecord = serde_json::from_str(
            r#"{
                "timestamp": "2024-03-01 09:00:00",
                "objects_detected": [],
                "alert": false
            }"#,
        )
        .unwrap();
        assert_eq!(record.face_name, None);
        assert_eq!(record.capture_path, None);
        assert!(!record.alert);
    }

    #[test]
    fn explicit_nulls_decode_as_none() {
        let record: LogRecord = serde_json::from_str(
            r#"{
                "timestamp": "2024-03-01 09:00:00",
                "face_name": null,
                "objects_detected": ["cat"],
                "alert": false,
                "capture_path": null
            }"#,
        )
        .unwrap();
        assert_eq!(record.face_name, None);
        assert_eq!(record.capture_path, None);
    }
}
