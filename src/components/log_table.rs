use yew::prelude::*;

use crate::types::LogRecord;

pub const ALERT_LABEL: &str = "⚠️ ALERT";
pub const SAFE_LABEL: &str = "✅ Safe";
const NO_CAPTURE: &str = "—";

/// Face column text; an absent or empty name shows the placeholder.
pub fn face_label(record: &LogRecord) -> String {
    match record.face_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "N/A".to_string(),
    }
}

pub fn objects_label(record: &LogRecord) -> String {
    record.objects_detected.join(", ")
}

pub fn status_label(alert: bool) -> &'static str {
    if alert {
        ALERT_LABEL
    } else {
        SAFE_LABEL
    }
}

#[derive(Properties, PartialEq)]
pub struct LogTableProps {
    /// Records to display, already filtered and ordered by the caller.
    pub logs: Vec<LogRecord>,
    pub table_id: String,
}

#[function_component(LogTable)]
pub fn log_table(props: &LogTableProps) -> Html {
    html! {
        <table id={props.table_id.clone()} style="width:100%; border-collapse:collapse; background:white;">
            <thead>
                <tr style="background:#4a5568; color:white; text-align:left;">
                    <th style="padding:0.5em;">{ "Timestamp" }</th>
                    <th style="padding:0.5em;">{ "Face" }</th>
                    <th style="padding:0.5em;">{ "Objects Detected" }</th>
                    <th style="padding:0.5em;">{ "Status" }</th>
                    <th style="padding:0.5em;">{ "Capture" }</th>
                </tr>
            </thead>
            <tbody>
                { if props.logs.is_empty() {
                    html! {
                        <tr>
                            <td colspan="5" style="padding:1em; text-align:center; color:#888;">
                                { "No log entries" }
                            </td>
                        </tr>
                    }
                } else {
                    html! {
                        <>
                        { for props.logs.iter().map(|record| html! {
                            <tr style="border-bottom:1px solid #eee;">
                                <td style="padding:0.5em; white-space:nowrap;">{ &record.timestamp }</td>
                                <td style="padding:0.5em;">{ face_label(record) }</td>
                                <td style="padding:0.5em;">{ objects_label(record) }</td>
                                <td style="padding:0.5em; white-space:nowrap;">{ status_label(record.alert) }</td>
                                <td style="padding:0.5em;">
                                    { match record.capture_path.as_deref() {
                                        Some(path) if !path.is_empty() => html! {
                                            <img src={path.to_string()} class="capture-img" style="max-height:48px; border-radius:4px;" />
                                        },
                                        _ => html! { {NO_CAPTURE} },
                                    }}
                                </td>
                            </tr>
                        })}
                        </>
                    }
                }}
            </tbody>
        </table>
    }
}
