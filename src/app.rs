use std::cell::RefCell;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, FetchError};
use crate::charts;
use crate::components::{FilterBar, LogTable};
use crate::filter::{filter_logs, sort_latest_first};
use crate::stats::DetectionSummary;
use crate::types::LogRecord;

#[derive(Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

fn collect_or_empty(
    result: Result<Vec<LogRecord>, FetchError>,
    which: &str,
    failures: &mut Vec<String>,
) -> Vec<LogRecord> {
    match result {
        Ok(mut records) => {
            sort_latest_first(&mut records);
            records
        }
        Err(err) => {
            web_sys::console::error_1(&format!("error fetching {which} logs: {err}").into());
            failures.push(format!("{which} logs: {err}"));
            Vec::new()
        }
    }
}

/// Runs one load sequence: known logs, then unknown logs, each sorted
/// newest-first. The generation counter tags this load; if another load
/// starts while this one is in flight, the stale completion is dropped
/// instead of overwriting newer state.
fn start_load(
    known: UseStateHandle<Vec<LogRecord>>,
    unknown: UseStateHandle<Vec<LogRecord>>,
    load_state: UseStateHandle<LoadState>,
    generation: Rc<RefCell<u32>>,
) {
    let current = {
        let mut counter = generation.borrow_mut();
        *counter += 1;
        *counter
    };
    load_state.set(LoadState::Loading);
    spawn_local(async move {
        let known_result = api::fetch_logs(api::KNOWN_LOGS_URL).await;
        let unknown_result = api::fetch_logs(api::UNKNOWN_LOGS_URL).await;
        if *generation.borrow() != current {
            return;
        }
        let mut failures = Vec::new();
        known.set(collect_or_empty(known_result, "known", &mut failures));
        unknown.set(collect_or_empty(unknown_result, "unknown", &mut failures));
        load_state.set(if failures.is_empty() {
            LoadState::Loaded
        } else {
            LoadState::Failed(failures.join("; "))
        });
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let known_logs = use_state(Vec::<LogRecord>::new);
    let unknown_logs = use_state(Vec::<LogRecord>::new);
    let date_filter = use_state(String::new);
    let time_filter = use_state(String::new);
    let load_state = use_state(|| LoadState::Loading);
    let load_generation = use_mut_ref(|| 0u32);

    // Initial load on mount.
    {
        let known_logs = known_logs.clone();
        let unknown_logs = unknown_logs.clone();
        let load_state = load_state.clone();
        let load_generation = load_generation.clone();
        use_effect_with((), move |_| {
            start_load(known_logs, unknown_logs, load_state, load_generation);
            || ()
        });
    }

    // Redraw the charts whenever the loaded collections change.
    use_effect_with(
        ((*known_logs).clone(), (*unknown_logs).clone()),
        move |(known, unknown): &(Vec<LogRecord>, Vec<LogRecord>)| {
            let summary = DetectionSummary::build(known, unknown);
            let drawn = [
                charts::create_line_chart("detectionsLineChart", &summary.per_day_dataset())
                    .map(|_| ()),
                charts::create_bar_chart("objectsBarChart", &summary.objects_dataset())
                    .map(|_| ()),
                charts::create_pie_chart("outcomePieChart", &summary.outcomes_dataset())
                    .map(|_| ()),
            ];
            for result in drawn {
                if let Err(err) = result {
                    web_sys::console::warn_1(&format!("chart rendering failed: {err}").into());
                }
            }
            || ()
        },
    );

    let on_refresh = {
        let known_logs = known_logs.clone();
        let unknown_logs = unknown_logs.clone();
        let load_state = load_state.clone();
        let load_generation = load_generation.clone();
        Callback::from(move |_: MouseEvent| {
            start_load(
                known_logs.clone(),
                unknown_logs.clone(),
                load_state.clone(),
                load_generation.clone(),
            );
        })
    };

    let on_date_change = {
        let date_filter = date_filter.clone();
        Callback::from(move |value: String| date_filter.set(value))
    };

    let on_time_change = {
        let time_filter = time_filter.clone();
        Callback::from(move |value: String| time_filter.set(value))
    };

    let visible_known = filter_logs(&known_logs, &date_filter, &time_filter);
    let visible_unknown = filter_logs(&unknown_logs, &date_filter, &time_filter);

    html! {
        <div style="font-family:Arial,sans-serif; padding:1.5em; background:#f0f2f5; min-height:100vh; display:flex; flex-direction:column; gap:1em;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h1 style="margin:0; color:#333;">{ "Detection Dashboard" }</h1>
                <button
                    onclick={on_refresh}
                    disabled={matches!(*load_state, LoadState::Loading)}
                    style={format!(
                        "padding:0.6em 1.4em; font-size:1em; border:none; border-radius:4px; {}",
                        if matches!(*load_state, LoadState::Loading) {
                            "background:#ccc; cursor:not-allowed;"
                        } else {
                            "background:#007bff; color:white; cursor:pointer;"
                        }
                    )}
                >
                    { if matches!(*load_state, LoadState::Loading) { "Loading..." } else { "Refresh" } }
                </button>
            </div>

            { match &*load_state {
                LoadState::Failed(message) => html! {
                    <div style="padding:1em; background:#f8d7da; border:1px solid #f5c6cb; border-radius:4px;">
                        <strong style="color:#721c24;">{ "Some logs could not be loaded" }</strong>
                        <div style="margin-top:0.5em; color:#721c24; font-size:0.9em;">
                            { message }
                        </div>
                    </div>
                },
                _ => html! {},
            }}

            <FilterBar
                date={(*date_filter).clone()}
                time={(*time_filter).clone()}
                on_date_change={on_date_change}
                on_time_change={on_time_change}
            />

            <div style="display:grid; grid-template-columns:1fr 1fr; gap:1.5em;">
                <div style="display:flex; flex-direction:column; gap:0.5em;">
                    <h2 style="margin:0; color:#333; font-size:1.1em;">
                        { format!("Known Faces ({})", visible_known.len()) }
                    </h2>
                    <LogTable logs={visible_known} table_id={"knownLogsTable".to_string()} />
                </div>
                <div style="display:flex; flex-direction:column; gap:0.5em;">
                    <h2 style="margin:0; color:#333; font-size:1.1em;">
                        { format!("Unknown Faces ({})", visible_unknown.len()) }
                    </h2>
                    <LogTable logs={visible_unknown} table_id={"unknownLogsTable".to_string()} />
                </div>
            </div>

            <div style="display:flex; gap:1.5em; flex-wrap:wrap;">
                <canvas
                    id="detectionsLineChart"
                    width="440"
                    height="240"
                    style="background:white; border:1px solid #ddd; border-radius:4px;"
                />
                <canvas
                    id="objectsBarChart"
                    width="440"
                    height="240"
                    style="background:white; border:1px solid #ddd; border-radius:4px;"
                />
                <canvas
                    id="outcomePieChart"
                    width="440"
                    height="240"
                    style="background:white; border:1px solid #ddd; border-radius:4px;"
                />
            </div>
        </div>
    }
}
