use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub date: String,
    pub time: String,
    pub on_date_change: Callback<String>,
    pub on_time_change: Callback<String>,
}

/// Date and time filter inputs. The time field is free text so partial
/// prefixes ("14", "14:2") narrow the tables on every keystroke.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_date_change = {
        let callback = props.on_date_change.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            callback.emit(target.value());
        })
    };

    let on_time_input = {
        let callback = props.on_time_change.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            callback.emit(target.value());
        })
    };

    html! {
        <div style="display:flex; gap:1.5em; align-items:flex-end; padding:1em; background:#f8f9fa; border:1px solid #ddd; border-radius:4px;">
            <div style="display:flex; flex-direction:column; gap:0.25em;">
                <label for="dateFilter" style="font-weight:bold; color:#555;">{ "Date" }</label>
                <input
                    type="date"
                    id="dateFilter"
                    value={props.date.clone()}
                    onchange={on_date_change}
                    style="padding:0.4em; border:1px solid #ccc; border-radius:4px;"
                />
            </div>
            <div style="display:flex; flex-direction:column; gap:0.25em;">
                <label for="timeFilter" style="font-weight:bold; color:#555;">{ "Time" }</label>
                <input
                    type="text"
                    id="timeFilter"
                    placeholder="HH:MM:SS"
                    value={props.time.clone()}
                    oninput={on_time_input}
                    style="padding:0.4em; border:1px solid #ccc; border-radius:4px;"
                />
            </div>
        </div>
    }
}
