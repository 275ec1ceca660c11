pub mod api;
pub mod app;
pub mod charts;
pub mod components;
pub mod filter;
pub mod stats;
pub mod types;

pub use app::App;
pub use types::{ChartDataset, LogRecord};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
