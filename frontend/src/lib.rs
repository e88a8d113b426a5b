use leptos::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{Route, Router, Routes};
use stock_grid::GridConfig;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
mod logging;

pub use components::provider::{
    GridRow, StocksCache, StocksContext, StocksProvider, use_stocks, visible_rows,
};
pub use components::stocks_page::StocksPage;
pub use components::user_page::UserPage;
pub use logging::init_logging;

/// Root component wiring the routes. The stocks query cache lives here so
/// navigating away from the grid and back reuses fresh data.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(StocksCache::new(GridConfig::default().stale_time));

    view! {
        <Title text="Financial Stocks Table" />
        <Router>
            <main class="app-root">
                <Routes>
                    <Route path="/" view=StocksPage />
                    <Route path="/user/:user_id" view=UserPage />
                </Routes>
            </main>
        </Router>
    }
}

/// WASM entry point called automatically by `trunk`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}
