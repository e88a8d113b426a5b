use leptos::*;
use stock_grid::LoadStatus;

use super::{
    filter_summary::ActiveFilterSummary, filters::FiltersPanel, provider::StocksProvider,
    provider::use_stocks, stocks_grid::StocksGrid, toolbar::Toolbar,
};

#[component]
pub fn StocksPage() -> impl IntoView {
    view! {
        <StocksProvider>
            <StocksView />
        </StocksProvider>
    }
}

/// What the page shows. Reloads with data already on screen stay `Ready`,
/// so the grid and filter panel are not rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageState {
    Failed(String),
    InitialLoading,
    Ready,
}

fn page_state(status: &LoadStatus, has_data: bool) -> PageState {
    match status {
        LoadStatus::Failed(message) => PageState::Failed(message.clone()),
        LoadStatus::Loading if !has_data => PageState::InitialLoading,
        _ => PageState::Ready,
    }
}

#[component]
fn StocksView() -> impl IntoView {
    let stocks = use_stocks();
    let state = create_memo(move |_| {
        let has_data = stocks.stocks.with(|records| !records.is_empty());
        stocks.status.with(|status| page_state(status, has_data))
    });

    move || match state.get() {
        PageState::Failed(message) => view! {
            <div class="stocks-page__state stocks-page__state--error">
                <p>"Could not load stocks."</p>
                <p class="stocks-page__detail">{message}</p>
            </div>
        }
        .into_view(),
        PageState::InitialLoading => view! {
            <div class="stocks-page__state">
                <div class="stocks-page__loading">"Loading stocks..."</div>
            </div>
        }
        .into_view(),
        PageState::Ready => view! {
            <div class="stocks-page">
                <h1 class="stocks-page__title">"Financial Stocks Table"</h1>
                <Toolbar />
                <FiltersPanel />
                <ActiveFilterSummary />
                <StocksGrid />
            </div>
        }
        .into_view(),
    }
}
