use leptos::*;
use stock_grid::FilterSummary;

use super::provider::use_stocks;

#[component]
pub fn ActiveFilterSummary() -> impl IntoView {
    let stocks = use_stocks();

    let summary = create_memo(move |_| {
        let filtered = stocks.rows.with(Vec::len);
        let total = stocks.stocks.with(Vec::len);
        stocks
            .filter
            .with(|filter| FilterSummary::describe(filter, filtered, total))
    });

    move || {
        summary.get().map(|summary| {
            view! {
                <div class="filter-summary">
                    <span class="filter-summary__headline">{summary.headline}</span>
                    {summary
                        .parts
                        .into_iter()
                        .map(|part| view! { <span class="filter-summary__part">" • "{part}</span> })
                        .collect_view()}
                </div>
            }
        })
    }
}
