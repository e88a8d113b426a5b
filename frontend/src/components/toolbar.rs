use leptos::*;
use stock_grid::LoadStatus;

use super::provider::use_stocks;

#[component]
pub fn Toolbar() -> impl IntoView {
    let stocks = use_stocks();

    let refreshing = move || stocks.status.with(|status| *status == LoadStatus::Loading);
    let counter = move || {
        stocks
            .selection
            .with(|selection| selection_label(selection.len(), selection.limit()))
    };
    let nothing_selected = move || stocks.selection.with(|selection| selection.is_empty());

    view! {
        <div class="toolbar">
            <button class="toolbar__refresh" on:click=move |_| stocks.refresh() disabled=refreshing>
                {move || if refreshing() { "Refreshing..." } else { "Refresh" }}
            </button>
            <button
                class="toolbar__copy"
                on:click=move |_| stocks.copy_selection()
                disabled=nothing_selected
            >
                "Copy selected"
            </button>
            <span class="toolbar__counter">{counter}</span>
            {move || {
                stocks
                    .notice
                    .get()
                    .map(|notice| view! { <span class="toolbar__notice">{notice}</span> })
            }}
        </div>
    }
}

fn selection_label(selected: usize, limit: usize) -> String {
    format!("{selected} / {limit} selected")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_label_shows_cap() {
        assert_eq!(selection_label(2, 3), "2 / 3 selected");
    }
}
