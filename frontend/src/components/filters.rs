use std::str::FromStr;

use leptos::{ev, event_target_checked, event_target_value, *};
use stock_grid::{FilterMode, Sector, SymbolMatch, all_industries};

use super::provider::use_stocks;

#[component]
pub fn FiltersPanel() -> impl IntoView {
    let stocks = use_stocks();
    let filter = stocks.filter;
    let expanded = create_rw_signal(true);

    let sector_list: Vec<Sector> = Sector::ALL.into_iter().collect();
    let industry_list: Vec<&'static str> = all_industries();
    let active_count = move || {
        filter.with(|filter| filter.sectors().count() + filter.industries().count())
    };

    view! {
        <section class="filters-panel" class:collapsed=move || !expanded.get()>
            <header class="filters-panel__header">
                <button
                    class="filters-panel__toggle"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "▾ Filters" } else { "▸ Filters" }}
                </button>
                <span class="filters-panel__count">
                    {move || match active_count() {
                        0 => String::new(),
                        count => format!("{count} selected"),
                    }}
                </span>
            </header>
            <Show when=move || expanded.get()>
                <div class="filters-panel__group">
                    <h3>"Sectors"</h3>
                    <div class="filters-panel__options filters-panel__options--grid">
                        <For
                            each={
                                let sector_list = sector_list.clone();
                                move || sector_list.clone().into_iter()
                            }
                            key=|sector| *sector
                            children=move |sector| {
                                view! {
                                    <label class="filters-panel__option">
                                        <input
                                            type="checkbox"
                                            on:input=move |ev: ev::Event| {
                                                let checked = event_target_checked(&ev);
                                                filter.update(|filter| filter.set_sector(sector, checked));
                                            }
                                            prop:checked=move || filter.with(|filter| filter.has_sector(sector))
                                        />
                                        <span>{sector.label()}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </div>
                <div class="filters-panel__group">
                    <h3>"Industries"</h3>
                    <div class="filters-panel__options filters-panel__options--grid">
                        <For
                            each={
                                let industry_list = industry_list.clone();
                                move || industry_list.clone().into_iter()
                            }
                            key=|industry| *industry
                            children=move |industry: &'static str| {
                                view! {
                                    <label class="filters-panel__option">
                                        <input
                                            type="checkbox"
                                            on:input=move |ev: ev::Event| {
                                                let checked = event_target_checked(&ev);
                                                filter.update(|filter| filter.set_industry(industry, checked));
                                            }
                                            prop:checked=move || filter.with(|filter| filter.has_industry(industry))
                                        />
                                        <span>{industry}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </div>
                <div class="filters-panel__group">
                    <h3>"Symbol"</h3>
                    <div class="filters-panel__symbol">
                        <select
                            on:change=move |ev: ev::Event| {
                                if let Ok(kind) = SymbolMatch::from_str(&event_target_value(&ev)) {
                                    filter.update(|filter| filter.set_symbol_match(kind));
                                }
                            }
                            prop:value=move || filter.with(|filter| filter.symbol_match().as_str().to_string())
                        >
                            {SymbolMatch::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                        <input
                            type="text"
                            placeholder="Symbol"
                            on:input=move |ev: ev::Event| {
                                let query = event_target_value(&ev);
                                filter.update(|filter| filter.set_symbol_query(query));
                            }
                            prop:value=move || filter.with(|filter| filter.symbol_query().to_string())
                        />
                    </div>
                </div>
                <div class="filters-panel__group">
                    <h3>"Combine"</h3>
                    <select
                        on:change=move |ev: ev::Event| {
                            if let Ok(mode) = FilterMode::from_str(&event_target_value(&ev)) {
                                filter.update(|filter| filter.set_mode(mode));
                            }
                        }
                        prop:value=move || filter.with(|filter| filter.mode().as_str().to_string())
                    >
                        {FilterMode::ALL
                            .into_iter()
                            .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button
                    class="filters-panel__clear"
                    on:click=move |_| filter.update(|filter| filter.clear())
                    disabled=move || !filter.with(|filter| filter.is_active())
                >
                    "Clear filters"
                </button>
            </Show>
        </section>
    }
}
