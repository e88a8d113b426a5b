use leptos::*;
use stock_grid::{ColumnDef, column_defs, columns::ColumnKind};

use super::provider::{GridRow, StocksContext, use_stocks};

#[component]
pub fn StocksGrid() -> impl IntoView {
    let stocks = use_stocks();
    let columns = column_defs();

    let header_cells = columns
        .into_iter()
        .map(|column| header_cell(column, stocks))
        .collect_view();

    view! {
        <section class="stocks-grid">
            <table>
                <thead>
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>
                    <For
                        each=move || stocks.rows.get()
                        key=|row| (row.generation, row.index)
                        children=move |row: GridRow| {
                            let index = row.index;
                            let record = row.record;
                            let selected = move || stocks.selection.with(|selection| selection.is_selected(index));
                            let enabled = move || stocks.selection.with(|selection| selection.can_select(index));

                            let cells = column_defs()
                                .into_iter()
                                .filter_map(|column| match column.kind {
                                    ColumnKind::Data(field) => Some(field),
                                    ColumnKind::Selection => None,
                                })
                                .map(|field| {
                                    let class = format!("stocks-grid__cell {}", field.tone(&record).class());
                                    view! {
                                        <td class=class class:numeric=field.is_numeric()>
                                            {field.format(&record)}
                                        </td>
                                    }
                                })
                                .collect_view();

                            view! {
                                <tr class:selected=selected>
                                    <td class="stocks-grid__select">
                                        <input
                                            type="checkbox"
                                            prop:checked=selected
                                            prop:disabled=move || !enabled()
                                            on:change=move |_| stocks.toggle_row(index)
                                        />
                                    </td>
                                    {cells}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

fn header_cell(column: ColumnDef, stocks: StocksContext) -> View {
    match column.kind {
        ColumnKind::Selection => view! {
            <th class="stocks-grid__select" style:width=column.width.map(|width| format!("{width}px"))>
                {column.header}
            </th>
        }
        .into_view(),
        ColumnKind::Data(field) => {
            let indicator = move || {
                stocks
                    .sort
                    .get()
                    .filter(|state| state.field == field)
                    .map(|state| state.direction.indicator())
                    .unwrap_or("")
            };
            view! {
                <th
                    class="stocks-grid__header"
                    class:sortable=column.sortable
                    on:click=move |_| {
                        if column.sortable {
                            stocks.toggle_sort(field);
                        }
                    }
                >
                    {column.header}
                    <span class="stocks-grid__sort">{indicator}</span>
                </th>
            }
            .into_view()
        }
    }
}
