use crate::shared::components::table_checkbox::TableCheckbox;
use contracts::domain::a001_product::Product;
use contracts::shared::currency::format_currency;
use contracts::shared::listing::toggle_id;
use leptos::prelude::*;
use leptos_router::components::A;

/// Product table with optional row selection.
///
/// Selection is controlled when `selected_ids` is given and internal
/// otherwise; `on_selection_change` is notified in both cases.
#[component]
pub fn ProductTable(
    #[prop(into)] items: Signal<Vec<Product>>,
    #[prop(optional)] selectable: bool,
    #[prop(optional, into)] selected_ids: Option<Signal<Vec<String>>>,
    #[prop(optional)] on_selection_change: Option<Callback<Vec<String>>>,
    #[prop(optional)] href_for: Option<Callback<String, String>>,
) -> impl IntoView {
    let internal = RwSignal::new(
        selected_ids
            .map(|s| s.get_untracked())
            .unwrap_or_default(),
    );
    let selected = Signal::derive(move || match selected_ids {
        Some(controlled) => controlled.get(),
        None => internal.get(),
    });

    let toggle_one = move |id: String| {
        if !selectable {
            return;
        }
        let next = toggle_id(&selected.get_untracked(), &id);
        if selected_ids.is_none() {
            internal.set(next.clone());
        }
        if let Some(cb) = on_selection_change {
            cb.run(next);
        }
    };

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead class="table__head">
                    <tr>
                        {selectable.then(|| view! { <th class="table__header-cell table__header-cell--checkbox"></th> })}
                        <th class="table__header-cell">"ID"</th>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Category"</th>
                        <th class="table__header-cell">"Price"</th>
                        <th class="table__header-cell">"In Stock"</th>
                        <th class="table__header-cell">"Stock Quantity"</th>
                        <th class="table__header-cell">"Rating"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|p| p.id.clone()
                        children=move |p: Product| {
                            let row_id = p.id.clone();
                            let is_selected = Signal::derive(move || {
                                selected.with(|s| s.contains(&row_id))
                            });
                            let checkbox_id = p.id.clone();
                            let checkbox_label = format!("Select {}", p.id);
                            let link_id = p.id.clone();
                            let id_view = match href_for {
                                Some(href_for) => view! {
                                    <A href=href_for.run(link_id.clone())>{link_id.clone()}</A>
                                }
                                .into_any(),
                                None => view! { <span>{p.id.clone()}</span> }.into_any(),
                            };
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || is_selected.get()
                                    aria-selected=move || is_selected.get().to_string()
                                >
                                    {selectable.then(|| view! {
                                        <TableCheckbox
                                            checked=is_selected
                                            on_change=Callback::new(move |_| toggle_one(checkbox_id.clone()))
                                            label=checkbox_label
                                        />
                                    })}
                                    <td class="table__cell table__cell--strong">{id_view}</td>
                                    <td class="table__cell">{p.name.clone()}</td>
                                    <td class="table__cell">{p.category.clone()}</td>
                                    <td class="table__cell">{format_currency(p.price)}</td>
                                    <td class="table__cell">{p.in_stock_title()}</td>
                                    <td class="table__cell">{p.stock_quantity}</td>
                                    <td class="table__cell">{p.rating_cell()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
