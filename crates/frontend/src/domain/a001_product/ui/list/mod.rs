mod filters;
mod state;

pub use state::SharedViewModeStore;

use super::grid::ProductGrid;
use super::table::ProductTable;
use super::view_model::ProductsViewModel;
use crate::layout::{AppHeader, AppLayout};
use crate::routes::routes::product_path;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::view_mode_store::SessionViewModeStore;
use contracts::domain::a001_product::Product;
use contracts::shared::listing::{distinct_categories, distinct_names};
use contracts::shared::view_mode::ViewMode;
use filters::{CategorySelectFilter, NameSelectFilter};
use leptos::prelude::*;
use state::create_state;
use std::sync::Arc;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

/// What the content area shows, in priority order.
#[derive(Debug, Clone, PartialEq)]
enum ListContent {
    Loading,
    Error(String),
    Empty,
    Items(ViewMode),
}

#[component]
pub fn ProductList(
    /// View-mode persistence; defaults to the browser session storage
    #[prop(optional)]
    store: Option<SharedViewModeStore>,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| Arc::new(SessionViewModeStore));
    let listing = create_state(store);

    let vm = ProductsViewModel::new();
    vm.load();

    let products = Memo::new(move |_| vm.state.with(|s| s.products.clone()));
    let available_names = Memo::new(move |_| products.with(|p| distinct_names(p)));
    let available_categories = Memo::new(move |_| products.with(|p| distinct_categories(p)));

    let filtered = Memo::new(move |_| {
        listing
            .filter
            .with(|f| products.with(|p| f.apply(p)))
    });

    let (page_items, set_page_items) = signal(Vec::<Product>::new());

    let content = Memo::new(move |_| {
        let (loading, error) = vm.state.with(|s| (s.loading, s.error.clone()));
        if loading {
            ListContent::Loading
        } else if let Some(e) = error {
            ListContent::Error(e)
        } else if page_items.with(|items| items.is_empty()) {
            ListContent::Empty
        } else {
            ListContent::Items(listing.view_mode.get())
        }
    });

    let href_for = Callback::new(|id: String| product_path(&id));
    let name_query = Signal::derive(move || listing.filter.with(|f| f.name_query.clone()));
    let selected_categories =
        Signal::derive(move || listing.filter.with(|f| f.selected_categories.clone()));
    let categories_summary = move || listing.filter.with(|f| f.categories_summary());

    view! {
        <AppLayout>
            <AppHeader>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || filtered.with(|f| f.len()).to_string()}</span>
                </Badge>
                <nav class="view-toggle">
                    <Button
                        variant="ghost"
                        pressed=Signal::derive(move || Some(listing.view_mode.get() == ViewMode::Table))
                        on_click=Callback::new(move |_| listing.set_view_mode(ViewMode::Table))
                    >
                        {icon("list")}
                        "Table"
                    </Button>
                    <Button
                        variant="ghost"
                        pressed=Signal::derive(move || Some(listing.view_mode.get() == ViewMode::Grid))
                        on_click=Callback::new(move |_| listing.set_view_mode(ViewMode::Grid))
                    >
                        {icon("grid")}
                        "Grid"
                    </Button>
                </nav>
            </AppHeader>

            <div class="filter-bar">
                <NameSelectFilter
                    available=available_names
                    selected=name_query
                    on_change=Callback::new(move |name: String| listing.select_name(name))
                />
                <CategorySelectFilter
                    available=available_categories
                    selected=selected_categories
                    on_toggle=Callback::new(move |(c, checked): (String, bool)| {
                        listing.set_category(&c, checked)
                    })
                />
                <div class="filter-bar__summary">
                    <span>{categories_summary}</span>
                </div>
                <button
                    type="button"
                    class="filter-bar__clear"
                    disabled=move || !listing.has_filters()
                    on:click=move |_| listing.clear_filters()
                >
                    "Clear Filters"
                </button>
            </div>

            {move || match content.get() {
                ListContent::Loading => view! {
                    <div class="panel">
                        <Spinner />
                        "Loading products…"
                    </div>
                }
                .into_any(),
                ListContent::Error(e) => view! { <div class="panel panel--error">{e}</div> }.into_any(),
                ListContent::Empty => view! { <div class="panel">"No products found."</div> }.into_any(),
                ListContent::Items(ViewMode::Grid) => view! {
                    <ProductGrid items=page_items href_for=href_for />
                }
                .into_any(),
                ListContent::Items(ViewMode::Table) => view! {
                    <ProductTable items=page_items selectable=true href_for=href_for />
                }
                .into_any(),
            }}

            <PaginationControls
                results=filtered
                on_page_change=Callback::new(move |items: Vec<Product>| set_page_items.set(items))
                class="pagination-controls--listing"
            />
        </AppLayout>
    }
}
