use super::super::image::ProductImage;
use super::super::view_model::ProductsViewModel;
use crate::layout::{AppHeader, AppLayout};
use crate::routes::routes::{product_id_from_param, HOME_PATH};
use crate::shared::icons::icon;
use contracts::domain::a001_product::{
    resolve_details, Product, ProductDetailsView, NOT_FOUND_MESSAGE,
};
use contracts::shared::currency::format_currency;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Card, Spinner};

/// Details card of a single product.
#[component]
pub fn ProductItem(item: Product) -> impl IntoView {
    view! {
        <Card>
            <div class="product-item">
                <ProductImage
                    width=340
                    height=272
                    seed=item.id.clone()
                    alt=item.name.clone()
                    class="product-item__image"
                />
                <div class="product-item__body">
                    <h3 class="product-item__id">{item.id.clone()}</h3>
                    <p class="product-item__facts">
                        {format!("Name: {}", item.name)}
                        <br />
                        {format!("Category: {}", item.category)}
                        <br />
                        {format!("Price: {}", format_currency(item.price))}
                        <br />
                        {format!("In Stock: {}", item.in_stock_answer())}
                        <br />
                        {format!("Stock Quantity: {}", item.stock_quantity)}
                        <br />
                        {format!("Rating: {}", item.rating_summary())}
                    </p>
                </div>
            </div>
        </Card>
    }
}

/// Route `/:id`. Loads the feed and shows the product with that id.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .map(|raw| product_id_from_param(&raw))
            .unwrap_or_default()
    });

    let vm = ProductsViewModel::new();
    vm.load();

    let details = Memo::new(move |_| {
        let id = id.get();
        vm.state.with(|s| resolve_details(s, &id))
    });

    view! {
        <AppLayout>
            <AppHeader />

            <div class="back-link">
                <A href=HOME_PATH>
                    {icon("chevron-left")}
                    "Back"
                </A>
            </div>

            <div class="details__title">"Product details"</div>

            {move || match details.get() {
                ProductDetailsView::Loading => view! {
                    <div class="panel">
                        <Spinner />
                        "Loading products…"
                    </div>
                }
                .into_any(),
                ProductDetailsView::Error(e) => view! {
                    <div class="panel panel--error">{e}</div>
                }
                .into_any(),
                ProductDetailsView::NotFound => view! {
                    <div class="panel panel--error">{NOT_FOUND_MESSAGE}</div>
                }
                .into_any(),
                ProductDetailsView::Found(product) => view! {
                    <ProductItem item=product />
                }
                .into_any(),
            }}
        </AppLayout>
    }
}
