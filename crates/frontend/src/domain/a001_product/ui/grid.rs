use super::image::ProductImage;
use contracts::domain::a001_product::Product;
use contracts::shared::currency::format_currency;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// Card grid of products.
///
/// With `href_for` the product id links to its details page.
#[component]
pub fn ProductGrid(
    #[prop(into)] items: Signal<Vec<Product>>,
    #[prop(optional)] href_for: Option<Callback<String, String>>,
) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || items.get()
                key=|p| p.id.clone()
                children=move |p: Product| {
                    let id_label = format!("ID: {}", p.id);
                    let id_view = match href_for {
                        Some(href_for) => view! {
                            <A href=href_for.run(p.id.clone())>{id_label}</A>
                        }
                        .into_any(),
                        None => view! { <span>{id_label}</span> }.into_any(),
                    };
                    view! {
                        <article class="product-card">
                            <Card>
                                <ProductImage
                                    width=800
                                    height=480
                                    seed=p.id.clone()
                                    alt=p.name.clone()
                                    class="product-card__image"
                                />
                                <div class="product-card__id">{id_view}</div>
                                <div class="product-card__line">
                                    {format!("Price: {}", format_currency(p.price))}
                                </div>
                                <div class="product-card__line">
                                    {format!("Stock Quantity: {}", p.stock_label())}
                                </div>
                            </Card>
                        </article>
                    }
                }
            />
        </div>
    }
}
