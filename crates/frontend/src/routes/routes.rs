use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::list::ProductList;
use crate::layout::{AppHeader, AppLayout};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

pub const HOME_PATH: &str = "/";

/// Details route of a product. Ids are percent-encoded into a single segment.
pub fn product_path(id: &str) -> String {
    format!("/{}", urlencoding::encode(id))
}

/// Reverses [`product_path`]. Malformed escapes are taken literally.
pub fn product_id_from_param(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|id| id.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <AppLayout>
            <AppHeader />
            <div class="panel panel--error">
                "Page not found. "
                <A href=HOME_PATH>"Back to products"</A>
            </div>
        </AppLayout>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=|| view! { <ProductList /> } />
                    <Route path=path!("/:id") view=ProductDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}
