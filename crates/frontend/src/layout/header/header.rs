use crate::routes::routes::HOME_PATH;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AppLogo() -> impl IntoView {
    view! {
        <A href=HOME_PATH attr:class="header__logo">
            {icon("products")}
            <span class="header__title">"Product Showcase"</span>
        </A>
    }
}

/// Top bar with the logo. Page-specific actions go in `children`.
#[component]
pub fn AppHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <AppLogo />
            {children.map(|c| view! { <div class="header__actions">{c()}</div> })}
        </header>
    }
}
