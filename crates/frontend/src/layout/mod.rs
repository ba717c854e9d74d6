pub mod header;

pub use header::AppHeader;

use leptos::prelude::*;

/// Page container shared by the listing and details pages.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            {children()}
        </div>
    }
}
