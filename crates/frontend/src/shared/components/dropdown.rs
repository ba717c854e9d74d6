use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dropdown menu with a trigger button and a scrollable item list.
///
/// Clicking outside the open menu closes it. Items decide themselves whether
/// a click closes the menu by writing to `open`.
#[component]
pub fn Dropdown(
    /// Trigger caption
    #[prop(into)]
    label: String,
    /// Open state, shared with the items
    open: RwSignal<bool>,
    /// Highlights the trigger (e.g. while a value is selected)
    #[prop(optional, into)]
    highlighted: MaybeProp<bool>,
    /// Visual variant of the trigger: "outline" (default) or "primary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let trigger_class = move || {
        let variant = match variant.get().as_deref() {
            Some("primary") => "dropdown__trigger--primary",
            _ => "dropdown__trigger--outline",
        };
        let active = if highlighted.get().unwrap_or(false) || open.get() {
            "dropdown__trigger--active"
        } else {
            ""
        };
        format!("dropdown__trigger {} {}", variant, active)
    };

    view! {
        <div class="dropdown">
            <button
                type="button"
                class=trigger_class
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span>{label}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown__backdrop" on:click=move |_| open.set(false)></div>
                <div class="dropdown__content" role="menu">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
