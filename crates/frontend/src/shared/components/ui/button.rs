use leptos::prelude::*;

/// Button component with variants (default, ghost)
///
/// `pressed` turns the button into a toggle and sets `aria-pressed`.
#[component]
pub fn Button(
    /// Button variant: "default" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Toggle state (reactive); omitted for plain buttons
    #[prop(optional, into)]
    pressed: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("default") {
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), additional_class())
            aria-pressed=move || pressed.get().map(|p| p.to_string())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
