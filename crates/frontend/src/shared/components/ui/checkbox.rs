use leptos::prelude::*;

/// Checkbox item of a dropdown menu
///
/// The menu stays open while items are toggled.
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Receives the new checked state
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label
            class="form__checkbox-wrapper"
            role="menuitemcheckbox"
            aria-checked=move || checked.get().to_string()
        >
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
