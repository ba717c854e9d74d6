use leptos::prelude::*;

/// Row selection cell
///
/// Renders a `<td>` with a checkbox. Clicking the box does not propagate to
/// the row.
///
/// ```text
/// <TableCheckbox
///     checked=Signal::derive(move || selected.get().contains(&id))
///     on_change=Callback::new(move |_| toggle(id.clone()))
///     label=format!("Select {}", id)
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Accessible label of the checkbox
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
