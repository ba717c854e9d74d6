use crate::shared::components::dropdown::Dropdown;
use crate::shared::components::ui::Checkbox;
use leptos::prelude::*;

/// Single-choice name filter. Picking a name closes the menu.
#[component]
pub fn NameSelectFilter(
    #[prop(into)] available: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let highlighted = Signal::derive(move || Some(!selected.with(|s| s.is_empty())));

    view! {
        <Dropdown label="Name" open=open highlighted=highlighted>
            {move || {
                available
                    .get()
                    .into_iter()
                    .map(|name| {
                        let value = name.clone();
                        let is_current = {
                            let name = name.clone();
                            move || selected.with(|s| *s == name)
                        };
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                class="dropdown__item"
                                class:dropdown__item--selected=is_current
                                on:click=move |_| {
                                    on_change.run(value.clone());
                                    open.set(false);
                                }
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </Dropdown>
    }
}

/// Multi-choice category filter. The menu stays open while boxes are toggled.
#[component]
pub fn CategorySelectFilter(
    #[prop(into)] available: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    /// Receives the category and its new checked state
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <Dropdown label="Category" open=open variant="primary">
            {move || {
                available
                    .get()
                    .into_iter()
                    .map(|name| {
                        let checked = {
                            let name = name.clone();
                            Signal::derive(move || selected.with(|s| s.contains(&name)))
                        };
                        let value = name.clone();
                        view! {
                            <Checkbox
                                label=name
                                checked=checked
                                on_change=Callback::new(move |is_checked: bool| {
                                    on_toggle.run((value.clone(), is_checked))
                                })
                            />
                        }
                    })
                    .collect_view()
            }}
        </Dropdown>
    }
}
