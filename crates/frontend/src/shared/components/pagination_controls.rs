use crate::shared::icons::icon;
use contracts::shared::listing::{
    PageLink, Paginator, SliceReporter, DEFAULT_PER_PAGE, DEFAULT_WINDOW_SIZE,
    PER_PAGE_OPTIONS,
};
use leptos::prelude::*;

/// PaginationControls component - client-side paging over an in-memory list
///
/// Owns only the position (page, page size). The visible slice is reported
/// through `on_page_change` once per change of the slice.
#[component]
pub fn PaginationControls<T>(
    /// Full result list to page through
    #[prop(into)]
    results: Signal<Vec<T>>,

    /// Receives the current page's items whenever they change
    on_page_change: Callback<Vec<T>>,

    /// Initial page size (optional, defaults to 10; sizes outside the options
    /// fall back to the first option)
    #[prop(optional)]
    default_per_page: Option<usize>,

    /// Available page size options (optional, defaults to [10, 20, 30, 50])
    #[prop(optional)]
    per_page_options: Option<Vec<usize>>,

    /// Pages shown on each side of the current one (optional, defaults to 4)
    #[prop(optional)]
    window_size: Option<usize>,

    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let paginator = RwSignal::new(Paginator::new(
        default_per_page.unwrap_or(DEFAULT_PER_PAGE),
        per_page_options.unwrap_or_else(|| PER_PAGE_OPTIONS.to_vec()),
        window_size.unwrap_or(DEFAULT_WINDOW_SIZE),
    ));

    let source_len = Memo::new(move |_| results.with(|items| items.len()));

    // Position as it applies to the current results: a new length means page 1.
    let state = Memo::new(move |_| {
        let mut p = paginator.get();
        p.set_source_len(source_len.get());
        p
    });

    Effect::new(move |_| {
        let len = source_len.get();
        if paginator.with_untracked(|p| p.source_len() != len) {
            paginator.update(|p| {
                p.set_source_len(len);
            });
        }
    });

    let reporter = StoredValue::new(SliceReporter::<T>::new());
    Effect::new(move |_| {
        let changed = results.with(|items| {
            state.with(|p| reporter.try_update_value(|r| r.report(p.slice(items))))
        });
        if let Some(items) = changed.flatten() {
            on_page_change.run(items);
        }
    });

    let navigate = move |action: fn(&mut Paginator) -> bool| {
        paginator.update(|p| {
            p.set_source_len(source_len.get_untracked());
            action(p);
        });
    };

    let go_to = move |page: usize| {
        paginator.update(|p| {
            p.set_source_len(source_len.get_untracked());
            p.go_to(page);
        });
    };

    let set_per_page = move |per_page: usize| {
        paginator.update(|p| {
            p.set_source_len(source_len.get_untracked());
            p.set_per_page(per_page);
        });
    };

    let page_size_opts = state.with_untracked(|p| p.per_page_options().to_vec());
    let wrapper_class = move || format!("pagination-controls {}", class.get().unwrap_or_default());

    view! {
        <div class=wrapper_class>
            <button
                class="pagination-btn"
                aria-label="Previous page"
                on:click=move |_| navigate(Paginator::prev)
                disabled=move || !state.with(|p| p.can_prev())
            >
                {icon("chevron-left")}
            </button>

            {move || {
                state
                    .with(|p| p.links())
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Page { number, active } => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=active
                                aria-current=if active { Some("page") } else { None }
                                on:click=move |_| {
                                    if !active {
                                        go_to(number);
                                    }
                                }
                            >
                                {number}
                            </button>
                        }
                        .into_any(),
                        PageLink::Ellipsis => view! {
                            <span class="pagination-ellipsis" aria-hidden="true">
                                "..."
                            </span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                aria-label="Next page"
                on:click=move |_| navigate(Paginator::next)
                disabled=move || !state.with(|p| p.can_next())
            >
                {icon("chevron-right")}
            </button>

            <select
                class="page-size-select"
                aria-label="Items per page"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse() {
                        set_per_page(val);
                    }
                }
                prop:value=move || state.with(|p| p.per_page()).to_string()
            >
                {page_size_opts
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || state.with(|p| p.per_page()) == size
                            >
                                {format!("{} per page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
