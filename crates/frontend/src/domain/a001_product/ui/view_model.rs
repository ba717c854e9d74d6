use crate::domain::a001_product::api::{self, PRODUCTS_URL};
use contracts::domain::a001_product::{LoadError, LoadOutcome, ProductsLoadState};
use leptos::prelude::*;

/// Products feed state of one page instance.
#[derive(Clone, Copy)]
pub struct ProductsViewModel {
    pub state: RwSignal<ProductsLoadState>,
}

impl ProductsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProductsLoadState::default()),
        }
    }

    /// Starts the feed request. Must be called while the owning component is
    /// being built: the request is aborted when that component is torn down.
    pub fn load(&self) {
        let state = self.state;
        state.update(|s| s.begin());

        let controller = match web_sys::AbortController::new() {
            Ok(controller) => controller,
            Err(e) => {
                log::error!("AbortController unavailable: {:?}", e);
                state.update(|s| {
                    s.resolve(LoadOutcome::Failed(LoadError::Network {
                        detail: "AbortController unavailable".to_string(),
                    }))
                });
                return;
            }
        };
        let signal = controller.signal();
        let controller = StoredValue::new_local(controller);
        on_cleanup(move || {
            controller.try_with_value(|c| c.abort());
        });

        log::info!("loading products from {}", PRODUCTS_URL);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::fetch_products(&signal).await;
            match &outcome {
                LoadOutcome::Loaded(products) => {
                    log::info!("loaded {} products", products.len())
                }
                LoadOutcome::Cancelled => log::debug!("products request cancelled"),
                LoadOutcome::Failed(LoadError::Network { detail }) => {
                    log::warn!("products request failed: {}", detail)
                }
                LoadOutcome::Failed(e) => log::warn!("products request failed: {}", e),
            }
            // The page may be gone already; a disposed signal is skipped.
            state.try_update(|s| s.resolve(outcome));
        });
    }
}

impl Default for ProductsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
