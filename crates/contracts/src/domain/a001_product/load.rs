//! Outcome model of the products feed request.
//!
//! The request itself lives in the frontend; this module describes what a
//! finished request means for the page so the transitions can be tested
//! without a browser.

use super::aggregate::Product;
use thiserror::Error;

/// Message shown by the details view when the id is not in the feed.
pub const NOT_FOUND_MESSAGE: &str = "Cannot retrieve product";

/// User-facing failure of a feed request. `Display` is the rendered message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Transport or decoding failure. `detail` is for logs only.
    #[error("Network error")]
    Network { detail: String },
}

/// Terminal result of one feed request.
///
/// Cancellation is its own variant so it can never be rendered as a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<Product>),
    Cancelled,
    Failed(LoadError),
}

/// DOM exception name of an aborted fetch.
pub const ABORT_ERROR_NAME: &str = "AbortError";

impl LoadOutcome {
    /// Outcome of a request that failed before a response body was read.
    ///
    /// An aborted request (signal already aborted, or the failure is an
    /// `AbortError`) is a cancellation; anything else is a network error.
    pub fn transport_failure(
        aborted: bool,
        error_name: Option<&str>,
        detail: impl Into<String>,
    ) -> Self {
        if aborted || error_name == Some(ABORT_ERROR_NAME) {
            return LoadOutcome::Cancelled;
        }
        LoadOutcome::Failed(LoadError::Network {
            detail: detail.into(),
        })
    }
}

/// Decodes a successful response body.
///
/// Valid JSON that is not an array yields an empty list.
pub fn parse_products(body: &str) -> Result<Vec<Product>, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LoadError::Network {
            detail: format!("invalid JSON: {}", e),
        })?;

    if !value.is_array() {
        return Ok(Vec::new());
    }

    serde_json::from_value(value).map_err(|e| LoadError::Network {
        detail: format!("unexpected product shape: {}", e),
    })
}

/// State of a page that owns one feed request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsLoadState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProductsLoadState {
    /// A request has started: loading on, previous error cleared.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a terminal outcome. Loading is always off afterwards.
    pub fn resolve(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(products) => self.products = products,
            LoadOutcome::Cancelled => {}
            LoadOutcome::Failed(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }
}

/// What the details page renders for a given id.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailsView {
    Loading,
    Error(String),
    NotFound,
    Found(Product),
}

pub fn resolve_details(state: &ProductsLoadState, id: &str) -> ProductDetailsView {
    if state.loading {
        return ProductDetailsView::Loading;
    }
    if let Some(err) = &state.error {
        return ProductDetailsView::Error(err.clone());
    }
    match state.products.iter().find(|p| p.id == id) {
        Some(product) => ProductDetailsView::Found(product.clone()),
        None => ProductDetailsView::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::sample;

    #[test]
    fn test_parse_array() {
        let body = r#"[
            {"id":"1","name":"Widget","category":"Tools","price":2.5,"inStock":true,"stockQuantity":4},
            {"id":"2","name":"Rake","category":"Garden","price":9,"inStock":false,"stockQuantity":0}
        ]"#;
        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Rake");
    }

    #[test]
    fn test_parse_non_array_is_empty() {
        assert_eq!(parse_products(r#"{"items":[]}"#).unwrap(), Vec::new());
        assert_eq!(parse_products("null").unwrap(), Vec::new());
        assert_eq!(parse_products("42").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_failures_are_network_errors() {
        let err = parse_products("<html>").unwrap_err();
        assert_eq!(err.to_string(), "Network error");

        let err = parse_products(r#"[{"id":1}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Network { .. }));
    }

    #[test]
    fn test_aborted_request_is_cancelled() {
        assert_eq!(
            LoadOutcome::transport_failure(true, None, "request dropped"),
            LoadOutcome::Cancelled
        );
        assert_eq!(
            LoadOutcome::transport_failure(false, Some("AbortError"), "aborted"),
            LoadOutcome::Cancelled
        );

        let outcome = LoadOutcome::transport_failure(false, Some("TypeError"), "Failed to fetch");
        assert_eq!(
            outcome,
            LoadOutcome::Failed(LoadError::Network {
                detail: "Failed to fetch".to_string()
            })
        );

        let mut state = ProductsLoadState::default();
        state.begin();
        state.resolve(LoadOutcome::transport_failure(true, Some("AbortError"), ""));
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_http_error_message() {
        let err = LoadError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed: 500 Internal Server Error");
    }

    #[test]
    fn test_cancelled_request_sets_no_error() {
        let mut state = ProductsLoadState::default();
        state.begin();
        assert!(state.loading);

        state.resolve(LoadOutcome::Cancelled);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_http_failure_keeps_products_empty() {
        let mut state = ProductsLoadState::default();
        state.begin();
        state.resolve(LoadOutcome::Failed(LoadError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));

        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Request failed: 500 Internal Server Error")
        );
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = ProductsLoadState::default();
        state.resolve(LoadOutcome::Failed(LoadError::Network {
            detail: "offline".to_string(),
        }));
        assert_eq!(state.error.as_deref(), Some("Network error"));

        state.begin();
        assert!(state.error.is_none());
        state.resolve(LoadOutcome::Loaded(vec![sample("1", "Widget", "Tools")]));
        assert!(!state.loading);
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn test_details_for_unknown_id() {
        let mut state = ProductsLoadState::default();
        state.resolve(LoadOutcome::Loaded(vec![sample("1", "Widget", "Tools")]));

        assert_eq!(resolve_details(&state, "404"), ProductDetailsView::NotFound);
        assert_eq!(
            resolve_details(&state, "1"),
            ProductDetailsView::Found(sample("1", "Widget", "Tools"))
        );
    }

    #[test]
    fn test_details_prefers_loading_and_errors() {
        let mut state = ProductsLoadState::default();
        state.begin();
        assert_eq!(resolve_details(&state, "1"), ProductDetailsView::Loading);

        state.resolve(LoadOutcome::Failed(LoadError::Network {
            detail: "offline".to_string(),
        }));
        assert_eq!(
            resolve_details(&state, "1"),
            ProductDetailsView::Error("Network error".to_string())
        );
    }
}
