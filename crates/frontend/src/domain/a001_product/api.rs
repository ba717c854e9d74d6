use contracts::domain::a001_product::{parse_products, LoadError, LoadOutcome};
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// Static products feed.
pub const PRODUCTS_URL: &str =
    "https://armandsosins.github.io/home-assignment/random_products.json";

/// Fetches the whole catalog. Aborting `signal` yields [`LoadOutcome::Cancelled`].
pub async fn fetch_products(signal: &AbortSignal) -> LoadOutcome {
    let response = match Request::get(PRODUCTS_URL)
        .abort_signal(Some(signal))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return transport_failure(e, signal),
    };

    if !response.ok() {
        return LoadOutcome::Failed(LoadError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return transport_failure(e, signal),
    };

    match parse_products(&body) {
        Ok(products) => LoadOutcome::Loaded(products),
        Err(e) => LoadOutcome::Failed(e),
    }
}

fn transport_failure(err: gloo_net::Error, signal: &AbortSignal) -> LoadOutcome {
    let error_name = match &err {
        gloo_net::Error::JsError(js) => Some(js.name.as_str()),
        _ => None,
    };
    LoadOutcome::transport_failure(signal.aborted(), error_name, err.to_string())
}
