use leptos::prelude::*;

/// Placeholder photo for a product. The same seed always yields the same picture.
pub fn image_url(width: u32, height: u32, seed: &str) -> String {
    format!(
        "https://picsum.photos/{}/{}.webp?blur&random={}",
        width,
        height,
        urlencoding::encode(seed)
    )
}

#[component]
pub fn ProductImage(
    width: u32,
    height: u32,
    #[prop(into)] seed: String,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <img
            src=image_url(width, height, &seed)
            width=width
            height=height
            alt=alt.unwrap_or_else(|| "Product image".to_string())
            loading="lazy"
            class=class
        />
    }
}
