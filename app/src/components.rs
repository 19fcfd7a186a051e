use leptos::prelude::*;

/// Renders an `<img>` from the given attributes.
///
/// `priority` marks the image as critical for the initial paint and loads it
/// eagerly instead of lazily. `unoptimized` emits `src` verbatim; otherwise
/// the source is routed through the asset pipeline's width-constrained form
/// so the served file never exceeds its display size.
#[component]
pub fn Image(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    width: u32,
    height: u32,
    #[prop(optional)] unoptimized: bool,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    let src = if unoptimized {
        src
    } else {
        optimized_src(&src, width)
    };
    let loading = if priority { "eager" } else { "lazy" };

    view! {
        <img
            src=src
            alt=alt
            class=class
            width=width
            height=height
            loading=loading
        />
    }
}

fn optimized_src(src: &str, width: u32) -> String {
    format!("{src}?w={width}")
}
