pub mod components;
pub mod config;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use crate::config::META_DATA;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=META_DATA.description/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from(META_DATA.title)
            } else {
                format!("{} - {}", text, META_DATA.title)
            }
        }/>

        // social previews want absolute URLs, hence absolute_url
        <Meta property="og:title" content=META_DATA.title/>
        <Meta property="og:description" content=META_DATA.description/>
        <Meta property="og:image" content=META_DATA.absolute_url(META_DATA.og_image)/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // Async rendering so the page fully renders on the server;
                // this is really static content.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
