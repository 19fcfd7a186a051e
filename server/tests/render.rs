use leptos::prelude::*;

use app::components::Image;
use app::config;
use app::pages::home::Index;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render_home() -> String {
    view! { <Index/> }.to_html()
}

#[test]
fn home_renders_the_same_markup_every_time() {
    setup();

    let first = render_home();
    let second = render_home();
    assert_eq!(first, second);
}

#[test]
fn home_carries_the_exact_copy() {
    setup();

    let html = render_home();
    assert!(html.contains(
        "3 cups of Python, 2 cups of Machine Learning, 1 cup of DevOps, and a pinch of Rust."
    ));
    assert!(html.contains(
        "Hi! Welcome to my personal blog/portfolio. I write about topics that interests or ones found useful, usually on cloud, machine learning and software engineering."
    ));
}

#[test]
fn profile_image_is_wired_to_the_static_asset() {
    setup();

    let html = render_home();
    // unoptimized: the source must reach the markup verbatim
    assert!(html.contains(r#"src="/profile.png""#));
    assert!(!html.contains("/profile.png?w="));
    assert!(html.contains(r#"width="160""#));
    assert!(html.contains(r#"height="160""#));
    assert!(html.contains(r#"loading="eager""#));
    assert!(html.contains(r#"alt="Profile photo""#));
    assert!(html.contains(r#"target="_blank""#));
}

#[test]
fn image_defaults_to_lazy_and_width_constrained() {
    setup();

    let html = view! {
        <Image src="/drawing.webp" alt="A drawing" width=80 height=80/>
    }
    .to_html();
    assert!(html.contains(r#"src="/drawing.webp?w=80""#));
    assert!(html.contains(r#"loading="lazy""#));
}

#[test]
fn configuration_passes_the_startup_check() {
    setup();

    config::validate().unwrap();
    let base = url::Url::parse(config::META_DATA.base_url).unwrap();
    assert_eq!("https", base.scheme());
}

#[test]
fn social_links_survive_concurrent_reads() {
    setup();

    let handles: Vec<_> = (0..16)
        .map(|_| std::thread::spawn(|| config::SOCIAL_LINKS.github))
        .collect();
    for handle in handles {
        assert_eq!("https://github.com/charlielu05", handle.join().unwrap());
    }
}
