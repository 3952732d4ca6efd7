// crates/read_more_plugin/tests/integration_plugin.rs

use std::thread;

use read_more_plugin::{add_plugin, FilterValue, InMemoryRegistry, ReadMoreOptions, ReadMorePlugin};

const LINK: &str = r#"<a href="/">My link</a>"#;

/// Installs the plugin into a fresh registry, like a host does at startup.
fn installed(options: Option<&ReadMoreOptions>) -> InMemoryRegistry {
    let mut registry = InMemoryRegistry::new();
    add_plugin(&mut registry, &ReadMorePlugin, options);
    registry
}

fn custom_options() -> ReadMoreOptions {
    ReadMoreOptions::default().with_read_more_tag("<!--read-more-->")
}

fn excerpt(registry: &InMemoryRegistry, content: &str) -> String {
    registry
        .apply_filter("excerpt", content)
        .expect("excerpt filter should be registered")
        .as_text()
        .expect("excerpt should yield text")
        .to_string()
}

fn has_moretag(registry: &InMemoryRegistry, content: &str) -> bool {
    registry
        .apply_filter("hasMoretag", content)
        .expect("hasMoretag filter should be registered")
        .as_bool()
        .expect("hasMoretag should yield a boolean")
}

fn read_more(registry: &InMemoryRegistry, inner: &str, page: &str) -> String {
    registry
        .render_paired_shortcode("readMore", inner, page)
        .expect("readMore shortcode should be registered")
}

#[test]
fn test_registers_the_filters() {
    let registry = installed(None);
    assert_eq!(registry.filter_names(), vec!["excerpt", "hasMoretag"]);
}

#[test]
fn test_registers_the_shortcode() {
    let registry = installed(None);
    assert_eq!(registry.paired_shortcode_names(), vec!["readMore"]);
}

#[test]
fn test_default_excerpt() {
    let registry = installed(None);
    assert_eq!(excerpt(&registry, "A short summary<!--more-->The full story"), "A short summary");
    assert_eq!(excerpt(&registry, "A short summary"), "A short summary");
}

#[test]
fn test_default_has_moretag() {
    let registry = installed(None);
    assert!(has_moretag(&registry, "A short summary<!--more-->The full story"));
    assert!(!has_moretag(&registry, "A short summary"));
    assert!(!has_moretag(&registry, "<!--read-more-->"));
}

#[test]
fn test_default_read_more() {
    let registry = installed(None);
    assert_eq!(
        read_more(&registry, LINK, "A short summary<!--more-->The full story"),
        r#"A short summary <a href="/">My link</a>"#
    );
    assert_eq!(read_more(&registry, LINK, "A short summary"), "A short summary");
}

#[test]
fn test_empty_options_behave_like_defaults() {
    let empty = ReadMoreOptions::default();
    let blank = ReadMoreOptions::default().with_read_more_tag("");
    for options in [&empty, &blank] {
        let registry = installed(Some(options));
        assert!(has_moretag(&registry, "A<!--more-->B"));
        assert_eq!(excerpt(&registry, "A<!--more-->B"), "A");
    }
}

#[test]
fn test_custom_excerpt() {
    let options = custom_options();
    let registry = installed(Some(&options));
    assert_eq!(
        excerpt(&registry, "A short summary<!--read-more-->The full story"),
        "A short summary"
    );
    assert_eq!(excerpt(&registry, "A short summary"), "A short summary");
}

#[test]
fn test_custom_has_moretag() {
    let options = custom_options();
    let registry = installed(Some(&options));
    assert!(!has_moretag(&registry, "A short summary<!--more-->The full story"));
    assert!(!has_moretag(&registry, "A short summary"));
    assert!(has_moretag(&registry, "<!--read-more-->"));
}

#[test]
fn test_custom_read_more() {
    let options = custom_options();
    let registry = installed(Some(&options));
    assert_eq!(
        read_more(&registry, LINK, "A short summary<!--read-more-->The full story"),
        r#"A short summary <a href="/">My link</a>"#
    );
    assert_eq!(read_more(&registry, LINK, "A short summary"), "A short summary");
}

#[test]
fn test_options_from_host_json() {
    let options = ReadMoreOptions::from_json(r#"{"readMoreTag": "<!--read-more-->"}"#).unwrap();
    let registry = installed(Some(&options));
    assert!(has_moretag(&registry, "<!--read-more-->"));
}

#[test]
fn test_callables_render_pages_in_parallel() {
    let registry = installed(None);
    let excerpt_filter = registry.filter("excerpt").cloned().unwrap();
    let shortcode = registry.paired_shortcode("readMore").cloned().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let excerpt_filter = excerpt_filter.clone();
            let shortcode = shortcode.clone();
            thread::spawn(move || {
                let page = format!("Post {}<!--more-->Body {}", i, i);
                (excerpt_filter(page.as_str()), shortcode("more", page.as_str()), i)
            })
        })
        .collect();

    for handle in handles {
        let (excerpt, rendered, i) = handle.join().unwrap();
        assert_eq!(excerpt, FilterValue::Text(format!("Post {}", i)));
        assert_eq!(rendered, format!("Post {} more", i));
    }
}
