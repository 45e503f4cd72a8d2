//! Tests for the project card element

use crate::card::{render_card, ProjectCard, CARD_TAG};
use showcase_common::ProjectRecord;

fn sample() -> ProjectRecord {
    ProjectRecord::new("T", "I", "A", "D", "L")
}

#[test]
fn test_render_card_fields() {
    let html = render_card(&sample()).unwrap();

    assert!(html.starts_with(r#"<template shadowrootmode="open">"#));
    assert!(html.ends_with("</template>"));
    assert!(html.contains("<h2>T</h2>"));
    assert!(html.contains(r#"<img class="card-image" src="I" alt="A">"#));
    assert!(html.contains(r#"<p class="card-description">D</p>"#));
    assert!(html.contains(r#"<a href="L" class="card-link">View Project</a>"#));
}

#[test]
fn test_render_card_has_encapsulated_styles() {
    let html = render_card(&sample()).unwrap();
    let style_start = html.find("<style>").unwrap();
    let style_end = html.find("</style>").unwrap();
    let styles = &html[style_start..style_end];

    assert!(styles.contains(":host"));
    assert!(styles.contains(".card-link"));
    // Styles sit inside the shadow root, before the card markup
    assert!(style_end < html.find("card-container\"").unwrap());
}

#[test]
fn test_render_card_is_pure() {
    assert_eq!(
        render_card(&sample()).unwrap(),
        render_card(&sample()).unwrap()
    );
}

#[test]
fn test_empty_card_renders_nothing() {
    let mut card = ProjectCard::new();
    assert!(card.content().is_none());

    card.connected();
    assert!(card.content().is_none());
    assert_eq!(card.to_html().unwrap(), format!("<{CARD_TAG}></{CARD_TAG}>"));
}

#[test]
fn test_set_project_renders() {
    let mut card = ProjectCard::new();
    card.set_project(sample());

    assert_eq!(card.project(), Some(&sample()));
    assert_eq!(card.content(), Some(render_card(&sample()).unwrap().as_str()));

    let html = card.to_html().unwrap();
    assert!(html.starts_with("<project-card><template shadowrootmode=\"open\">"));
    assert!(html.ends_with("</template></project-card>"));
    assert!(html.contains(r#"<img class="card-image" src="I" alt="A">"#));
}

#[test]
fn test_set_project_twice_rerenders() {
    let mut card = ProjectCard::new();
    card.set_project(sample());
    card.set_project(ProjectRecord::new("Other", "I2", "A2", "D2", "L2"));

    let html = card.content().unwrap();
    assert!(html.contains("<h2>Other</h2>"));
    assert!(!html.contains("<h2>T</h2>"));
}

#[test]
fn test_card_escapes_record_text() {
    let mut card = ProjectCard::new();
    card.set_project(ProjectRecord::new(
        "<script>alert(1)</script>",
        "x.png",
        "a \"quoted\" alt",
        "Tom & Jerry",
        "https://example.com/?a=1&b=2",
    ));

    let html = card.to_html().unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("alt=\"a &quot;quoted&quot; alt\""));
    assert!(html.contains("Tom &amp; Jerry"));
    // Handlebars also escapes `=` inside attribute values
    assert!(html.contains("href=\"https://example.com/?a&#x3D;1&amp;b&#x3D;2\""));
}
