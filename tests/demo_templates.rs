//! Renders the bundled demo message against the bundled template set

use std::path::PathBuf;
use std::sync::Arc;

use ace_renderer::channel::ChannelType;
use ace_renderer::config::TemplateSettings;
use ace_renderer::message::Message;
use ace_renderer::presentation::{Presenter, RenderedPayload};
use ace_renderer::template::JinjaTemplates;

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn demo_message() -> Message {
    let raw = std::fs::read_to_string(manifest_path("demos/welcome_message.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn presenter() -> Presenter {
    let settings = TemplateSettings {
        root: manifest_path("templates"),
        ..TemplateSettings::default()
    };
    let templates = Arc::new(JinjaTemplates::from_settings(&settings));
    Presenter::new(templates, &settings.namespace_segment)
}

#[test]
fn test_demo_email_renders() {
    let payload = presenter().render(ChannelType::Email, &demo_message()).unwrap();

    let RenderedPayload::Email(email) = payload else {
        panic!("expected an email payload");
    };
    assert_eq!(email.from_name, "Rust Academy");
    assert_eq!(email.subject, "Welcome to Rust 101");
    assert!(email.body_html.contains("<strong>Rust 101</strong>"));
    assert!(email.body.starts_with("Hi Ada,"));
    assert_eq!(email.head_html, "<title>Welcome to Rust 101</title>");
}

#[test]
fn test_demo_push_renders() {
    let payload = presenter().render(ChannelType::Push, &demo_message()).unwrap();

    assert_eq!(payload.channel(), ChannelType::Push);
    let RenderedPayload::Push(push) = payload else {
        panic!("expected a push payload");
    };
    assert_eq!(push.title, "Rust 101 is ready");
    assert_eq!(push.body, "Hi Ada, your course starts on 2026-11-02.");
}
