//! 配置测试

use crate::config::{WidgetConfig, DEFAULT_CONFIG_JSON};
use crate::ui::{ButtonStyle, DraggableButton, Mode};
use crate::{Color, Point};

#[test]
fn test_embedded_config_matches_defaults() {
    let config = WidgetConfig::load(None).expect("embedded config");
    assert_eq!(config, WidgetConfig::default());
    assert_eq!(WidgetConfig::from_json(DEFAULT_CONFIG_JSON).ok(), Some(config));
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = WidgetConfig::from_json(r#"{ "radius": 60, "initialX": 80 }"#).expect("config");
    assert_eq!(config.radius, 60.0);
    assert_eq!(config.initial_position(), Point::new(80.0, 200.0));
    assert_eq!(config.label, "Drag");
    assert_eq!(config.long_press_timeout_ms, 500);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(WidgetConfig::from_json(r#"{ "radius": 0 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "radius": -5 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "freeColor": "blue" }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "windowWidth": 0 }"#).is_err());
    assert!(WidgetConfig::from_json("not json").is_err());
}

#[test]
fn test_numeric_bounds_rejected() {
    assert!(WidgetConfig::from_json(r#"{ "longPressTimeoutMs": 18446744073709551615 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "longPressTimeoutMs": 60001 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "longPressTimeoutMs": 60000 }"#).is_ok());
    assert!(WidgetConfig::from_json(r#"{ "touchSlop": -1 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "touchSlop": 0 }"#).is_ok());
    assert!(WidgetConfig::from_json(r#"{ "textSize": 0 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "textSize": -12 }"#).is_err());
}

#[test]
fn test_window_size_bounded() {
    assert!(WidgetConfig::from_json(r#"{ "windowWidth": 100000 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "windowHeight": 16385 }"#).is_err());
    assert!(WidgetConfig::from_json(r#"{ "windowWidth": 16384, "windowHeight": 16384 }"#).is_ok());
}

#[test]
fn test_missing_config_file_is_error() {
    let err = WidgetConfig::load(Some("/nonexistent/widget.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/widget.json"));
}

#[test]
fn test_button_from_config() {
    let config = WidgetConfig::from_json(
        r##"{ "initialX": 50, "initialY": 60, "radius": 30, "lockedColor": "#00FF00", "label": "Go" }"##,
    )
    .expect("config");
    let button = DraggableButton::from_config(&config).expect("button");

    assert_eq!(button.position(), Point::new(50.0, 60.0));
    assert_eq!(button.state().radius, 30.0);
    assert_eq!(button.mode(), Mode::Free);
    assert_eq!(button.style().label, "Go");
    assert_eq!(button.style().fill_color(Mode::Locked), Color::rgb(0, 255, 0));
    assert_eq!(button.style().fill_color(Mode::Free), Color::BLUE);
}

#[test]
fn test_default_style_matches_default_config() {
    let style = ButtonStyle::from_config(&WidgetConfig::default()).expect("style");
    assert_eq!(style, ButtonStyle::default());
}
