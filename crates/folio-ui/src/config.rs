//! Page configuration
//!
//! Every behavior is located by CSS selectors and tuned by a handful of
//! constants. The defaults match the portfolio markup; a JSON document can
//! override any subset of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    COVER_REVEAL_DELAY_MS, FADE_VISIBILITY_THRESHOLD, RING_DURATION_MS,
    RING_VISIBILITY_THRESHOLD, SLIDE_GAP, SWIPE_THRESHOLD,
};

/// Error parsing a JSON configuration document
#[derive(Debug)]
pub struct ConfigError(serde_json::Error);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError(e)
    }
}

/// Configuration for every behavior on the page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    pub carousel: CarouselConfig,
    pub progress: ProgressConfig,
    pub fade: FadeConfig,
    pub nav: NavConfig,
    pub skills: SkillsConfig,
    pub works: WorksConfig,
    pub modals: ModalConfig,
    pub lightbox: LightboxConfig,
    pub cover: CoverConfig,
    pub testimonials: TestimonialConfig,
    /// Maximum log level: "error", "warn", "info", "debug" or "trace"
    pub log_level: LogLevel,
}

impl FolioConfig {
    /// Parse a JSON document, filling unspecified keys with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Log verbosity, serialized in lowercase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` crate filter
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Slide carousels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Carousel container
    pub root: String,
    /// Track holding the slides, inside the container
    pub track: String,
    /// Optional "previous" control, inside the container
    pub prev: String,
    /// Optional "next" control, inside the container
    pub next: String,
    /// Space between slides added to the measured slide width
    pub slide_gap: f64,
    /// Drag distance that commits a slide change
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            root: ".carousel".to_string(),
            track: ".carousel-track".to_string(),
            prev: ".prev".to_string(),
            next: ".next".to_string(),
            slide_gap: SLIDE_GAP,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

/// Circular skill-progress rings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressConfig {
    /// Ring container carrying the target percentage
    pub selector: String,
    /// SVG circle whose stroke is animated
    pub ring: String,
    /// Element receiving the "NN%" label
    pub label: String,
    /// Attribute holding the target percentage
    pub value_attribute: String,
    /// Visible ratio that starts the animation
    pub threshold: f64,
    pub duration_ms: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            selector: ".skill-circle".to_string(),
            ring: ".progress".to_string(),
            label: "strong".to_string(),
            value_attribute: "data-skill".to_string(),
            threshold: RING_VISIBILITY_THRESHOLD,
            duration_ms: RING_DURATION_MS,
        }
    }
}

/// One set of elements revealed on scroll
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FadeGroup {
    pub selector: String,
    #[serde(default = "FadeGroup::default_class")]
    pub class_name: String,
    /// Reveal once and stop watching
    #[serde(default)]
    pub once: bool,
}

impl FadeGroup {
    fn default_class() -> String {
        "show".to_string()
    }

    /// Group toggling `class_name` in and out of view
    pub fn new(selector: &str, class_name: &str, once: bool) -> Self {
        Self {
            selector: selector.to_string(),
            class_name: class_name.to_string(),
            once,
        }
    }
}

/// Scroll-triggered fade groups
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FadeConfig {
    pub threshold: f64,
    /// Observer root margin, CSS shorthand
    pub root_margin: String,
    pub groups: Vec<FadeGroup>,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            threshold: FADE_VISIBILITY_THRESHOLD,
            root_margin: "0px 0px -50px 0px".to_string(),
            groups: vec![
                FadeGroup::new(".fade-in", "show", false),
                FadeGroup::new(".skill-box", "show", false),
                FadeGroup::new(".work-page-fade", "work-page-visible", false),
                FadeGroup::new(".resume-card", "show", true),
                FadeGroup::new(".contact-card, .contact-images", "show", false),
            ],
        }
    }
}

/// Mobile navigation drawer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub toggle: String,
    pub links: String,
    pub close: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle: "#menu-toggle".to_string(),
            links: "#nav-links".to_string(),
            close: "#close-btn".to_string(),
        }
    }
}

/// Skill box popups
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsConfig {
    pub selector: String,
    pub class_name: String,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            selector: ".skill-box".to_string(),
            class_name: "active-popup".to_string(),
        }
    }
}

/// Featured works category filter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorksConfig {
    pub buttons: String,
    pub boxes: String,
    pub category_attribute: String,
}

impl Default for WorksConfig {
    fn default() -> Self {
        Self {
            buttons: ".toggle-btn".to_string(),
            boxes: ".work-box".to_string(),
            category_attribute: "data-category".to_string(),
        }
    }
}

/// Inline sizing applied to an opened preview modal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewLayout {
    pub content_width: String,
    pub content_max_width: String,
    pub frame_width: String,
    pub frame_height: String,
}

impl Default for PreviewLayout {
    fn default() -> Self {
        Self {
            content_width: "90%".to_string(),
            content_max_width: "1200px".to_string(),
            frame_width: "100%".to_string(),
            frame_height: "80vh".to_string(),
        }
    }
}

/// Project preview modals
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Buttons naming the modal they open
    pub trigger: String,
    pub modal: String,
    pub close: String,
    pub content: String,
    /// Trigger attribute holding the modal element id
    pub target_attribute: String,
    pub layout: PreviewLayout,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger: ".preview-btn".to_string(),
            modal: ".modal".to_string(),
            close: ".close-modal".to_string(),
            content: ".modal-content".to_string(),
            target_attribute: "data-modal".to_string(),
            layout: PreviewLayout::default(),
        }
    }
}

/// Contact image lightbox
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    pub images: String,
    pub alt: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            images: ".contact-images img".to_string(),
            alt: "Contact Image".to_string(),
        }
    }
}

/// Landing cover overlay
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverConfig {
    pub overlay: String,
    pub circle: String,
    pub button: String,
    pub delay_ms: u32,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            overlay: "#cover-overlay".to_string(),
            circle: ".cover-circle".to_string(),
            button: "#cover-btn".to_string(),
            delay_ms: COVER_REVEAL_DELAY_MS,
        }
    }
}

/// Testimonial card deck
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialConfig {
    pub root: String,
    pub cards: String,
    pub swipe_threshold: f64,
}

impl Default for TestimonialConfig {
    fn default() -> Self {
        Self {
            root: ".testimonial-carousel".to_string(),
            cards: ".testimonial-card".to_string(),
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = FolioConfig::default();
        assert!((config.carousel.slide_gap - 16.0).abs() < 0.001);
        assert!((config.carousel.swipe_threshold - 50.0).abs() < 0.001);
        assert!((config.progress.threshold - 0.5).abs() < 0.001);
        assert!((config.progress.duration_ms - 1500.0).abs() < 0.001);
        assert_eq!(config.cover.delay_ms, 1000);
        assert_eq!(config.fade.groups.len(), 5);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = FolioConfig::from_json(
            r#"{ "carousel": { "slideGap": 24 }, "logLevel": "debug" }"#,
        )
        .unwrap();

        assert!((config.carousel.slide_gap - 24.0).abs() < 0.001);
        assert_eq!(config.carousel.track, ".carousel-track");
        assert_eq!(config.progress, ProgressConfig::default());
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_from_json_fade_group_defaults() {
        let config = FolioConfig::from_json(
            r#"{ "fade": { "groups": [{ "selector": ".reveal" }] } }"#,
        )
        .unwrap();

        assert_eq!(config.fade.groups, vec![FadeGroup::new(".reveal", "show", false)]);
        assert_eq!(config.fade.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = FolioConfig::from_json("{}").unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = FolioConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_filter(), log::LevelFilter::Trace);
    }
}
