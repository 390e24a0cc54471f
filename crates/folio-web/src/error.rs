//! Mount errors
//!
//! A missing element only disables the behavior that needed it. The page
//! mount logs those and carries on; only a missing window/document or a bad
//! configuration reaches JavaScript.

use std::fmt;

use folio_ui::ConfigError;
use wasm_bindgen::JsValue;

/// Errors that can occur while attaching a behavior to the page
#[derive(Debug)]
pub enum MountError {
    /// No global `window` (not running in a browser)
    NoWindow,

    /// Window has no document
    NoDocument,

    /// An element the behavior needs is absent
    MissingElement {
        /// What the element is for
        role: &'static str,
        selector: String,
    },

    /// A DOM call threw
    Js(String),

    /// Configuration JSON could not be parsed
    Config(ConfigError),
}

impl MountError {
    pub fn missing(role: &'static str, selector: &str) -> Self {
        MountError::MissingElement {
            role,
            selector: selector.to_string(),
        }
    }

    /// Check if the error should abort the whole mount
    pub fn is_fatal(&self) -> bool {
        matches!(self, MountError::NoWindow | MountError::NoDocument | MountError::Config(_))
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoWindow => write!(f, "No window available"),
            MountError::NoDocument => write!(f, "No document available"),
            MountError::MissingElement { role, selector } => {
                write!(f, "Missing {} element ({})", role, selector)
            }
            MountError::Js(msg) => write!(f, "DOM error: {}", msg),
            MountError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MountError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for MountError {
    fn from(e: ConfigError) -> Self {
        MountError::Config(e)
    }
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<MountError> for JsValue {
    fn from(e: MountError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
