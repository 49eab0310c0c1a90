//! Front-end asset descriptors and the client hand-off payload.
//!
//! # Design
//! - The payload is handed to the front-end loader once per page load; the
//!   client script itself lives outside this service.
//! - The outer `selector` names where the copy button attaches and is fixed;
//!   the user-configurable content selector travels inside `settings`.

use copykit_settings::Settings;
use serde::Serialize;

/// Fixed selector the copy button attaches to.
pub const BUTTON_ATTACH_SELECTOR: &str = "pre";

/// Version tag appended to asset references for cache busting.
pub const ASSET_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loader handle for the stylesheet.
pub const STYLE_HANDLE: &str = "copykit";
/// Path the stylesheet is served from.
pub const STYLE_SRC: &str = "/assets/copykit.css";
/// Loader handle for the script.
pub const SCRIPT_HANDLE: &str = "copykit";
/// Path the script is served from.
pub const SCRIPT_SRC: &str = "/assets/copykit.js";

/// Static UI strings handed to the client script.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UiStrings {
    /// Tooltip shown on the copy button.
    pub title: String,
    /// Button label before copying.
    pub copy: String,
    /// Button label after a successful copy.
    pub copied: String,
}

/// Structured payload handed to the front-end loader.
#[derive(Debug, Clone, Serialize)]
pub struct ClientPayload {
    /// Fixed copy-button attachment selector.
    pub selector: String,
    /// Current persisted settings.
    pub settings: Settings,
    /// Localized UI strings.
    pub string: UiStrings,
}

/// Reference to one enqueued front-end asset.
#[derive(Debug, Clone, Serialize)]
pub struct AssetRef {
    /// Loader handle for the asset.
    pub handle: String,
    /// Path the asset is served from.
    pub src: String,
    /// Cache-busting version tag.
    pub version: String,
}

impl AssetRef {
    pub(crate) fn new(handle: &str, src: &str) -> Self {
        Self {
            handle: handle.to_string(),
            src: src.to_string(),
            version: ASSET_VERSION.to_string(),
        }
    }
}

/// Script/style pair plus the payload, handed to the asset loader together.
#[derive(Debug, Clone, Serialize)]
pub struct AssetBundle {
    /// Stylesheet reference.
    pub style: AssetRef,
    /// Script reference.
    pub script: AssetRef,
    /// Hand-off payload consumed by the script.
    pub payload: ClientPayload,
}
