#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Admin surface for the Copykit widget.
//!
//! Layout: `page.rs` (the `AdminPage` core invoked through plain methods),
//! `request.rs` (explicit request value object), `nonce.rs` (anti-forgery
//! tokens), `menu.rs` (host menu registry model), `assets.rs` (client
//! hand-off payload), `i18n.rs` (embedded string bundles), `http/` (axum
//! adapter translating web requests into core method calls).

pub mod assets;
pub mod http;
pub mod i18n;
pub mod menu;
pub mod nonce;
pub mod page;
pub mod request;

pub use assets::{
    ASSET_VERSION, AssetBundle, AssetRef, BUTTON_ATTACH_SELECTOR, ClientPayload, UiStrings,
};
pub use http::router::{AdminServer, AdminServerError, BOOT_PAYLOAD_PATH};
pub use i18n::{DEFAULT_LOCALE, LocaleCode};
pub use menu::{MenuEntry, MenuParent, MenuRegistry};
pub use nonce::{NONCE_TTL, NonceRegistry};
pub use page::{
    ACTION_LINK_ID, ADMIN_PAGE_PATH, ActionLink, AdminPage, NONCE_ACTION, NONCE_FIELD, PAGE_SLUG,
    SubmitOutcome,
};
pub use request::{AdminRequest, Capability};
