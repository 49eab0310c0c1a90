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

//! Settings persistence for the Copykit widget.
//!
//! Layout: `model.rs` (typed settings record and patch), `store.rs`
//! (`KeyValueStore` abstraction + `SettingsService`), `sqlite.rs` (SQLite
//! backend).

pub mod error;
pub mod model;
pub mod sqlite;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use model::{DEFAULT_SELECTOR, Settings, SettingsPatch};
pub use sqlite::SqliteKeyValueStore;
pub use store::{
    KeyValueStore, MemoryKeyValueStore, SETTINGS_KEY, SettingsService, SharedKeyValueStore,
};
