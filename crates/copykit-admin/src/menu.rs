//! Host admin-menu registry model.
//!
//! The host shell owns one mutable registry; pages contribute entries to it
//! during startup wiring.

use crate::request::Capability;

/// Parent menus an entry can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuParent {
    /// The settings-style admin menu.
    Settings,
}

/// One registered submenu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Menu the entry attaches under.
    pub parent: MenuParent,
    /// Title rendered on the page itself.
    pub page_title: String,
    /// Label rendered in the menu.
    pub menu_title: String,
    /// Capability required to see the entry.
    pub capability: Capability,
    /// Page identifier the entry links to.
    pub slug: String,
}

/// Mutable registry of admin menu entries.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    entries: Vec<MenuEntry>,
}

impl MenuRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry.
    pub fn add(&mut self, entry: MenuEntry) {
        self.entries.push(entry);
    }

    /// Registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}
