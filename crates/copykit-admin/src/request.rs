//! Explicit request model handed to the admin page core.
//!
//! # Design
//! - Everything the core needs to authorize and process a submission travels
//!   in this value object; no ambient request state is consulted.

use std::collections::HashMap;

/// Authorization level resolved for an inbound admin request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Administrator-level account allowed to view and alter settings.
    ManageOptions,
    /// Any other caller; settings stay read-only.
    Read,
}

impl Capability {
    /// Whether the caller may alter settings.
    #[must_use]
    pub const fn can_manage(self) -> bool {
        matches!(self, Self::ManageOptions)
    }
}

/// One inbound request to the admin surface.
#[derive(Debug, Clone)]
pub struct AdminRequest {
    /// `page` parameter identifying the targeted admin page, if present.
    pub page: Option<String>,
    /// Authorization level of the caller.
    pub capability: Capability,
    /// Anti-forgery token submitted with the form, if present.
    pub nonce: Option<String>,
    /// Submitted form fields.
    pub fields: HashMap<String, String>,
}

impl AdminRequest {
    /// Start an empty request for the given caller.
    #[must_use]
    pub fn new(capability: Capability) -> Self {
        Self {
            page: None,
            capability,
            nonce: None,
            fields: HashMap::new(),
        }
    }

    /// Attach the `page` parameter.
    #[must_use]
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Attach the submitted anti-forgery token.
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Attach one submitted form field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manage_options_grants_management() {
        assert!(Capability::ManageOptions.can_manage());
        assert!(!Capability::Read.can_manage());
    }

    #[test]
    fn builder_accumulates_fields() {
        let request = AdminRequest::new(Capability::Read)
            .with_page("copykit")
            .with_nonce("token")
            .with_field("selector", "pre");
        assert_eq!(request.page.as_deref(), Some("copykit"));
        assert_eq!(request.nonce.as_deref(), Some("token"));
        assert_eq!(request.fields.get("selector").map(String::as_str), Some("pre"));
    }
}
