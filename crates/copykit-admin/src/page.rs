//! Admin page core: plain methods invoked by the HTTP adapter.
//!
//! # Design
//! - One instance is constructed at startup with its dependencies injected;
//!   there is no ambient global and no host hook bus.
//! - Every operation is a single-shot read-merge-write; failed submit guards
//!   resolve as silent no-ops rather than surfaced errors.

use std::fmt::Write as _;

use copykit_settings::{DEFAULT_SELECTOR, SettingsPatch, SettingsResult, SettingsService};
use tracing::{debug, info};

use crate::assets::{
    AssetBundle, AssetRef, BUTTON_ATTACH_SELECTOR, ClientPayload, SCRIPT_HANDLE, SCRIPT_SRC,
    STYLE_HANDLE, STYLE_SRC, UiStrings,
};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, localize};
use crate::menu::{MenuEntry, MenuParent, MenuRegistry};
use crate::nonce::NonceRegistry;
use crate::request::{AdminRequest, Capability};

/// Page identifier matched against the request's `page` parameter.
pub const PAGE_SLUG: &str = "copykit";

/// Path the admin page is served from.
pub const ADMIN_PAGE_PATH: &str = "/admin/copykit";

/// Action string scoping the settings-form nonce.
pub const NONCE_ACTION: &str = "copykit-nonce";

/// Form field carrying the nonce.
pub const NONCE_FIELD: &str = "copykit_nonce";

/// Identifier of the contributed plugin action link.
pub const ACTION_LINK_ID: &str = "settings";

/// Outcome of a settings form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All guards matched and the merged record was persisted.
    Saved,
    /// A guard failed; nothing was read or written.
    Ignored,
}

/// One labeled hyperlink shown on the host's plugin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    /// Stable identifier within the link mapping.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// The settings page: rendering, submission handling, and client hand-off.
pub struct AdminPage {
    settings: SettingsService,
    nonces: NonceRegistry,
}

impl AdminPage {
    /// Construct the page around an injected settings service.
    #[must_use]
    pub fn new(settings: SettingsService) -> Self {
        Self::with_nonces(settings, NonceRegistry::new())
    }

    /// Construct the page with a custom nonce registry.
    #[must_use]
    pub fn with_nonces(settings: SettingsService, nonces: NonceRegistry) -> Self {
        Self { settings, nonces }
    }

    /// Contribute this page's submenu entry to the host registry.
    pub fn register_menu_entry(&self, registry: &mut MenuRegistry) {
        let title = localize(DEFAULT_LOCALE, "Copy to Clipboard");
        registry.add(MenuEntry {
            parent: MenuParent::Settings,
            page_title: title.clone(),
            menu_title: title,
            capability: Capability::ManageOptions,
            slug: PAGE_SLUG.to_string(),
        });
    }

    /// Process a settings form submission.
    ///
    /// Three guards, all required: the request targets this page, the caller
    /// holds the manage capability, and the anti-forgery token is valid. Any
    /// failure is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error only when the settings store itself fails.
    pub async fn handle_submit(&self, request: &AdminRequest) -> SettingsResult<SubmitOutcome> {
        let targets_page = request
            .page
            .as_deref()
            .is_some_and(|page| page.contains(PAGE_SLUG));
        if !targets_page {
            return Ok(SubmitOutcome::Ignored);
        }

        if !request.capability.can_manage() {
            debug!("settings submission ignored: caller lacks manage capability");
            return Ok(SubmitOutcome::Ignored);
        }

        let nonce_valid = request
            .nonce
            .as_deref()
            .is_some_and(|token| self.nonces.verify(token, NONCE_ACTION));
        if !nonce_valid {
            debug!("settings submission ignored: missing or invalid nonce");
            return Ok(SubmitOutcome::Ignored);
        }

        let current = self.settings.get().await?;
        let selector = request
            .fields
            .get("selector")
            .cloned()
            .unwrap_or_else(|| DEFAULT_SELECTOR.to_string());
        let merged = self
            .settings
            .set(&SettingsPatch::with_selector(selector), &current)
            .await?;
        info!(selector = %merged.selector, "settings saved");
        Ok(SubmitOutcome::Saved)
    }

    /// Render the settings page as a full HTML document body.
    ///
    /// The form carries the current selector, a hidden page identifier, and a
    /// freshly issued anti-forgery token; `saved` adds the post-submit notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings store read fails.
    pub async fn render(&self, saved: bool) -> SettingsResult<String> {
        let settings = self.settings.get().await?;
        let nonce = self.nonces.issue(NONCE_ACTION);
        let locale = DEFAULT_LOCALE;

        let mut html = String::new();
        let _ = writeln!(html, r#"<div class="wrap copykit">"#);
        let _ = writeln!(html, "<h1>{}</h1>", localize(locale, "Copy to Clipboard"));
        if saved {
            let _ = writeln!(
                html,
                r#"<div class="notice notice-success"><p>{}</p></div>"#,
                localize(locale, "Settings saved.")
            );
        }
        let _ = writeln!(
            html,
            r#"<form method="post" action="{ADMIN_PAGE_PATH}">"#
        );
        let _ = writeln!(
            html,
            r#"<label for="selector">{}</label>"#,
            localize(locale, "Selector")
        );
        let _ = writeln!(
            html,
            r#"<input type="text" id="selector" name="selector" value="{}" />"#,
            escape_html(&settings.selector)
        );
        let _ = writeln!(
            html,
            r#"<p class="description">{}</p>"#,
            escape_html(&localize(
                locale,
                "Set the selector in which you want to copy the content. Default is the <pre> html tag."
            ))
        );
        let _ = writeln!(
            html,
            r#"<input type="hidden" name="page" value="{PAGE_SLUG}" />"#
        );
        let _ = writeln!(html, r#"<input type="hidden" name="message" value="saved" />"#);
        let _ = writeln!(
            html,
            r#"<input type="hidden" name="{NONCE_FIELD}" value="{nonce}" />"#
        );
        let _ = writeln!(
            html,
            r#"<button type="submit" class="button button-primary">{}</button>"#,
            localize(locale, "Save Changes")
        );
        let _ = writeln!(html, "</form>");
        let _ = writeln!(html, r#"<aside class="copykit-help">"#);
        let _ = writeln!(html, "<h2>{}</h2>", localize(locale, "Getting Started"));
        let _ = writeln!(
            html,
            "<p>{}</p>",
            escape_html(&localize(
                locale,
                "The widget copies the content of every element matching the configured selector. By default it is enabled for the <pre> tag."
            ))
        );
        let _ = writeln!(
            html,
            "<p>{}</p>",
            escape_html(&localize(
                locale,
                "You can change the selector to your own with the Selector setting."
            ))
        );
        let _ = writeln!(html, "</aside>");
        let _ = writeln!(html, "</div>");
        Ok(html)
    }

    /// Build the structured payload handed to the front-end loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings store read fails.
    pub async fn expose_to_client(&self, locale: LocaleCode) -> SettingsResult<ClientPayload> {
        let settings = self.settings.get().await?;
        Ok(ClientPayload {
            selector: BUTTON_ATTACH_SELECTOR.to_string(),
            settings,
            string: UiStrings {
                title: localize(locale, "Copy to Clipboard"),
                copy: localize(locale, "Copy"),
                copied: localize(locale, "Copied!"),
            },
        })
    }

    /// Bundle the script/style pair with the hand-off payload for the
    /// front-end asset loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings store read fails.
    pub async fn enqueue_assets(&self, locale: LocaleCode) -> SettingsResult<AssetBundle> {
        let payload = self.expose_to_client(locale).await?;
        Ok(AssetBundle {
            style: AssetRef::new(STYLE_HANDLE, STYLE_SRC),
            script: AssetRef::new(SCRIPT_HANDLE, SCRIPT_SRC),
            payload,
        })
    }

    /// Return the caller's action links with this page's settings link first.
    ///
    /// Pure: the input slice is left untouched.
    #[must_use]
    pub fn contribute_action_links(&self, existing: &[ActionLink]) -> Vec<ActionLink> {
        let mut links = Vec::with_capacity(existing.len() + 1);
        links.push(ActionLink {
            id: ACTION_LINK_ID.to_string(),
            label: localize(DEFAULT_LOCALE, "Settings"),
            href: format!("{ADMIN_PAGE_PATH}?page={PAGE_SLUG}"),
        });
        links.extend(existing.iter().cloned());
        links
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
