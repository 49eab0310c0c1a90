//! Handlers translating web requests into admin page method calls.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Extension, Form, Json,
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::error;

use crate::assets::AssetBundle;
use crate::http::errors::AdminError;
use crate::http::router::AdminState;
use crate::i18n::locale_from_headers;
use crate::page::{ADMIN_PAGE_PATH, SubmitOutcome};
use crate::request::{AdminRequest, Capability};

/// Form body accepted by the settings page POST.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsForm {
    page: Option<String>,
    selector: Option<String>,
    #[serde(rename = "copykit_nonce")]
    nonce: Option<String>,
}

pub(crate) async fn settings_page(
    State(state): State<Arc<AdminState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AdminError> {
    let saved = params.get("message").is_some_and(|value| value == "saved");
    state.page.render(saved).await.map(Html).map_err(|err| {
        error!(error = %err, "failed to render settings page");
        AdminError::internal("failed to render settings page")
    })
}

pub(crate) async fn settings_submit(
    State(state): State<Arc<AdminState>>,
    Extension(capability): Extension<Capability>,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect, AdminError> {
    let mut request = AdminRequest::new(capability);
    if let Some(page) = form.page {
        request = request.with_page(page);
    }
    if let Some(nonce) = form.nonce {
        request = request.with_nonce(nonce);
    }
    if let Some(selector) = form.selector {
        request = request.with_field("selector", selector);
    }

    let outcome = state.page.handle_submit(&request).await.map_err(|err| {
        error!(error = %err, "failed to persist settings");
        AdminError::internal("failed to persist settings")
    })?;

    let target = match outcome {
        SubmitOutcome::Saved => format!("{ADMIN_PAGE_PATH}?message=saved"),
        SubmitOutcome::Ignored => ADMIN_PAGE_PATH.to_string(),
    };
    Ok(Redirect::to(&target))
}

pub(crate) async fn boot_payload(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
) -> Result<Json<AssetBundle>, AdminError> {
    let locale = locale_from_headers(&headers);
    state
        .page
        .enqueue_assets(locale)
        .await
        .map(Json)
        .map_err(|err| {
            error!(error = %err, "failed to build client payload");
            AdminError::internal("failed to build client payload")
        })
}
