use std::collections::BTreeMap;

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::i18n::{catalog, Language};

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub language: Language,
    pub messages: BTreeMap<&'static str, BTreeMap<&'static str, &'static str>>,
}

/// GET /api/v1/i18n/:lang
pub async fn handle_get_translations(
    Path(lang): Path<String>,
) -> Result<Json<TranslationsResponse>, AppError> {
    let language = Language::from_code(&lang)
        .ok_or_else(|| AppError::NotFound(format!("Language '{lang}' is not supported")))?;
    Ok(Json(TranslationsResponse {
        language,
        messages: catalog(language),
    }))
}
