use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use intake_core::models::schema::FormSchema;
use intake_forms::{all_forms, get_form};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct FormSummary {
    id: String,
    title: String,
    specialty: String,
}

pub async fn list_forms() -> Json<Vec<FormSummary>> {
    let forms: Vec<FormSummary> = all_forms()
        .iter()
        .map(|f| FormSummary {
            id: f.form_type().to_string(),
            title: f.title().to_string(),
            specialty: f.specialty().to_string(),
        })
        .collect();
    Json(forms)
}

pub async fn get_form_detail(Path(id): Path<String>) -> Result<Json<FormSchema>, ApiError> {
    let form =
        get_form(&id).ok_or_else(|| ApiError::NotFound(format!("form not found: {id}")))?;
    Ok(Json(form.schema().clone()))
}
