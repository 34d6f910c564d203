//! Contact handlers

use axum::{extract::State, Json};

use crate::app::contact::{ContactInquiry, ContactIntents};
use crate::error::AppError;
use crate::AppState;

/// POST /api/contact
///
/// Build pre-filled WhatsApp, mail, and phone links for an inquiry.
pub async fn post_contact(
    State(state): State<AppState>,
    Json(inquiry): Json<ContactInquiry>,
) -> Result<Json<ContactIntents>, AppError> {
    let intents = state.contact.build_intents(&inquiry)?;
    tracing::debug!("Contact intents built for {}", inquiry.name.trim());

    Ok(Json(intents))
}
