//! Content handlers
//!
//! Read-only endpoints for the hand-authored site copy.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::catalog::{self, SiteInfo};
use crate::domain::entities::content::{Faq, ReelData, ServiceData, TeamMember, Testimonial};
use crate::error::AppError;
use crate::AppState;

/// GET /api/services
pub async fn list_services() -> Json<&'static [ServiceData]> {
    Json(catalog::SERVICES)
}

/// GET /api/services/:id
pub async fn get_service(Path(id): Path<String>) -> Result<Json<&'static ServiceData>, AppError> {
    catalog::find_service(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
}

/// GET /api/team
pub async fn list_team() -> Json<&'static [TeamMember]> {
    Json(catalog::TEAM)
}

/// GET /api/reels
pub async fn list_reels() -> Json<&'static [ReelData]> {
    Json(catalog::REELS)
}

/// GET /api/testimonials
pub async fn list_testimonials() -> Json<&'static [Testimonial]> {
    Json(catalog::TESTIMONIALS)
}

/// GET /api/faq
pub async fn list_faq() -> Json<&'static [Faq]> {
    Json(catalog::FAQS)
}

/// GET /api/site
///
/// Navigation, section order, and the links every call-to-action uses.
pub async fn get_site(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(SiteInfo::new(
        &state.config.cal_url,
        &state.config.contact_email,
        &state.config.contact_phone,
    ))
}
