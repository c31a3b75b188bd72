use std::sync::Arc;

use auth_gate::AuthUser;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use crate::api::rest::dto::{CreateTemplateReq, MeDto, TemplateDto};
use crate::api::rest::error::ApiError;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// Return the authenticated caller's identity
#[tracing::instrument(skip(user), fields(user.id = %user.id()))]
pub(crate) async fn me(AuthUser(user): AuthUser) -> Json<MeDto> {
    Json(MeDto {
        id: user.id().to_owned(),
    })
}

/// List the caller's invoice templates
#[tracing::instrument(skip(svc, user), fields(user.id = %user.id()))]
pub(crate) async fn list_templates(
    AuthUser(user): AuthUser,
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<TemplateDto>>, DomainError> {
    let templates = svc.list_templates(user.id()).await?;
    Ok(Json(templates.into_iter().map(TemplateDto::from).collect()))
}

/// Get one of the caller's invoice templates
///
/// An id that is not a UUID cannot name a stored template and answers 404.
#[tracing::instrument(skip(svc, user), fields(user.id = %user.id()))]
pub(crate) async fn get_template(
    AuthUser(user): AuthUser,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDto>, DomainError> {
    let id = Uuid::parse_str(&id).map_err(|_| DomainError::NotFound)?;
    let template = svc.get_template(user.id(), id).await?;
    Ok(Json(template.into()))
}

/// Create an invoice template for the caller
#[tracing::instrument(skip(svc, user, payload), fields(user.id = %user.id()))]
pub(crate) async fn create_template(
    AuthUser(user): AuthUser,
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<CreateTemplateReq>, JsonRejection>,
) -> Result<(StatusCode, Json<TemplateDto>), ApiError> {
    let Json(req) = payload?;
    let created = svc.create_template(user.id(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
