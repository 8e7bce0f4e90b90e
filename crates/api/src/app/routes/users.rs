use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use subhub_core::{Entity, UserId};
use subhub_infra::{Lookup, StoreError};
use subhub_users::{CreateUser, User, UserKey, UserPatch};

use crate::app::dto::{IdParam, SubscribeRequest};
use crate::app::errors::ApiError;
use crate::app::extract::{ValidJson, ValidPath};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
        .route("/:id/subscribeTo", post(subscribe_to))
        .route("/:id/unsubscribeFrom", post(unsubscribe_from))
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(services.users().find_many().await?))
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> Result<Json<User>, ApiError> {
    let user = find_user(&services, &id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(&id))?;
    Ok(Json(user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    ValidJson(body): ValidJson<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = services.users().create(body).await?;
    tracing::info!(user_id = %user.id(), "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> Result<Json<User>, ApiError> {
    let deleted = services
        .users()
        .delete(&id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(&id))?;
    // Other users' subscription lists may still reference this id.
    tracing::info!(user_id = %id, "user deleted");
    Ok(Json(deleted))
}

pub async fn subscribe_to(
    Extension(services): Extension<Arc<AppServices>>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
    ValidJson(body): ValidJson<SubscribeRequest>,
) -> Result<Json<User>, ApiError> {
    let target = find_user(&services, &id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(&id))?;

    let target_id = target.id().clone();
    services
        .users()
        .modify(
            &body.user_id,
            Box::new(move |subscriber: &mut User| subscriber.subscribe_to(&target_id)),
        )
        .await?
        .ok_or_else(|| ApiError::subscriber_not_found(&body.user_id))?;

    tracing::info!(target_id = %id, subscriber_id = %body.user_id, "subscribed");
    Ok(Json(target))
}

pub async fn unsubscribe_from(
    Extension(services): Extension<Arc<AppServices>>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
    ValidJson(body): ValidJson<SubscribeRequest>,
) -> Result<Json<User>, ApiError> {
    let target = find_user(&services, &id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(&id))?;

    let target_id = target.id().clone();
    services
        .users()
        .modify(
            &body.user_id,
            Box::new(move |subscriber: &mut User| subscriber.unsubscribe_from(&target_id)),
        )
        .await?
        .ok_or_else(|| ApiError::subscriber_not_found(&body.user_id))?;

    tracing::info!(target_id = %id, subscriber_id = %body.user_id, "unsubscribed");
    Ok(Json(target))
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
    ValidJson(patch): ValidJson<UserPatch>,
) -> Result<Json<User>, ApiError> {
    if find_user(&services, &id).await?.is_none() {
        return Err(ApiError::user_not_found(&id));
    }

    // A delete can land between the existence check and the write.
    let updated = services
        .users()
        .change(&id, patch)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::user_not_found(&id),
            e => e.into(),
        })?;
    Ok(Json(updated))
}

async fn find_user(services: &AppServices, id: &UserId) -> Result<Option<User>, StoreError> {
    services
        .users()
        .find_one(Lookup::new(UserKey::Id, id.as_str()))
        .await
}
