//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use roster_app::ports::UserRepository;
use roster_domain::id::UserId;
use roster_domain::user::{User, UserPayload};

use crate::error::ApiError;
use crate::state::AppState;

const COLLECTION_METHODS: &str = "GET, POST, OPTIONS";
const ITEM_METHODS: &str = "GET, PUT, DELETE, OPTIONS";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint. The body is the new id.
pub enum CreateResponse {
    Created(Json<UserId>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
///
/// The body is the number of rows affected; `0` means the id did not exist.
pub enum AffectedResponse {
    Ok(Json<u64>),
}

impl IntoResponse for AffectedResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the `OPTIONS` endpoints.
pub enum OptionsResponse {
    NoContent(&'static str),
}

impl IntoResponse for OptionsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent(allow) => (
                StatusCode::NO_CONTENT,
                [(header::ALLOW, HeaderValue::from_static(allow))],
            )
                .into_response(),
        }
    }
}

/// `GET /user`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /user/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<UserId>,
) -> Result<GetResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = state.user_service.get_user(id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /user`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(payload): Json<UserPayload>,
) -> Result<CreateResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let id = state.user_service.create_user(payload).await?;
    Ok(CreateResponse::Created(Json(id)))
}

/// `PUT /user/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<UserId>,
    Json(payload): Json<UserPayload>,
) -> Result<AffectedResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let affected = state.user_service.update_user(id, payload).await?;
    Ok(AffectedResponse::Ok(Json(affected)))
}

/// `DELETE /user/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<UserId>,
) -> Result<AffectedResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let affected = state.user_service.delete_user(id).await?;
    Ok(AffectedResponse::Ok(Json(affected)))
}

/// `OPTIONS /user`
pub async fn collection_options() -> OptionsResponse {
    OptionsResponse::NoContent(COLLECTION_METHODS)
}

/// `OPTIONS /user/{id}`
pub async fn item_options() -> OptionsResponse {
    OptionsResponse::NoContent(ITEM_METHODS)
}
