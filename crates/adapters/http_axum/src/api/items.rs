//! JSON REST handlers for items.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use shoewash_app::ports::ItemRepository;
use shoewash_domain::id::ItemId;
use shoewash_domain::item::{Item, ItemChanges, ItemFilter, NewItem};

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation returned after a delete.
pub const DELETED_MESSAGE: &str = "Item deleted successfully";

/// Request body for creating an item.
///
/// Fields are optional at the serde level so that a missing field reaches
/// domain validation instead of failing deserialization. Unknown fields,
/// including `status`, are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    pub customer_name: Option<String>,
    pub shoe_type: Option<String>,
    pub service_type: Option<String>,
}

/// Request body for updating an item. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub customer_name: Option<String>,
    pub shoe_type: Option<String>,
    pub service_type: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            customer_name: req.customer_name,
            shoe_type: req.shoe_type,
            service_type: req.service_type,
            status: req.status,
        }
    }
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

impl From<ListQuery> for ItemFilter {
    fn from(query: ListQuery) -> Self {
        match query.status {
            Some(status) if !status.is_empty() => Self::by_status(status),
            _ => Self::all(),
        }
    }
}

/// Body returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Item>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Item>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(DeleteBody {
                message: DELETED_MESSAGE,
            })
            .into_response(),
        }
    }
}

/// `GET /items?status=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let items = state.item_service.list_items(query.into()).await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `GET /items/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = ItemId::from_str(&id)?;
    let item = state.item_service.get_item(item_id).await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /items`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = NewItem::builder();
    if let Some(customer_name) = req.customer_name {
        builder = builder.customer_name(customer_name);
    }
    if let Some(shoe_type) = req.shoe_type {
        builder = builder.shoe_type(shoe_type);
    }
    if let Some(service_type) = req.service_type {
        builder = builder.service_type(service_type);
    }

    let item = builder.build()?;
    let created = state.item_service.create_item(item).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /items/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = ItemId::from_str(&id)?;
    let Json(req) = payload?;
    let updated = state
        .item_service
        .update_item(item_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /items/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item_id = ItemId::from_str(&id)?;
    state.item_service.delete_item(item_id).await?;
    Ok(DeleteResponse::Deleted)
}
