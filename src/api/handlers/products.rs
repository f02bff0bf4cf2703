//! Product request handlers.

use axum::{
    Json,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{
    CreateProductRequest, ErrorResponse, MessageResponse, ProductResponse, UpdateStatusRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_products, create_product))
        .routes(routes!(update_product, delete_product))
}

/// GET /products - List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<ProductResponse>)
    )
)]
async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.services.products.list_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /products - Add a product
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = MessageResponse),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse)
    )
)]
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let new_product = req.into_new_product()?;
    state.services.products.create_product(new_product).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product added successfully")),
    ))
}

/// PATCH /products/:id - Update product status
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated, or nothing to update", body = MessageResponse),
        (status = 400, description = "Malformed body or null status", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Request,
) -> AppResult<Json<MessageResponse>> {
    // An unknown id is 404 whatever the body looks like
    state.services.products.get_product(id).await?;

    let ValidatedJson(req) =
        ValidatedJson::<UpdateStatusRequest>::from_request(request, &state).await?;
    state
        .services
        .products
        .update_status(id, req.status()?)
        .await?;
    Ok(Json(MessageResponse::new("Product updated successfully")))
}

/// DELETE /products/:id - Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.products.delete_product(id).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}
