//! Event pass cart and order handlers.
//!
//! ```text
//! GET    /api/cart/{userId}
//! POST   /api/cart/{userId}/items
//! DELETE /api/cart/{userId}/items/{eventId}
//! DELETE /api/cart/{userId}
//! POST   /api/cart/{userId}/checkout
//! GET    /api/orders/{userId}
//! ```

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CartView, EventId, Order, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SuccessResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Cart item payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    /// Event whose pass is added.
    pub event_id: Option<EventId>,
}

/// Fetch the user's active cart.
#[utoipa::path(
    get,
    path = "/api/cart/{userId}",
    params(("userId" = u64, Path, description = "User identifier")),
    responses((status = 200, description = "Cart items and total", body = CartView)),
    tags = ["cart"],
    operation_id = "getCart"
)]
#[get("/cart/{user_id}")]
pub async fn get_cart(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<CartView>> {
    let view = state.carts.cart(UserId::new(path.into_inner())).await?;
    Ok(web::Json(view))
}

/// Add one pass for an event.
#[utoipa::path(
    post,
    path = "/api/cart/{userId}/items",
    params(("userId" = u64, Path, description = "User identifier")),
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartView),
        (status = 400, description = "Missing field or event already in cart", body = ErrorSchema),
        (status = 404, description = "User or event not found", body = ErrorSchema)
    ),
    tags = ["cart"],
    operation_id = "addCartItem"
)]
#[post("/cart/{user_id}/items")]
pub async fn add_item(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<AddItemRequest>,
) -> ApiResult<web::Json<CartView>> {
    let event_id = require(payload.into_inner().event_id, FieldName::new("eventId"))?;
    let view = state
        .carts
        .add_item(UserId::new(path.into_inner()), event_id)
        .await?;
    Ok(web::Json(view))
}

/// Drop the pass for an event. Absent items are ignored.
#[utoipa::path(
    delete,
    path = "/api/cart/{userId}/items/{eventId}",
    params(
        ("userId" = u64, Path, description = "User identifier"),
        ("eventId" = u64, Path, description = "Event identifier")
    ),
    responses((status = 200, description = "Updated cart", body = CartView)),
    tags = ["cart"],
    operation_id = "removeCartItem"
)]
#[delete("/cart/{user_id}/items/{event_id}")]
pub async fn remove_item(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
) -> ApiResult<web::Json<CartView>> {
    let (user_id, event_id) = path.into_inner();
    let view = state
        .carts
        .remove_item(UserId::new(user_id), EventId::new(event_id))
        .await?;
    Ok(web::Json(view))
}

/// Empty the active cart.
#[utoipa::path(
    delete,
    path = "/api/cart/{userId}",
    params(("userId" = u64, Path, description = "User identifier")),
    responses((status = 200, description = "Cart cleared", body = SuccessResponse)),
    tags = ["cart"],
    operation_id = "clearCart"
)]
#[delete("/cart/{user_id}")]
pub async fn clear_cart(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<SuccessResponse>> {
    state.carts.clear(UserId::new(path.into_inner())).await?;
    Ok(web::Json(SuccessResponse::OK))
}

/// Turn the active cart into a pending order.
#[utoipa::path(
    post,
    path = "/api/cart/{userId}/checkout",
    params(("userId" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Pending order", body = Order),
        (status = 400, description = "Cart is empty", body = ErrorSchema)
    ),
    tags = ["cart"],
    operation_id = "checkoutCart"
)]
#[post("/cart/{user_id}/checkout")]
pub async fn checkout(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Order>> {
    let order = state.carts.checkout(UserId::new(path.into_inner())).await?;
    Ok(web::Json(order))
}

/// List the user's orders, oldest first.
#[utoipa::path(
    get,
    path = "/api/orders/{userId}",
    params(("userId" = u64, Path, description = "User identifier")),
    responses((status = 200, description = "Orders", body = [Order])),
    tags = ["cart"],
    operation_id = "listOrders"
)]
#[get("/orders/{user_id}")]
pub async fn list_orders(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Order>>> {
    let orders = state.carts.orders(UserId::new(path.into_inner())).await?;
    Ok(web::Json(orders))
}
