//! HTTP handlers for list endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::adapters::http::app::AppState;
use crate::adapters::http::dto::{ErrorResponse, FormResponse};
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::handlers::{
    AddItemCommand, CreateListCommand, DeleteListCommand, ListItemsQuery, MyListsQuery,
    ShareListCommand, ViewListQuery,
};
use crate::domain::foundation::ListId;
use crate::domain::list::ListError;

use super::dto::{
    ItemApiError, ItemForm, ItemResponse, ListDetailResponse, MyListsResponse, ShareForm,
};

/// Unparseable ids name no list.
fn parse_list_id(raw: &str) -> Result<ListId, Response> {
    raw.parse::<ListId>().map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("List", raw)),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Pages
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists/new - Create a list from its first item
pub async fn new_list(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Form(form): Form<ItemForm>,
) -> Response {
    let rendered = FormResponse::new("new_list").with_value("text", form.text.clone());
    let cmd = CreateListCommand {
        first_item_text: form.text,
        owner: auth.user_id(),
    };

    match state.create_list_handler().handle(cmd).await {
        Ok(result) => Redirect::to(&result.list.absolute_url()).into_response(),
        Err(e) => handle_form_error(rendered, "text", e),
    }
}

/// GET /lists/:id/ - The list page
pub async fn view_list(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(list_id): Path<String>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ViewListQuery {
        list_id,
        user_id: auth.user_id(),
    };

    match state.view_list_handler().handle(query).await {
        Ok(detail) => (StatusCode::OK, Json(ListDetailResponse::from(detail))).into_response(),
        Err(e) => handle_list_error(e),
    }
}

/// POST /lists/:id/ - Append an item
pub async fn add_item(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(list_id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let rendered = FormResponse::new("item").with_value("text", form.text.clone());
    let cmd = AddItemCommand {
        list_id,
        text: form.text,
        user_id: auth.user_id(),
    };

    match state.add_item_handler().handle(cmd).await {
        Ok(_) => Redirect::to(&format!("/lists/{}/", list_id)).into_response(),
        Err(e) => handle_form_error(rendered, "text", e),
    }
}

/// POST /lists/:id/share - Share with a registered user
pub async fn share_list(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(list_id): Path<String>,
    Form(form): Form<ShareForm>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let rendered = FormResponse::new("share").with_value("sharee", form.sharee.clone());
    let cmd = ShareListCommand {
        list_id,
        sharee_email: form.sharee,
        user_id: auth.user_id(),
    };

    match state.share_list_handler().handle(cmd).await {
        Ok(list) => Redirect::to(&list.absolute_url()).into_response(),
        Err(e) => handle_form_error(rendered, "sharee", e),
    }
}

/// POST /lists/:id/delete - Owner deletes the list
pub async fn delete_list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(list_id): Path<String>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteListCommand {
        list_id,
        user_id: user.id,
    };

    match state.delete_list_handler().handle(cmd).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => handle_list_error(e),
    }
}

/// GET /lists/users/:email/ - Lists owned by and shared with the user
pub async fn my_lists(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(email): Path<String>,
) -> Response {
    let query = MyListsQuery {
        email,
        viewer: user,
    };

    match state.my_lists_handler().handle(query).await {
        Ok(lists) => (StatusCode::OK, Json(MyListsResponse::from(lists))).into_response(),
        Err(e) => handle_list_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Item API
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/lists/:id/items/ - Items in creation order
pub async fn api_list_items(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(list_id): Path<String>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ListItemsQuery {
        list_id,
        user_id: auth.user_id(),
    };

    match state.list_items_handler().handle(query).await {
        Ok(items) => {
            let response: Vec<ItemResponse> = items.iter().map(ItemResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_list_error(e),
    }
}

/// POST /api/lists/:id/items/ - Append an item
pub async fn api_add_item(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(list_id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Response {
    let list_id = match parse_list_id(&list_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddItemCommand {
        list_id,
        text: form.text,
        user_id: auth.user_id(),
    };

    match state.add_item_handler().handle(cmd).await {
        Ok(item) => (StatusCode::CREATED, Json(ItemResponse::from(&item))).into_response(),
        Err(e) if is_input_error(&e) => (
            StatusCode::BAD_REQUEST,
            Json(ItemApiError { error: e.message() }),
        )
            .into_response(),
        Err(e) => handle_list_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Errors caused by what the user typed, as opposed to where they are.
fn is_input_error(error: &ListError) -> bool {
    matches!(
        error,
        ListError::ValidationFailed { .. } | ListError::DuplicateItem | ListError::ShareeNotFound(_)
    )
}

/// Input errors re-render the form under `field`; the rest map by status.
fn handle_form_error(form: FormResponse, field: &str, error: ListError) -> Response {
    if is_input_error(&error) {
        let form = form.with_error(field, error.message());
        return (StatusCode::BAD_REQUEST, Json(form)).into_response();
    }
    handle_list_error(error)
}

fn handle_list_error(error: ListError) -> Response {
    match error {
        ListError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("List", &id.to_string())),
        )
            .into_response(),
        ListError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Permission denied")),
        )
            .into_response(),
        ListError::ValidationFailed { .. }
        | ListError::DuplicateItem
        | ListError::ShareeNotFound(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ListError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "list request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
