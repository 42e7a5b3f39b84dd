//! HTTP routes for list endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::app::AppState;

use super::handlers::{
    add_item, api_add_item, api_list_items, delete_list, my_lists, new_list, share_list,
    view_list,
};

/// List pages, mounted at `/lists`.
pub fn lists_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(new_list))
        .route("/users/:email/", get(my_lists))
        .route("/:id/", get(view_list).post(add_item))
        .route("/:id/share", post(share_list))
        .route("/:id/delete", post(delete_list))
}

/// Item API, mounted at `/api/lists`.
pub fn item_api_routes() -> Router<AppState> {
    Router::new().route("/:id/items/", get(api_list_items).post(api_add_item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use crate::adapters::auth::Argon2PasswordHasher;
    use crate::adapters::email::TracingEmailSender;
    use crate::adapters::http::app::routes;
    use crate::adapters::http::cookies::SessionCookie;
    use crate::config::AuthConfig;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::domain::list::{Item, List, EMPTY_ITEM_ERROR};

    fn state() -> AppState {
        AppState::in_memory(
            &AuthConfig::default(),
            Arc::new(Argon2PasswordHasher::with_params(256, 1, 1)),
            Arc::new(TracingEmailSender::new()),
            SessionCookie::new("sessionid", 60, false),
        )
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn seeded_list(state: &AppState, owner: Option<UserId>, texts: &[&str]) -> List {
        let (list, first) = List::create_new(texts[0], owner).unwrap();
        state.lists.create_with_first_item(&list, &first).await.unwrap();
        for text in &texts[1..] {
            state
                .items
                .save(&Item::new(Some(*list.id()), *text))
                .await
                .unwrap();
        }
        list
    }

    #[tokio::test]
    async fn new_list_redirects_to_list_url() {
        let state = state();

        let response = routes(state.clone())
            .oneshot(post_form("/lists/new", "text=Buy+peacock+feathers"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("/lists/"));
        assert!(location.ends_with('/'));
    }

    #[tokio::test]
    async fn new_list_with_empty_text_is_400() {
        let response = routes(state())
            .oneshot(post_form("/lists/new", "text="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["errors"]["text"][0], EMPTY_ITEM_ERROR);
    }

    #[tokio::test]
    async fn view_list_shows_items_in_order() {
        let state = state();
        let list = seeded_list(&state, None, &["one", "two", "three"]).await;

        let response = routes(state)
            .oneshot(get(&list.absolute_url()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["name"], "one");
        let texts: Vec<_> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["text"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn unknown_list_is_404() {
        let response = routes(state())
            .oneshot(get(&format!("/lists/{}/", crate::domain::foundation::ListId::new())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn private_list_is_403_for_anonymous_visitor() {
        let state = state();
        let list = seeded_list(&state, Some(UserId::new()), &["secret"]).await;

        let response = routes(state)
            .oneshot(get(&list.absolute_url()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn duplicate_item_on_page_is_400() {
        let state = state();
        let list = seeded_list(&state, None, &["milk"]).await;

        let response = routes(state)
            .oneshot(post_form(&list.absolute_url(), "text=milk"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn api_lists_items_as_id_and_text() {
        let state = state();
        let list = seeded_list(&state, None, &["a", "b"]).await;

        let response = routes(state)
            .oneshot(get(&format!("/api/lists/{}/items/", list.id())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["text"], "a");
        assert!(items[0]["id"].is_string());
    }

    #[tokio::test]
    async fn api_post_creates_item() {
        let state = state();
        let list = seeded_list(&state, None, &["a"]).await;

        let response = routes(state)
            .oneshot(post_form(&format!("/api/lists/{}/items/", list.id()), "text=b"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json(response).await["text"], "b");
    }

    #[tokio::test]
    async fn api_post_duplicate_returns_error_body() {
        let state = state();
        let list = seeded_list(&state, None, &["a"]).await;

        let response = routes(state)
            .oneshot(post_form(&format!("/api/lists/{}/items/", list.id()), "text=a"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json(response).await["error"],
            crate::domain::list::DUPLICATE_ITEM_ERROR
        );
    }

    #[tokio::test]
    async fn delete_requires_login() {
        let state = state();
        let list = seeded_list(&state, None, &["a"]).await;

        let response = routes(state)
            .oneshot(post_form(&format!("/lists/{}/delete", list.id()), ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn owner_can_delete_with_bearer_token() {
        let state = state();
        let owner = AuthenticatedUser::new(UserId::new(), "owner@example.com");
        let token = state.sessions.create(&owner).await.unwrap();
        let list = seeded_list(&state, Some(owner.id), &["a"]).await;

        let response = routes(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/lists/{}/delete", list.id()))
                    .header(header::AUTHORIZATION, format!("Bearer {}", token.as_str()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(state.lists.find_by_id(list.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn my_lists_of_someone_else_is_403() {
        let state = state();
        let viewer = AuthenticatedUser::new(UserId::new(), "viewer@example.com");
        let token = state.sessions.create(&viewer).await.unwrap();

        let response = routes(state)
            .oneshot(
                Request::builder()
                    .uri("/lists/users/other@example.com/")
                    .header(header::COOKIE, format!("sessionid={}", token.as_str()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
