use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt; // for `oneshot`

use tdf_pool::{view::StandingsPage, ViewState};

// ============================================================================
// Request Helpers
// ============================================================================

#[allow(async_fn_in_trait)]
pub trait RouterExt {
    async fn get_json(self, uri: &str) -> (StatusCode, serde_json::Value);
    async fn get_page(self, state: &ViewState) -> StandingsPage;
}

impl RouterExt for Router {
    async fn get_json(self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Sends the view state the way the front-end does, as query parameters
    async fn get_page(self, state: &ViewState) -> StandingsPage {
        let mut params = vec![
            ("view", state.view_mode.to_string()),
            ("search", state.search_text.clone()),
        ];
        if let Some(expanded) = &state.expanded {
            params.push(("expanded", expanded.clone()));
        }
        let uri = format!("/standings?{}", serde_urlencoded::to_string(&params).unwrap());

        let (status, body) = self.get_json(&uri).await;
        assert_eq!(status, StatusCode::OK, "unexpected status for {uri}: {body}");
        serde_json::from_value(body).unwrap()
    }
}
