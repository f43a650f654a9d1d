use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

mod routes;
mod state;

pub use state::AppState;

use crate::error::Result;
use routes::{announcements_handler, home_handler, recipes_handler};

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(home_handler))
        .route("/announcements", get(announcements_handler))
        .route("/recipes", get(recipes_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(listen_addr: &str, state: Arc<AppState>) -> Result<()> {
    let app = router(state);

    info!("Binding to {listen_addr}");
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::db::Repository;
    use crate::models::{AnnouncementRecord, NewAnnouncement, NewRecipe, RecipeRecord};

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn empty_app() -> (Router, Arc<AppState>) {
        let state = AppState::new(Repository::open_in_memory().await.unwrap());
        (router(state.clone()), state)
    }

    #[tokio::test]
    async fn root_names_the_endpoints() {
        let (app, _) = empty_app().await;

        let (status, body) = fetch(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("/announcements"));
        assert!(text.contains("/recipes"));
    }

    #[tokio::test]
    async fn empty_store_lists_are_empty_arrays() {
        let (app, _) = empty_app().await;

        let (status, body) = fetch(app.clone(), "/recipes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));

        let (status, body) = fetch(app, "/announcements").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn announcements_use_lowercase_field_names() {
        let (app, state) = empty_app().await;
        let record: AnnouncementRecord = serde_json::from_value(json!({
            "Type": "Assignment", "Title": "Essay", "Description": "500 words",
            "Due_Date": "2024-10-01", "Due_Time": "08:00", "Attachments": "", "Links": "",
            "Assignment": "Essay", "Max_Points": "50", "Item_ID": "7", "Post_ID": "8",
            "Alternate_Link": "", "Teacher": "Ms. Ortiz", "Course": "English",
            "Assignment_Link": "https://class/essay"
        }))
        .unwrap();
        state
            .repository
            .insert_announcements(vec![NewAnnouncement::new(record)])
            .await
            .unwrap();

        let (status, body) = fetch(app, "/announcements").await;

        assert_eq!(status, StatusCode::OK);
        let list: Value = serde_json::from_slice(&body).unwrap();
        let first = &list[0];
        assert_eq!(first["type"], "Assignment");
        assert_eq!(first["teacher"], "Ms. Ortiz");
        assert_eq!(first["assignment_link"], "https://class/essay");
        assert!(first["id"].is_i64());
        assert!(first["uid"].is_string());
    }

    #[tokio::test]
    async fn recipe_ingredients_are_structured_json() {
        let (app, state) = empty_app().await;
        let ingredients = json!([{"name": "rice", "quantity": "2 cups"}, {"name": "water"}]);
        let record: RecipeRecord = serde_json::from_value(json!({
            "recipe_name": "Rice", "recipe_photo": "", "recipe_url": "u9", "Calories": "300",
            "Carbohydrates": "", "Net_Carbs": "", "Fat": "", "Protein": "", "Sodium": "",
            "Prep_Time": "", "Difficulty_Level": "", "Spice_Level": "",
            "Ingredients": ingredients.clone()
        }))
        .unwrap();
        state.repository.insert_recipe(NewRecipe::new(record)).await.unwrap();

        let (status, body) = fetch(app, "/recipes").await;

        assert_eq!(status, StatusCode::OK);
        let list: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list[0]["ingredients"], ingredients);
        assert_eq!(list[0]["recipe_name"], "Rice");
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let (app, _) = empty_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/recipes")
                    .header(header::ORIGIN, "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn undecodable_ingredients_surface_as_500() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.db");
        let path = path.to_str().unwrap().to_string();

        let repo = Repository::new(&path).await.unwrap();
        let record: RecipeRecord = serde_json::from_value(json!({
            "recipe_name": "Bad", "recipe_photo": "", "recipe_url": "u0", "Calories": "",
            "Carbohydrates": "", "Net_Carbs": "", "Fat": "", "Protein": "", "Sodium": "",
            "Prep_Time": "", "Difficulty_Level": "", "Spice_Level": "", "Ingredients": []
        }))
        .unwrap();
        repo.insert_recipe(NewRecipe::new(record)).await.unwrap();

        let raw = rusqlite::Connection::open(&path).unwrap();
        raw.execute("UPDATE recipes SET ingredients = 'not json'", []).unwrap();
        drop(raw);

        let (status, _) = fetch(router(AppState::new(repo)), "/recipes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
