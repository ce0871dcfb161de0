use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::{
    adapters::http::{app_state::AppState, routes::request_language},
    app_error::{AppError, AppResult},
    catalog,
    language::UserLanguage,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/plans", get(list_plans))
        .route("/faq", get(list_faq))
        .route("/posts", get(list_posts))
        .route("/posts/{slug}", get(get_post))
}

#[derive(Serialize)]
struct ServiceView {
    id: &'static str,
    icon: &'static str,
    category: &'static str,
    name: &'static str,
    description: &'static str,
    features: Vec<&'static str>,
}

#[derive(Serialize)]
struct PlanView {
    id: &'static str,
    name: &'static str,
    price_monthly: i64,
    price_yearly: i64,
    popular: bool,
    features: Vec<&'static str>,
}

#[derive(Serialize)]
struct FaqView {
    question: &'static str,
    answer: &'static str,
}

#[derive(Serialize)]
struct PostView {
    id: i64,
    slug: &'static str,
    author: &'static str,
    published_at: &'static str,
    title: &'static str,
    excerpt: &'static str,
}

fn post_view(post: &catalog::BlogPost, lang: UserLanguage) -> PostView {
    PostView {
        id: post.id,
        slug: post.slug,
        author: post.author,
        published_at: post.published_at,
        title: post.title.for_lang(lang),
        excerpt: post.excerpt.for_lang(lang),
    }
}

async fn list_services(State(_): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let lang = request_language(&jar);
    let services: Vec<ServiceView> = catalog::services()
        .iter()
        .map(|s| ServiceView {
            id: s.id,
            icon: s.icon,
            category: s.category,
            name: s.name.for_lang(lang),
            description: s.description.for_lang(lang),
            features: s.features.iter().map(|f| f.for_lang(lang)).collect(),
        })
        .collect();
    Json(services)
}

async fn list_plans(State(_): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let lang = request_language(&jar);
    let plans: Vec<PlanView> = catalog::plans()
        .iter()
        .map(|p| PlanView {
            id: p.id,
            name: p.name.for_lang(lang),
            price_monthly: p.price_monthly,
            price_yearly: p.price_yearly,
            popular: p.popular,
            features: p.features.iter().map(|f| f.for_lang(lang)).collect(),
        })
        .collect();
    Json(plans)
}

async fn list_faq(State(_): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let lang = request_language(&jar);
    let entries: Vec<FaqView> = catalog::faq()
        .iter()
        .map(|f| FaqView {
            question: f.question.for_lang(lang),
            answer: f.answer.for_lang(lang),
        })
        .collect();
    Json(entries)
}

async fn list_posts(State(_): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let lang = request_language(&jar);
    let posts: Vec<PostView> = catalog::blog_posts()
        .iter()
        .map(|p| post_view(p, lang))
        .collect();
    Json(posts)
}

async fn get_post(
    State(_): State<AppState>,
    jar: CookieJar,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let lang = request_language(&jar);
    let post = catalog::blog_post_by_slug(&slug).ok_or(AppError::NotFound)?;
    Ok(Json(post_view(post, lang)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::test_utils::build_test_server;

    #[tokio::test]
    async fn services_default_to_vietnamese_and_follow_the_lang_cookie() {
        let server = build_test_server();

        let res = server.get("/api/catalog/services").await;
        res.assert_status(StatusCode::OK);
        let services: Value = res.json();
        assert_eq!(services[0]["name"], "Xếp lịch học tập");

        // Switching the session language re-localizes the catalog.
        let res = server
            .post("/api/session/language")
            .json(&json!({ "language": "en" }))
            .await;
        res.assert_status(StatusCode::OK);

        let res = server.get("/api/catalog/services").await;
        let services: Value = res.json();
        assert_eq!(services[0]["name"], "Schedule Management");
    }

    #[tokio::test]
    async fn post_lookup_by_slug() {
        let server = build_test_server();

        let res = server
            .get("/api/catalog/posts/cach-su-dung-google-calendar")
            .await;
        res.assert_status(StatusCode::OK);
        let post: Value = res.json();
        assert_eq!(post["id"], 2);

        let res = server.get("/api/catalog/posts/missing").await;
        res.assert_status(StatusCode::NOT_FOUND);
    }
}
