use axum::{
    Router,
    body::Body,
    extract::Query,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
    routing::get,
};
use http_body_util::BodyExt;
use meninas_grid::application::{chrome::ChromeService, shell::ShellService};
use meninas_grid::domain::site::PageTitle;
use meninas_grid::presentation::views::render_template_response;
use serde::Deserialize;
use tower::ServiceExt;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TitleQuery {
    title: Option<String>,
}

async fn page(Query(query): Query<TitleQuery>) -> Response {
    let shell = ShellService::new(ChromeService::new());
    let title = PageTitle::from(query.title);
    render_template_response(
        shell.document_template(&title, "<p>conteúdo</p>"),
        StatusCode::OK,
    )
}

fn app() -> Router {
    Router::new().route("/page", get(page))
}

async fn get_body(uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app().oneshot(request).await.expect("router should respond");

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    (status, content_type, body)
}

#[tokio::test]
async fn document_is_served_as_html() {
    let (status, content_type, body) = get_body("/page?title=Sobre").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>Meninas.grid - Sobre</title>"));
    assert!(body.contains("<p>conteúdo</p>"));
    assert!(body.trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn missing_title_query_degrades_to_blank_suffix() {
    let (status, _, body) = get_body("/page").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Meninas.grid - </title>"));
}
