use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Stylesheets and other assets embedded at compile time
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct SiteAssets;

/// Serve an embedded asset under `/static/*path`
pub async fn serve_static(Path(path): Path<String>) -> Response {
    serve_asset::<SiteAssets>(&path)
}

fn serve_asset<E: RustEmbed>(path: &str) -> Response {
    let path = path.trim_start_matches('/');

    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
