use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 300;

pub fn router() -> Router {
    Router::new().route("/:width/:height", get(retrieve_placeholder))
}

pub async fn retrieve_placeholder(
    Path((width, height)): Path<(String, String)>,
) -> impl IntoResponse {
    let width = parse_dimension(&width, DEFAULT_WIDTH);
    let height = parse_dimension(&height, DEFAULT_HEIGHT);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        placeholder_svg(width, height),
    )
}

fn parse_dimension(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => default,
        Ok(n) => n,
    }
}

pub fn placeholder_svg(width: u32, height: u32) -> String {
    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#f3f4f6"/>
  <rect width="100%" height="100%" fill="url(#gradient)"/>
  <defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#e5e7eb;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#d1d5db;stop-opacity:1" />
    </linearGradient>
  </defs>
  <text x="50%" y="50%" font-family="Arial, sans-serif" font-size="24" fill="#9ca3af" text-anchor="middle" dy=".3em">{width} × {height}</text>
</svg>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_dimensions_use_defaults() {
        assert_eq!(parse_dimension("abc", DEFAULT_WIDTH), 400);
        assert_eq!(parse_dimension("0", DEFAULT_HEIGHT), 300);
        assert_eq!(parse_dimension("640", DEFAULT_WIDTH), 640);
    }

    #[test]
    fn label_shows_dimensions() {
        let svg = placeholder_svg(800, 600);
        assert!(svg.starts_with(r#"<svg width="800" height="600""#));
        assert!(svg.contains("800 × 600"));
    }
}
