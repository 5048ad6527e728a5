use axum::extract::Request;
use axum::http::Uri;

/// Paths served from the static root as-is. Everything else belongs to the
/// client-side router and gets the entry document.
pub const PRESERVED_PREFIXES: [&str; 3] = ["/static", "/favicon.svg", "/api"];

pub fn is_preserved(path: &str) -> bool {
    PRESERVED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Rewrites non-asset requests to the entry document so that deep links
/// like `/project/keelra` survive a refresh.
pub fn rewrite_request(mut req: Request, entry_document: &Uri) -> Request {
    let path = req.uri().path();
    if is_preserved(path) {
        return req;
    }
    tracing::debug!("SPA fallback: {} -> {}", path, entry_document);
    *req.uri_mut() = entry_document.clone();
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(path: &str) -> Request {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[test]
    fn asset_and_api_paths_are_preserved() {
        assert!(is_preserved("/static/frontend.js"));
        assert!(is_preserved("/favicon.svg"));
        assert!(is_preserved("/api/health"));
    }

    #[test]
    fn client_routes_are_not_preserved() {
        for path in ["/", "/work", "/project/keelra", "/blog/seo-king", "/contact", "/nope"] {
            assert!(!is_preserved(path), "{path} should fall back");
        }
    }

    #[test]
    fn fallback_replaces_the_uri() {
        let entry: Uri = "/index.html".parse().unwrap();
        let rewritten = rewrite_request(request("/project/does-not-exist?ref=x"), &entry);
        assert_eq!(rewritten.uri().path(), "/index.html");
        assert_eq!(rewritten.uri().query(), None);
    }

    #[test]
    fn preserved_request_is_untouched() {
        let entry: Uri = "/index.html".parse().unwrap();
        let rewritten = rewrite_request(request("/static/styles.css?v=2"), &entry);
        assert_eq!(rewritten.uri().path(), "/static/styles.css");
        assert_eq!(rewritten.uri().query(), Some("v=2"));
    }
}
