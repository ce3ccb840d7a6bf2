//! Static file serving
//!
//! Maps a request path onto the serving root and produces the response:
//! file bytes, a directory index or listing, a redirect, or an error
//! status. All responses here are pre-CORS; the middleware decorates them.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::handler::{listing, path};
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Serve a GET/HEAD request from the filesystem.
pub async fn serve(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let Some(decoded) = path::percent_decode(ctx.path) else {
        return http::build_404_response();
    };
    let fs_path = path::resolve(&state.root, &decoded);

    let metadata = match fs::metadata(&fs_path).await {
        Ok(m) => m,
        Err(e) => return error_response(&fs_path, &e),
    };

    if metadata.is_dir() {
        // Directory URLs are canonical with a trailing slash, so relative
        // links inside the listing resolve correctly.
        if !ctx.path.ends_with('/') {
            return http::build_redirect_response(&format!("{}/", ctx.path));
        }

        for index in &state.config.http.index_files {
            let candidate = fs_path.join(index);
            let is_file = fs::metadata(&candidate)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
            if is_file {
                return serve_file(ctx, state, &candidate).await;
            }
        }

        return serve_listing(ctx, &fs_path, &decoded).await;
    }

    serve_file(ctx, state, &fs_path).await
}

/// Read a file and build its response, honoring `If-None-Match`.
async fn serve_file(
    ctx: &RequestContext<'_>,
    state: &AppState,
    fs_path: &Path,
) -> Response<Full<Bytes>> {
    // The lexical resolve cannot climb out of the root, but a symlink
    // inside the tree still could; the canonical target must stay under it.
    let canonical = match fs_path.canonicalize() {
        Ok(p) => p,
        Err(e) => return error_response(fs_path, &e),
    };
    if !canonical.starts_with(&state.root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            ctx.path,
            canonical.display()
        ));
        return http::build_404_response();
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) => return error_response(&canonical, &e),
    };

    let etag = cache::generate_etag(&content);
    if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let content_type = mime::content_type_for(&canonical);
    http::build_file_response(&content, &content_type, &etag, ctx.is_head)
}

/// Render the directory listing page.
async fn serve_listing(
    ctx: &RequestContext<'_>,
    dir: &Path,
    url_path: &str,
) -> Response<Full<Bytes>> {
    match listing::render(dir, url_path).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {}",
                dir.display(),
                e
            ));
            http::build_500_response()
        }
    }
}

/// Map a filesystem error onto a response: missing entries are 404,
/// anything else (permissions, I/O) is 500.
fn error_response(fs_path: &Path, err: &std::io::Error) -> Response<Full<Bytes>> {
    if err.kind() == ErrorKind::NotFound {
        http::build_404_response()
    } else {
        logger::log_error(&format!(
            "Failed to read '{}': {}",
            fs_path.display(),
            err
        ));
        http::build_500_response()
    }
}
