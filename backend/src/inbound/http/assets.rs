//! Static frontend assets served from the public directory.
//!
//! `GET /` returns `index.html`; any other GET that no route claims is looked
//! up relative to the same directory. Lookups go through a `cap_std` [`Dir`]
//! handle, so `..` segments and absolute paths cannot escape it.

use std::io;
use std::path::Path;
use std::sync::Arc;

use actix_web::http::{Method, header};
use actix_web::{HttpRequest, HttpResponse, get, web};
use cap_std::{ambient_authority, fs::Dir};
use tracing::{debug, error};

/// Landing page served for `/`.
pub const INDEX_FILE: &str = "index.html";

/// Capability handle on the public asset directory.
#[derive(Clone)]
pub struct PublicAssets {
    dir: Arc<Dir>,
}

impl PublicAssets {
    /// Open `path` as the asset root.
    ///
    /// # Errors
    /// Returns the I/O error when the directory cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path.as_ref(), ambient_authority())?;
        Ok(Self { dir: Arc::new(dir) })
    }

    async fn read(&self, relative: String) -> io::Result<Vec<u8>> {
        let dir = Arc::clone(&self.dir);
        web::block(move || dir.read(relative))
            .await
            .map_err(io::Error::other)?
    }

    async fn respond(&self, relative: String) -> HttpResponse {
        let content_type = content_type_for(&relative);
        match self.read(relative.clone()).await {
            Ok(bytes) => HttpResponse::Ok()
                .insert_header((header::CONTENT_TYPE, content_type))
                .body(bytes),
            Err(err) if is_missing(&err) => {
                debug!(path = %relative, error = %err, "static asset not found");
                HttpResponse::NotFound().finish()
            }
            Err(err) => {
                error!(path = %relative, error = %err, "failed to read static asset");
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

fn is_missing(err: &io::Error) -> bool {
    // cap_std reports escape attempts as PermissionDenied.
    matches!(
        err.kind(),
        io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::InvalidInput
    )
}

/// Map a file extension to the `Content-Type` sent with it.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Serve the landing page.
#[get("/")]
pub async fn index(assets: web::Data<PublicAssets>) -> HttpResponse {
    assets.respond(INDEX_FILE.to_owned()).await
}

/// Fallback service: serve unmatched GETs from the public directory.
pub async fn static_file(req: HttpRequest, assets: web::Data<PublicAssets>) -> HttpResponse {
    if req.method() != Method::GET {
        return HttpResponse::NotFound().finish();
    }
    let relative = req.path().trim_start_matches('/');
    if relative.is_empty() {
        return assets.respond(INDEX_FILE.to_owned()).await;
    }
    assets.respond(relative.to_owned()).await
}
