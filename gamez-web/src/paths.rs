//! Helpers for constructing URLs to static assets that respect the deployment base path.

/// Prefix a site-relative asset path with the deployment base.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/hub` for GitHub Pages),
/// site-relative asset paths are prefixed accordingly. Absolute URLs pass
/// through untouched so remote logos keep working.
#[must_use]
pub fn asset_path(path: &str) -> String {
    asset_path_with_base(path, public_base())
}

/// Deployment base path baked in at compile time, empty when served from `/`.
#[must_use]
pub const fn public_base() -> &'static str {
    match option_env!("PUBLIC_URL") {
        Some(base) => base,
        None => "",
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:")
}

fn asset_path_with_base(path: &str, base: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    let base = base.trim().trim_end_matches('/');
    let rel = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
