//! Category image URLs.

/// Placeholder used when a category is created without an image.
pub const DEFAULT_IMAGE_URL: &str = "https://placehold.co/300x200/e2e8f0/64748b?text=New+Category";

/// Shown in place of an image that is missing or fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/300x200/e2e8f0/64748b?text=Category+Image";

const UPLOADS_PREFIX: &str = "/lovable-uploads";

/// Resolve a stored image path to the path a renderer should load.
///
/// Absolute `http(s)` URLs pass through. Upload paths are made relative to the
/// asset base. Blank paths resolve to `fallback`.
#[must_use]
pub fn resolve_image_path<'a>(path: &'a str, fallback: &'a str) -> &'a str {
    let path = path.trim();
    if path.is_empty() {
        return fallback;
    }
    if path.starts_with("http") {
        return path;
    }
    if path.starts_with(UPLOADS_PREFIX) {
        return path.strip_prefix('/').unwrap_or(path);
    }
    path
}
