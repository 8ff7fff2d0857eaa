use std::time::Duration;

/// Subpath the site is deployed under (GitHub Pages project site).
pub const BASE_PATH: &str = "/nextstack-solutions";

/// Prefixes a site-root relative asset path with [`BASE_PATH`].
pub fn asset_path(path: &str) -> String {
    format!("{BASE_PATH}/{}", path.trim_start_matches('/'))
}

pub const SITE_OWNER: &str = "Alex Morgan";

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` for the tailwind `dark:` variant.
pub const DARK_CLASS: &str = "dark";

pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_MEDIA_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Height of the sticky header plus breathing room. Keep in sync with `h-16` in the header markup.
pub const HEADER_OFFSET: f64 = 84.0;

/// How long the "message sent" notice stays up.
pub const CONTACT_RESET_DELAY: Duration = Duration::from_millis(2500);

/// Year the bundle was built, stamped by build.rs.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_live_under_base_path() {
        assert_eq!(asset_path("favicon.svg"), "/nextstack-solutions/favicon.svg");
        assert_eq!(
            asset_path("/pkg/nextstack-portfolio.css"),
            "/nextstack-solutions/pkg/nextstack-portfolio.css"
        );
    }
}
