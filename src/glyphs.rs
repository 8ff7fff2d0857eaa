//! Stroke path data for the inline icons, on a 24x24 grid.

use crate::content::SocialIcon;

pub fn social_icon(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Email => "mail",
        SocialIcon::LinkedIn => "linkedin",
        SocialIcon::Instagram => "instagram",
        SocialIcon::Upwork => "briefcase",
        SocialIcon::Gumroad => "store",
    }
}

/// Path data for every glyph the page draws.
pub fn glyph(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "alert-circle" => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
            "M12 8v4",
            "M12 16h.01",
        ],
        "arrow-up-right" => &["M7 7h10v10", "M7 17 17 7"],
        "briefcase" => &[
            "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
        ],
        "check" => &["M20 6 9 17l-5-5"],
        "external-link" => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        "github" => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        "instagram" => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        "linkedin" => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
        ],
        "mail" => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        "moon" => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
        "sparkles" => &[
            "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
            "M20 3v4",
            "M22 5h-4",
            "M4 17v2",
            "M5 18H3",
        ],
        "store" => &[
            "m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7",
            "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8",
            "M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4",
            "M2 7h20",
            "M22 7v3a2 2 0 0 1-2 2 2 2 0 0 1-2-2 2 2 0 0 1-2 2 2 2 0 0 1-2-2 2 2 0 0 1-2 2 2 2 0 0 1-2-2 2 2 0 0 1-2 2 2 2 0 0 1-2-2 2 2 0 0 1-2 2 2 2 0 0 1-2-2V7",
        ],
        "sun" => &[
            "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        _ => return None,
    };
    Some(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAWN: [&str; 13] = [
        "alert-circle",
        "arrow-up-right",
        "briefcase",
        "check",
        "external-link",
        "github",
        "instagram",
        "linkedin",
        "mail",
        "moon",
        "sparkles",
        "store",
        "sun",
    ];

    #[test]
    fn test_every_drawn_icon_has_paths() {
        for name in DRAWN {
            let paths = glyph(name).unwrap_or_else(|| panic!("missing glyph {name}"));
            assert!(!paths.is_empty(), "{name} has no paths");
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])), "{name}");
        }
        assert!(glyph("icon-sun").is_none());
    }

    #[test]
    fn test_theme_toggle_glyphs_differ() {
        assert_ne!(glyph("sun"), glyph("moon"));
    }

    #[test]
    fn test_social_icons_resolve() {
        for link in crate::content::SOCIAL_LINKS.iter() {
            assert!(glyph(social_icon(link.icon)).is_some());
        }
    }
}
