use crate::{config::HEADER_OFFSET, error::HostError};

/// Sections the header, hero and footer link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAnchor {
    Top,
    About,
    Projects,
    Services,
    Testimonials,
    Contact,
}

impl NavAnchor {
    pub const ALL: [NavAnchor; 6] = [
        Self::Top,
        Self::About,
        Self::Projects,
        Self::Services,
        Self::Testimonials,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Services => "Services",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

pub trait ScrollHost {
    /// Document-relative top of the element with `id`, `None` when it isn't on the page.
    fn anchor_top(&self, id: &str) -> Result<Option<f64>, HostError>;
    fn prefers_reduced_motion(&self) -> bool;
    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollNavigator<H> {
    host: H,
    header_offset: f64,
}

impl<H: ScrollHost> ScrollNavigator<H> {
    pub fn new(host: H) -> Self {
        Self::with_header_offset(host, HEADER_OFFSET)
    }

    pub fn with_header_offset(host: H, header_offset: f64) -> Self {
        Self {
            host,
            header_offset,
        }
    }

    pub fn target_for(&self, element_top: f64) -> f64 {
        element_top - self.header_offset
    }

    /// Scrolls so the anchor sits just below the sticky header. Returns the
    /// requested offset, or `None` when nothing was scrolled.
    pub fn scroll_to_anchor(&self, id: &str) -> Option<f64> {
        let top = match self.host.anchor_top(id) {
            Ok(Some(top)) => top,
            Ok(None) => {
                log::debug!("no anchor #{id} on page");
                return None;
            }
            Err(e) => {
                log::warn!("couldn't locate anchor #{id}: {e}");
                return None;
            }
        };
        let target = self.target_for(top);
        let mode = if self.host.prefers_reduced_motion() {
            ScrollMode::Instant
        } else {
            ScrollMode::Smooth
        };
        match self.host.scroll_to(target, mode) {
            Ok(()) => Some(target),
            Err(e) => {
                log::warn!("scroll to #{id} failed: {e}");
                None
            }
        }
    }

    pub fn scroll_to(&self, anchor: NavAnchor) -> Option<f64> {
        self.scroll_to_anchor(anchor.id())
    }
}
