//! `web_sys` backed hosts for the theme, scroll and contact controllers.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::{
    config::{DARK_CLASS, DARK_MEDIA_QUERY, THEME_STORAGE_KEY},
    contact::{PendingReset, ResetTimer},
    error::HostError,
    nav::{ScrollHost, ScrollMode},
    theme::ThemeHost,
};

fn describe(err: JsValue) -> String {
    format!("{err:?}")
}

fn browser_window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

fn local_storage() -> Result<Storage, HostError> {
    browser_window()?
        .local_storage()
        .map_err(|e| HostError::Storage(describe(e)))?
        .ok_or(HostError::StorageUnavailable)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTheme;

impl ThemeHost for BrowserTheme {
    fn read_stored(&self) -> Result<Option<String>, HostError> {
        local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| HostError::Storage(describe(e)))
    }

    fn write_stored(&self, value: &str) -> Result<(), HostError> {
        local_storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| HostError::Storage(describe(e)))
    }

    fn os_prefers_dark(&self) -> Result<bool, HostError> {
        browser_window()?
            .match_media(DARK_MEDIA_QUERY)
            .map_err(|e| HostError::MediaQuery(describe(e)))?
            .map(|mq| mq.matches())
            .ok_or_else(|| HostError::MediaQuery("matchMedia unsupported".to_string()))
    }

    fn set_dark_class(&self, enabled: bool) -> Result<(), HostError> {
        let root = browser_window()?
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or(HostError::NoDocument)?;
        root.class_list()
            .toggle_with_force(DARK_CLASS, enabled)
            .map(|_| ())
            .map_err(|e| HostError::Dom(describe(e)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserScroll {
    reduce_motion: Signal<bool>,
}

impl BrowserScroll {
    pub fn new(reduce_motion: Signal<bool>) -> Self {
        Self { reduce_motion }
    }
}

impl ScrollHost for BrowserScroll {
    fn anchor_top(&self, id: &str) -> Result<Option<f64>, HostError> {
        let window = browser_window()?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let Some(el) = document.get_element_by_id(id) else {
            return Ok(None);
        };
        let scroll_y = window.scroll_y().map_err(|e| HostError::Dom(describe(e)))?;
        Ok(Some(el.get_bounding_client_rect().top() + scroll_y))
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduce_motion.get_untracked()
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), HostError> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        browser_window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl ResetTimer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Result<TimeoutHandle, HostError> {
        set_timeout_with_handle(fire, delay).map_err(|e| HostError::Timer(describe(e)))
    }
}

impl PendingReset for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}
