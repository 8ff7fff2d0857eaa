//! Light/dark preference handling.
//!
//! The preference is resolved once at mount from the stored choice, then the
//! OS colour-scheme hint, then `Light`. When storage can't be read at all the
//! resolution stops at `Light`. Every change is written straight back to
//! storage and to the `<html>` class list so the two never disagree.

use std::fmt;

use crate::error::HostError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the exact literals written by [`ThemePreference::as_str`] are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pieces of the page the theme controller touches.
pub trait ThemeHost {
    fn read_stored(&self) -> Result<Option<String>, HostError>;
    fn write_stored(&self, value: &str) -> Result<(), HostError>;
    fn os_prefers_dark(&self) -> Result<bool, HostError>;
    fn set_dark_class(&self, enabled: bool) -> Result<(), HostError>;
}

/// Stored choice > OS hint > `Light`.
pub fn resolve(stored: Option<&str>, os_prefers_dark: Option<bool>) -> ThemePreference {
    if let Some(pref) = stored.and_then(ThemePreference::parse) {
        return pref;
    }
    match os_prefers_dark {
        Some(true) => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

pub struct ThemeController<H> {
    host: H,
    current: ThemePreference,
}

impl<H: ThemeHost> ThemeController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            current: ThemePreference::default(),
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Unreadable storage short-circuits to `Light` without consulting the OS hint.
    pub fn initial_preference(&self) -> ThemePreference {
        let stored = match self.host.read_stored() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("couldn't read stored theme, using light: {e}");
                return ThemePreference::Light;
            }
        };
        let os_prefers_dark = match self.host.os_prefers_dark() {
            Ok(dark) => Some(dark),
            Err(e) => {
                log::warn!("couldn't query colour scheme: {e}");
                None
            }
        };
        resolve(stored.as_deref(), os_prefers_dark)
    }

    /// Resolves the startup preference and applies it.
    pub fn mount(&mut self) -> ThemePreference {
        let pref = self.initial_preference();
        log::debug!("initial theme: {pref}");
        self.apply(pref);
        pref
    }

    pub fn apply(&mut self, pref: ThemePreference) {
        self.current = pref;
        if let Err(e) = self.host.set_dark_class(pref.is_dark()) {
            log::warn!("couldn't update theme class: {e}");
        }
        if let Err(e) = self.host.write_stored(pref.as_str()) {
            log::warn!("couldn't persist theme: {e}");
        }
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.flipped();
        self.apply(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeHost {
        stored: RefCell<Option<String>>,
        os_dark: Option<bool>,
        storage_broken: bool,
        dark_class: Cell<bool>,
        class_writes: Cell<usize>,
    }

    impl FakeHost {
        fn with_stored(value: &str) -> Self {
            Self {
                stored: RefCell::new(Some(value.to_string())),
                ..Default::default()
            }
        }
    }

    impl ThemeHost for FakeHost {
        fn read_stored(&self) -> Result<Option<String>, HostError> {
            if self.storage_broken {
                return Err(HostError::StorageUnavailable);
            }
            Ok(self.stored.borrow().clone())
        }

        fn write_stored(&self, value: &str) -> Result<(), HostError> {
            if self.storage_broken {
                return Err(HostError::StorageUnavailable);
            }
            *self.stored.borrow_mut() = Some(value.to_string());
            Ok(())
        }

        fn os_prefers_dark(&self) -> Result<bool, HostError> {
            self.os_dark
                .ok_or_else(|| HostError::MediaQuery("matchMedia missing".to_string()))
        }

        fn set_dark_class(&self, enabled: bool) -> Result<(), HostError> {
            self.dark_class.set(enabled);
            self.class_writes.set(self.class_writes.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_stored_value_wins_over_os_hint() {
        for stored in ["dark", "light"] {
            for os in [Some(true), Some(false), None] {
                let host = FakeHost {
                    os_dark: os,
                    ..FakeHost::with_stored(stored)
                };
                let controller = ThemeController::new(host);
                assert_eq!(controller.initial_preference().as_str(), stored);
            }
        }
    }

    #[test]
    fn test_empty_storage_follows_os_hint() {
        let dark = ThemeController::new(FakeHost {
            os_dark: Some(true),
            ..Default::default()
        });
        assert_eq!(dark.initial_preference(), ThemePreference::Dark);

        let light = ThemeController::new(FakeHost {
            os_dark: Some(false),
            ..Default::default()
        });
        assert_eq!(light.initial_preference(), ThemePreference::Light);

        let unavailable = ThemeController::new(FakeHost::default());
        assert_eq!(unavailable.initial_preference(), ThemePreference::Light);
    }

    #[test]
    fn test_invalid_stored_value_is_ignored() {
        let host = FakeHost {
            os_dark: Some(true),
            ..FakeHost::with_stored("Dark")
        };
        assert_eq!(
            ThemeController::new(host).initial_preference(),
            ThemePreference::Dark
        );
        assert_eq!(resolve(Some("solarized"), None), ThemePreference::Light);
        assert_eq!(resolve(Some(""), Some(false)), ThemePreference::Light);
    }

    #[test]
    fn test_broken_storage_falls_back_to_light() {
        let host = FakeHost {
            storage_broken: true,
            ..Default::default()
        };
        let mut controller = ThemeController::new(host);
        assert_eq!(controller.mount(), ThemePreference::Light);
        // class still applied even though the write failed
        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert!(controller.host.dark_class.get());
    }

    #[test]
    fn test_broken_storage_ignores_dark_os_hint() {
        let host = FakeHost {
            storage_broken: true,
            os_dark: Some(true),
            ..Default::default()
        };
        let mut controller = ThemeController::new(host);
        assert_eq!(controller.initial_preference(), ThemePreference::Light);
        assert_eq!(controller.mount(), ThemePreference::Light);
        assert!(!controller.host.dark_class.get());
    }

    #[test]
    fn test_mount_applies_and_persists() {
        let host = FakeHost {
            os_dark: Some(true),
            ..Default::default()
        };
        let mut controller = ThemeController::new(host);
        assert_eq!(controller.mount(), ThemePreference::Dark);
        assert_eq!(controller.current(), ThemePreference::Dark);
        assert!(controller.host.dark_class.get());
        assert_eq!(controller.host.stored.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut controller = ThemeController::new(FakeHost::with_stored("light"));
        let original = controller.mount();

        let first = controller.toggle();
        assert_eq!(first, ThemePreference::Dark);
        assert_eq!(controller.host.stored.borrow().as_deref(), Some("dark"));
        assert!(controller.host.dark_class.get());

        let second = controller.toggle();
        assert_eq!(second, original);
        assert_eq!(controller.host.stored.borrow().as_deref(), Some("light"));
        assert!(!controller.host.dark_class.get());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut controller = ThemeController::new(FakeHost::default());
        controller.apply(ThemePreference::Dark);
        let stored = controller.host.stored.borrow().clone();
        let class = controller.host.dark_class.get();

        controller.apply(ThemePreference::Dark);
        assert_eq!(*controller.host.stored.borrow(), stored);
        assert_eq!(controller.host.dark_class.get(), class);
        assert_eq!(controller.current(), ThemePreference::Dark);
        assert_eq!(controller.host.class_writes.get(), 2);
    }

    #[test]
    fn test_preference_literals() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse(" light"), None);
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }
}
