use crate::view::PageView;
use std::cell::Cell;

pub const THEME_KEY: &str = "theme";
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-sun",
            Self::Dark => "fa-moon",
        }
    }
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

pub struct ThemePreference<P> {
    store: P,
    mode: Cell<Theme>,
}

impl<P: PreferenceStore> ThemePreference<P> {
    pub fn new(store: P) -> Self {
        let mode = Cell::new(read_stored_theme(&store).unwrap_or_default());
        Self { store, mode }
    }

    pub fn load(&self) -> Theme {
        let theme = read_stored_theme(&self.store).unwrap_or_default();
        self.mode.set(theme);
        theme
    }

    pub fn current(&self) -> Theme {
        self.mode.get()
    }

    pub fn apply(&self, view: &impl PageView, theme: Theme) {
        view.apply_theme(theme);
    }

    pub fn toggle(&self, view: &impl PageView) -> Theme {
        let next = self.mode.get().toggled();
        self.mode.set(next);
        self.apply(view, next);
        self.store.write(THEME_KEY, next.as_str());
        next
    }
}

fn read_stored_theme(store: &impl PreferenceStore) -> Option<Theme> {
    let value = store.read(THEME_KEY)?;
    Theme::from_str(&value)
}

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{RecordingView, ViewEvent};

    #[test]
    fn absent_preference_defaults_to_dark() {
        let preference = ThemePreference::new(MemoryStore::default());

        assert_eq!(preference.load(), Theme::Dark);
        assert_eq!(preference.current(), Theme::Dark);
    }

    #[test]
    fn invalid_preference_defaults_to_dark() {
        let preference = ThemePreference::new(MemoryStore::with(THEME_KEY, "sepia"));

        assert_eq!(preference.load(), Theme::Dark);
    }

    #[test]
    fn stored_light_preference_is_loaded() {
        let preference = ThemePreference::new(MemoryStore::with(THEME_KEY, "light"));

        assert_eq!(preference.current(), Theme::Light);
    }

    #[test]
    fn toggle_parity_matches_stored_and_applied_theme() {
        let store = MemoryStore::default();
        let preference = ThemePreference::new(store.clone());
        let view = RecordingView::default();

        for count in 1..=6 {
            let applied = preference.toggle(&view);
            let expected = if count % 2 == 1 { Theme::Light } else { Theme::Dark };

            assert_eq!(applied, expected);
            assert_eq!(store.get(THEME_KEY).as_deref(), Some(expected.as_str()));
            assert_eq!(view.last_theme(), Some(expected));
        }

        assert_eq!(view.count(|event| matches!(event, ViewEvent::Theme(_))), 6);
    }

    #[test]
    fn icon_follows_theme() {
        assert_eq!(Theme::Light.icon_class(), "fa-sun");
        assert_eq!(Theme::Dark.icon_class(), "fa-moon");
    }
}
