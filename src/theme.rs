use dioxus::prelude::*;

pub const STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon offering the *other* mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

/// Where the preference is persisted. Values are the raw `light`/`dark`
/// strings, not JSON.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

pub struct LocalThemeStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save(&mut self, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let saved = local_storage().map(|storage| storage.set_item(STORAGE_KEY, value).is_ok());
            if saved != Some(true) {
                tracing::warn!("theme: preference not persisted");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = value;
        }
    }
}

pub fn load_theme(store: &impl ThemeStore) -> Theme {
    store
        .load()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Flips the theme and persists the result before returning it, so the
/// caller can apply attribute and icon from the same value.
pub fn toggle_theme(current: Theme, store: &mut impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.save(next.as_str());
    next
}

fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(|| load_theme(&LocalThemeStore));

    use_hook(move || apply_document_theme(*theme.peek()));

    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = toggle_theme(theme(), &mut LocalThemeStore);
                apply_document_theme(next);
                theme.set(next);
                tracing::debug!(theme = next.as_str(), "theme: toggled");
            },
            i { class: theme().icon_class() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct MemoryStore(Option<String>);

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.clone()
        }

        fn save(&mut self, value: &str) {
            self.0 = Some(value.to_string());
        }
    }

    #[test]
    fn defaults_to_light() {
        assert_eq!(load_theme(&MemoryStore::default()), Theme::Light);
        assert_eq!(load_theme(&MemoryStore(Some("sepia".into()))), Theme::Light);
        assert_eq!(load_theme(&MemoryStore(Some("dark".into()))), Theme::Dark);
    }

    #[test]
    fn double_toggle_round_trips_and_storage_tracks_each_step() {
        let mut store = MemoryStore::default();
        let start = load_theme(&store);

        let once = toggle_theme(start, &mut store);
        assert_eq!(once, Theme::Dark);
        assert_eq!(load_theme(&store), once);

        let twice = toggle_theme(once, &mut store);
        assert_eq!(twice, start);
        assert_eq!(store.0.as_deref(), Some("light"));
    }

    #[test]
    fn icon_offers_the_other_mode() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }
}
