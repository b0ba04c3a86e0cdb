use web_sys::window;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::utils::{local_storage, read_storage};

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct ThemeState {
    pub theme: Theme,
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// The stored preference, falling back to the system color scheme.
pub fn initial_theme() -> Theme {
    read_storage(THEME_KEY)
        .and_then(|s| Theme::parse(&s))
        .unwrap_or_else(|| {
            if system_prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

fn store_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn apply_theme_to_document(theme: Theme) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = html.class_list();
    let result = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        tracing::warn!("Failed to apply {} theme", theme.as_str());
    }
}

/// Current theme and a callback that flips it.
///
/// The flag is purely visual; nothing about data loading depends on it.
#[hook]
pub fn use_theme() -> (Theme, Callback<()>) {
    let (state, dispatch) = use_store::<ThemeState>();

    let toggle = use_callback(
        dispatch,
        move |_: (), dispatch: &Dispatch<ThemeState>| {
            let next = dispatch.get().theme.toggled();
            store_theme(next);
            apply_theme_to_document(next);
            dispatch.reduce_mut(|state| state.theme = next);
        },
    );

    (state.theme, toggle)
}

#[function_component]
pub fn ThemeToggle() -> Html {
    let (theme, toggle) = use_theme();

    // Initialize theme on first render
    {
        let dispatch = use_dispatch::<ThemeState>();
        use_effect_with((), move |_| {
            let theme = initial_theme();
            apply_theme_to_document(theme);
            dispatch.reduce_mut(|state| state.theme = theme);
        });
    }

    let onclick = toggle.reform(|_: MouseEvent| ());

    let (icon, title) = match theme {
        Theme::Light => ("🌙", "Switch to dark mode"),
        Theme::Dark => ("☀️", "Switch to light mode"),
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
            onclick={onclick}
            title={title}
            aria-label="Toggle dark mode"
        >
            <span class="text-xl">{icon}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn stored_names_parse_back() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("system"), None);
    }
}
