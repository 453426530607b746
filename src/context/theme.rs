// ============================================================================
// THEME CONTEXT - light/dark/system preference
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::utils::{read_from_storage, save_to_storage, STORAGE_KEY_THEME};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Binary toggle: anything not explicitly dark becomes dark.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }

    /// The appearance actually rendered, given the OS preference.
    pub fn resolve(&self, system_prefers_dark: bool) -> Appearance {
        match self {
            Theme::Light => Appearance::Light,
            Theme::Dark => Appearance::Dark,
            Theme::System => {
                if system_prefers_dark {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok()?
}

pub fn system_prefers_dark() -> bool {
    media_query().map(|mql| mql.matches()).unwrap_or(false)
}

fn stored_theme() -> Theme {
    read_from_storage(STORAGE_KEY_THEME)
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

/// Swap the light/dark class on the document root.
fn apply_appearance(appearance: Appearance) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let class_list = root.class_list();
        let _ = class_list.remove_2("light", "dark");
        let _ = class_list.add_1(appearance.as_str());
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("use_theme must be used within a ThemeProvider")
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(stored_theme);

    // Apply and persist on every change (and on mount).
    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            apply_appearance(theme.resolve(system_prefers_dark()));
            if let Err(e) = save_to_storage(STORAGE_KEY_THEME, theme.as_str()) {
                log::error!("❌ Could not persist theme: {}", e);
            }
            || ()
        });
    }

    // Follow OS preference changes while in system mode. Registered once;
    // the closure reads the persisted preference so it never goes stale.
    use_effect_with((), move |_| {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if stored_theme() == Theme::System {
                apply_appearance(Theme::System.resolve(system_prefers_dark()));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Some(mql) = media_query() {
            let _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
        // Keep the listener alive for the lifetime of the app.
        closure.forget();
        || ()
    });

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(next))
    };

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let handle = ThemeHandle {
        theme: *theme,
        set_theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ThemeHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_mapping() {
        assert_eq!(Theme::System.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn explicit_themes_ignore_os_preference() {
        assert_eq!(Theme::Light.resolve(true), Appearance::Light);
        assert_eq!(Theme::Dark.resolve(false), Appearance::Dark);
    }

    #[test]
    fn system_follows_os_preference() {
        assert_eq!(Theme::System.resolve(true), Appearance::Dark);
        assert_eq!(Theme::System.resolve(false), Appearance::Light);
    }

    #[test]
    fn theme_round_trips_as_str() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
        assert_eq!(Theme::from_str("solarized"), Theme::System);
    }
}
