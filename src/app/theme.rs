use std::{fmt, str::FromStr};

use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Resolves the theme once at load (saved preference, falling back to the OS
/// color scheme), provides it as context, and persists explicit toggles.
pub fn provide_theme() -> RwSignal<Theme> {
    #[cfg(feature = "hydrate")]
    let (saved, set_saved, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (saved, set_saved) = signal(String::new());

    let prefers_dark = use_preferred_dark();
    let initial = saved.get_untracked().parse::<Theme>().unwrap_or_else(|_| {
        if prefers_dark.get_untracked() {
            Theme::Dark
        } else {
            Theme::Light
        }
    });
    let theme = RwSignal::new(initial);

    // written on toggles only, never on load
    Effect::watch(
        move || theme.get(),
        move |theme, _, _| set_saved.set(theme.to_string()),
        false,
    );

    provide_context(theme);
    theme
}
