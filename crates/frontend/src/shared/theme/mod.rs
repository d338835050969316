//! Light/dark theming.
//!
//! One [`ThemeContext`] is provided at the root; every component reads the mode
//! from it instead of keeping its own copy. The choice is persisted in
//! localStorage, mirrored as `data-theme` on `<body>` for the stylesheets and
//! into the thaw [`Theme`] so UI-kit components follow the same mode.

use crate::shared::icons::icon;
use contracts::shared::theme::ThemeMode;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};
use web_sys::window;

const THEME_STORAGE_KEY: &str = "northbridge-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> ThemeMode {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| ThemeMode::parse(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(mode: ThemeMode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
    }
}

/// Set `data-theme` on body for the stylesheet selectors.
fn apply_theme_attribute(mode: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        log::debug!("theme: {}", mode.as_str());
        self.mode.set(mode);
        save_theme_to_storage(mode);
        apply_theme_attribute(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }

    /// Reactive class choice: `light` in light mode, `dark` in dark mode.
    pub fn class(&self, light: &'static str, dark: &'static str) -> impl Fn() -> &'static str + Copy {
        let mode = self.mode;
        move || mode.get().pick(light, dark)
    }
}

fn thaw_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::light(),
        ThemeMode::Dark => Theme::dark(),
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_theme_from_storage();
    apply_theme_attribute(initial);

    let mode = RwSignal::new(initial);
    let kit_theme = RwSignal::new(thaw_theme(initial));
    Effect::new(move |_| {
        kit_theme.set(thaw_theme(mode.get()));
    });

    provide_context(ThemeContext { mode });

    view! {
        <ConfigProvider theme=kit_theme>
            {children()}
        </ConfigProvider>
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button switching between the two modes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let title = move || {
        format!("Switch to {} mode", theme.mode().toggled().display_name().to_lowercase())
    };

    view! {
        <button
            class="header__icon-btn"
            title=title
            aria-label=title
            on:click=move |_| theme.toggle()
        >
            {move || if theme.mode().is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
