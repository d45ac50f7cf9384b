use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::Theme;

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > 50.0;

    view! {
        <header class=move || {
            if scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-b border-gray-200 dark:border-gray-700"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="flex items-center justify-between px-6 py-6 max-w-6xl mx-auto">
                <div class="font-semibold text-gray-900 dark:text-white transition-colors duration-300">
                    "Aman Dwivedi"
                </div>
                <nav class="flex items-center space-x-8">
                    <NavLink href="#work" label="Work" />
                    <NavLink href="#about" label="About" />
                    <NavLink href="#contact" label="Contact" />
                    <NavLink href="/resume.pdf" label="Resume" external=true />
                    <button
                        on:click=move |_| theme.update(|t| *t = t.flipped())
                        class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-all duration-300 hover:scale-110"
                        aria-label="Toggle dark mode"
                    >
                        {move || if theme.get() == Theme::Dark { "☀️" } else { "🌙" }}
                    </button>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str, #[prop(optional)] external: bool) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white transition-colors duration-300 relative group"
        >
            {label}
            <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-sky-400 transition-all duration-300 group-hover:w-full"></span>
        </a>
    }
}
