mod about;
mod contact;
mod header;
mod homepage;
mod theme;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use header::Header;
use homepage::HomePage;
use theme::Theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/png" href="/favicon.png" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-white dark:bg-gray-900 transition-colors duration-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = theme::provide_theme();

    view! {
        <Html attr:class=move || {
            match theme.get() {
                Theme::Dark => "dark scroll-smooth",
                Theme::Light => "scroll-smooth",
            }
        } />

        // sets the document title
        <Title text="Aman Dwivedi - Computer Science Researcher & Software Developer" />
        <Meta
            name="description"
            content="Portfolio of Aman Dwivedi, Computer Science graduate student at UC Davis specializing in memory management systems, full-stack development, and research."
        />

        // decorative background blobs
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div class="absolute -top-40 -right-40 w-80 h-80 bg-purple-300 dark:bg-purple-900 rounded-full mix-blend-multiply dark:mix-blend-normal filter blur-xl opacity-20 animate-blob"></div>
            <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-sky-300 dark:bg-sky-900 rounded-full mix-blend-multiply dark:mix-blend-normal filter blur-xl opacity-20 animate-blob animation-delay-2000"></div>
            <div class="absolute top-40 left-40 w-80 h-80 bg-amber-300 dark:bg-amber-900 rounded-full mix-blend-multiply dark:mix-blend-normal filter blur-xl opacity-20 animate-blob animation-delay-4000"></div>
        </div>

        <Router>
            <Header />
            <main class="pt-24 relative">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // build.rs stamps BUILD_TIME as RFC 3339; the year prefix is all we need
    let year = &env!("BUILD_TIME")[..4];
    view! {
        <footer class="py-8 border-t border-gray-200 dark:border-gray-700 transition-colors duration-300">
            <div class="max-w-6xl mx-auto px-6 text-center">
                <p class="text-gray-600 dark:text-gray-400 transition-colors duration-300">
                    {format!("© {year} Aman Dwivedi. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
