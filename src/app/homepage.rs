use leptos::prelude::*;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::work::WorkSection;

/// Renders the home page of your application.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <WorkSection />
        <AboutSection />
        <ContactSection />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="max-w-4xl mx-auto px-6 py-16 text-center scroll-mt-24">
            <div class="animate-fade-in-up">
                <h1 class="text-5xl md:text-6xl font-bold text-gray-900 dark:text-white mb-6 transition-colors duration-300">
                    "Hey! I'm Aman Dwivedi " <span class="inline-block animate-wave">"👋"</span>
                </h1>

                <p class="text-xl md:text-2xl text-sky-400 dark:text-sky-300 italic mb-8 font-light transition-colors duration-300">
                    "Computer Science Researcher & Software Developer"
                </p>

                <div class="max-w-2xl mx-auto mb-8">
                    <p class="text-gray-700 dark:text-gray-300 text-lg leading-relaxed mb-6 transition-colors duration-300">
                        "I'm a Computer Science graduate student at UC Davis, passionate about systems research, software development, and building efficient solutions. I specialize in memory management systems, satellite networks, and full-stack development."
                    </p>

                    <p class="text-gray-700 dark:text-gray-300 text-lg transition-colors duration-300">
                        "Currently working as a Graduate Research Assistant on HeMem - a Heterogeneous Memory Management System."
                    </p>
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-6 mt-20">
                <PreviewCard
                    image="/images/hemem-system.png"
                    alt="HeMem Memory Management System"
                    tile="bg-gradient-to-br from-purple-200 to-purple-300 dark:from-purple-800 dark:to-purple-900"
                    sheen="bg-gradient-to-br from-purple-400/20 to-transparent"
                />
                <PreviewCard
                    image="/images/charitap-app.png"
                    alt="Charitap Micro-Donation Platform"
                    tile="bg-gradient-to-br from-sky-100 to-sky-200 dark:from-sky-800 dark:to-sky-900"
                    sheen="bg-gradient-to-br from-sky-400/20 to-transparent"
                />
            </div>
        </section>
    }
}

#[component]
fn PreviewCard(
    image: &'static str,
    alt: &'static str,
    tile: &'static str,
    sheen: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "group {tile} rounded-2xl p-8 h-80 flex items-end justify-center relative overflow-hidden transition-all duration-500 hover:scale-105 hover:shadow-2xl cursor-pointer",
        )>
            <div class=format!(
                "absolute inset-0 {sheen} opacity-0 group-hover:opacity-100 transition-opacity duration-300",
            )></div>

            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg w-64 h-40 flex items-center justify-center transition-all duration-300 group-hover:shadow-2xl relative z-10 overflow-hidden">
                <img src=image alt=alt class="w-full h-full object-cover rounded-lg" />
            </div>
        </div>
    }
}
