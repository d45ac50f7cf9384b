use leptos::prelude::*;

struct Project {
    title: &'static str,
    blurb: &'static str,
    image: &'static str,
    alt: &'static str,
    tags: &'static [&'static str],
    // class fragments are spelled out so tailwind picks them up
    tile: &'static str,
    tag_style: &'static str,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "HeMem - Heterogeneous Memory Management",
        blurb: "Graduate Research Assistant working with Dr. Amanda Raybuck on improving the efficiency of HeMem system. Developed prefetching techniques to migrate pages between NVM and DRAM, optimizing memory performance.",
        image: "/images/hemem-system.png",
        alt: "HeMem Memory Management System",
        tags: &["Systems Research", "Memory Management", "C/C++"],
        tile: "bg-gradient-to-br from-purple-200 to-purple-300 dark:from-purple-800 dark:to-purple-900",
        tag_style: "bg-purple-100 dark:bg-purple-900 text-purple-700 dark:text-purple-300",
    },
    Project {
        title: "NASA OSIRIS-REx Data Management",
        blurb: "Developed a comprehensive data architecture and management system for NASA's OSIRIS-REx mission. Created a multiplatform Flutter app for seamless data upload and management by 250+ scientists worldwide.",
        image: "/images/nasa-osiris.png",
        alt: "NASA OSIRIS-REx Mission",
        tags: &["Python", "Django", "Flutter", "PostgreSQL"],
        tile: "bg-gradient-to-br from-sky-100 to-sky-200 dark:from-sky-800 dark:to-sky-900",
        tag_style: "bg-sky-100 dark:bg-sky-900 text-sky-700 dark:text-sky-300",
    },
    Project {
        title: "Charitap - Micro-Donation Platform",
        blurb: "A micro-donation platform that rounds up everyday purchases and automatically donates spare change to chosen charities. Implemented as a Chrome Extension leveraging Stripe API and e-commerce principles.",
        image: "/images/charitap-app.png",
        alt: "Charitap Micro-Donation Platform",
        tags: &["JavaScript", "Chrome Extension", "Stripe API"],
        tile: "bg-gradient-to-br from-green-100 to-green-200 dark:from-green-800 dark:to-green-900",
        tag_style: "bg-green-100 dark:bg-green-900 text-green-700 dark:text-green-300",
    },
    Project {
        title: "LEO Satellite Network Optimization",
        blurb: "Worked with Dr. Beichuan Zhang on improving efficiency of Hypatia Simulator for Low Earth Orbit satellite networks. Replaced brute force algorithms with optimized rules for shortest path calculations between satellites.",
        image: "/images/hypatia-simulator.png",
        alt: "Hypatia LEO Satellite Simulator",
        tags: &["Network Optimization", "Python", "Algorithm Design"],
        tile: "bg-gradient-to-br from-amber-100 to-amber-200 dark:from-amber-800 dark:to-amber-900",
        tag_style: "bg-amber-100 dark:bg-amber-900 text-amber-700 dark:text-amber-300",
    },
];

#[component]
pub fn WorkSection() -> impl IntoView {
    view! {
        <section
            id="work"
            class="py-20 bg-gray-50 dark:bg-gray-800 scroll-mt-24 transition-colors duration-300"
        >
            <div class="max-w-4xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-6 transition-colors duration-300">
                        "Work & Research"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto transition-colors duration-300">
                        "A selection of research projects and software development work showcasing my technical expertise"
                    </p>
                </div>

                <div class="space-y-16">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! { <ProjectEntry project flipped={i % 2 == 1} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectEntry(project: &'static Project, flipped: bool) -> impl IntoView {
    // every other entry swaps the image to the right on wide screens
    let frame_order = if flipped { "md:order-2" } else { "" };
    let text_order = if flipped { "md:order-1 space-y-4" } else { "space-y-4" };
    view! {
        <div class="grid md:grid-cols-2 gap-12 items-center group">
            <div class=frame_order>
                <div class=format!(
                    "{} rounded-2xl p-8 h-64 flex items-center justify-center transition-all duration-500 group-hover:scale-105",
                    project.tile,
                )>
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg w-48 h-32 flex items-center justify-center transition-all duration-300 group-hover:shadow-2xl overflow-hidden">
                        <img
                            src=project.image
                            alt=project.alt
                            class="w-full h-full object-cover rounded-lg"
                        />
                    </div>
                </div>
            </div>
            <div class=text_order>
                <h3 class="text-2xl font-bold text-gray-900 dark:text-white transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 leading-relaxed transition-colors duration-300">
                    {project.blurb}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=format!(
                                    "px-3 py-1 rounded-full text-sm transition-colors duration-300 {}",
                                    project.tag_style,
                                )>{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
