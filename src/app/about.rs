use leptos::prelude::*;

static SKILL_GROUPS: [(&str, &str); 3] = [
    (
        "Languages",
        "Python, Java, C/C++, JavaScript, TypeScript, SQL, HTML/CSS, Dart, MATLAB, Fortran",
    ),
    (
        "Frameworks & Tools",
        "Django, Flask, Flutter, Node.js, AWS, Git, UNIX, Streamlit",
    ),
    (
        "Libraries & Databases",
        "Pandas, NumPy, Matplotlib, Scikit-Learn, PostgreSQL, MySQL, Oracle",
    ),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 scroll-mt-24 transition-colors duration-300">
            <div class="max-w-4xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-6 transition-colors duration-300">
                        "About"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto transition-colors duration-300">
                        "Computer Science researcher passionate about systems optimization and software development"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div class="group">
                        <div class="bg-gradient-to-br from-amber-100 to-amber-200 dark:from-amber-800 dark:to-amber-900 rounded-2xl p-8 h-80 flex items-center justify-center transition-all duration-500 group-hover:scale-105">
                            <div class="w-32 h-32 bg-gray-300 dark:bg-gray-600 rounded-full flex items-center justify-center transition-all duration-300 group-hover:shadow-2xl">
                                <div class="text-gray-500 dark:text-gray-400 text-sm transition-colors duration-300">
                                    "Photo"
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <p class="text-gray-700 dark:text-gray-300 leading-relaxed transition-colors duration-300">
                            "I'm currently pursuing my Master's in Computer Science at UC Davis (GPA: 3.9), building on my strong foundation from the University of Arizona where I graduated with a perfect 4.0 GPA in Computer Science with a minor in Mathematics."
                        </p>

                        <p class="text-gray-700 dark:text-gray-300 leading-relaxed transition-colors duration-300">
                            "My research focuses on systems optimization, particularly memory management and network efficiency. I've had the privilege of working on cutting-edge projects including NASA missions and satellite network research."
                        </p>

                        <p class="text-gray-700 dark:text-gray-300 leading-relaxed transition-colors duration-300">
                            "As a Teaching Assistant for over 3 years, I've helped hundreds of students master complex concepts in computer science and mathematics, from introductory programming to advanced discrete structures."
                        </p>

                        <div class="pt-4">
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4 transition-colors duration-300">
                                "Technical Skills"
                            </h3>
                            <div class="grid grid-cols-1 gap-4">
                                {SKILL_GROUPS
                                    .iter()
                                    .map(|(group, skills)| {
                                        view! {
                                            <div class="group">
                                                <h4 class="font-medium text-gray-800 dark:text-gray-200 mb-2 transition-colors duration-300">
                                                    {*group}
                                                </h4>
                                                <p class="text-gray-600 dark:text-gray-400 text-sm transition-colors duration-300">
                                                    {*skills}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
