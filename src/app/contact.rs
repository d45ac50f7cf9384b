mod form;

use leptos::{ev::SubmitEvent, prelude::*, server_fn::codec::Json};
use serde::{Deserialize, Serialize};

use form::{validate, ContactForm, Field, FormErrors, SubmitStatus, Subject, CONTACT_EMAIL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub message: String,
}

#[server(input = Json, output = Json, endpoint = "send-email")]
pub async fn send_email(
    to: String,
    from: String,
    subject: String,
    name: String,
    message: String,
) -> Result<SendEmailResponse, ServerFnError> {
    use crate::mail::{self, EmailRequest, StubMailer};

    let req = EmailRequest {
        to,
        from,
        subject,
        name,
        message,
    };
    match mail::handle_send(&StubMailer::default(), req).await {
        Ok(()) => Ok(SendEmailResponse {
            message: "Email sent successfully".to_string(),
        }),
        Err(err) => {
            let response = expect_context::<leptos_axum::ResponseOptions>();
            response.set_status(err.status());
            Err(ServerFnError::new(err.to_string()))
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(None::<SubmitStatus>);
    let send = ServerAction::<SendEmail>::new();
    let submitting = send.pending();

    // map settlement of the in-flight request onto the banner state; the
    // fields only reset after a confirmed success
    Effect::watch(
        move || send.value().get(),
        move |settled, _, _| match settled {
            Some(Ok(_)) => {
                status.set(Some(SubmitStatus::Success));
                form.set(ContactForm::default());
            }
            Some(Err(_)) => status.set(Some(SubmitStatus::Error)),
            None => {}
        },
        false,
    );

    let edit = move |field: Field, value: String| {
        form.update(|f| f.set(field, &value));
        errors.update(|e| e.clear(field));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let checked = validate(&form.get_untracked());
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }

        status.set(None);
        let f = form.get_untracked();
        send.dispatch(SendEmail {
            to: CONTACT_EMAIL.to_string(),
            from: f.email,
            subject: format!("Portfolio Contact: {}", f.subject),
            name: f.name,
            message: f.message,
        });
    };

    view! {
        <section
            id="contact"
            class="py-20 bg-gray-50 dark:bg-gray-800 scroll-mt-24 transition-colors duration-300"
        >
            <div class="max-w-4xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-6 transition-colors duration-300">
                        "Contact"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto transition-colors duration-300">
                        "Let's discuss research opportunities, software development projects, or potential collaborations"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-16">
                    <ContactChannels />

                    <div class="bg-white dark:bg-gray-900 rounded-2xl p-8 shadow-sm dark:shadow-2xl transition-all duration-300 hover:shadow-lg dark:hover:shadow-2xl">
                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <label for="name" class=LABEL_CLASS>
                                    "Name *"
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                                    class=move || field_class(errors.with(|e| e.name.is_some()))
                                    placeholder="Your name"
                                />
                                {move || errors.with(|e| e.name).map(error_note)}
                            </div>

                            <div>
                                <label for="email" class=LABEL_CLASS>
                                    "Email *"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                                    class=move || field_class(errors.with(|e| e.email.is_some()))
                                    placeholder="your@email.com"
                                />
                                {move || errors.with(|e| e.email).map(error_note)}
                            </div>

                            <div>
                                <label for="subject" class=LABEL_CLASS>
                                    "Subject"
                                </label>
                                <select
                                    id="subject"
                                    name="subject"
                                    prop:value=move || form.with(|f| f.subject.label())
                                    on:change=move |ev| edit(Field::Subject, event_target_value(&ev))
                                    class="w-full px-4 py-3 border border-gray-200 dark:border-gray-600 dark:bg-gray-800 dark:text-white rounded-lg focus:ring-2 focus:ring-sky-400 focus:border-transparent outline-none transition-all duration-300"
                                >
                                    {Subject::ALL
                                        .iter()
                                        .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label for="message" class=LABEL_CLASS>
                                    "Message *"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="4"
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                                    class=move || message_class(errors.with(|e| e.message.is_some()))
                                    placeholder="Tell me about your project or opportunity..."
                                ></textarea>
                                {move || errors.with(|e| e.message).map(error_note)}
                            </div>

                            {move || {
                                status
                                    .get()
                                    .map(|s| match s {
                                        SubmitStatus::Success => {
                                            view! {
                                                <div class="p-4 bg-green-100 dark:bg-green-900 border border-green-400 dark:border-green-600 rounded-lg">
                                                    <p class="text-green-700 dark:text-green-300 text-sm">
                                                        "✅ Message sent successfully! I'll get back to you soon."
                                                    </p>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        SubmitStatus::Error => {
                                            view! {
                                                <div class="p-4 bg-red-100 dark:bg-red-900 border border-red-400 dark:border-red-600 rounded-lg">
                                                    <p class="text-red-700 dark:text-red-300 text-sm">
                                                        {format!(
                                                            "❌ Failed to send message. Please try again or contact me directly at {CONTACT_EMAIL}",
                                                        )}
                                                    </p>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}

                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class=move || submit_class(submitting.get())
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactChannels() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6 transition-colors duration-300">
                "Get in touch"
            </h3>
            <p class="text-gray-600 dark:text-gray-300 mb-8 leading-relaxed transition-colors duration-300">
                "I'm always interested in discussing new research opportunities, software development projects, and collaborations. Whether you're looking for a researcher, developer, or teaching assistant, I'd love to hear from you."
            </p>

            <div class="space-y-4">
                <div class="flex items-center space-x-3 group cursor-pointer">
                    <ChannelBadge icon="✉️" />
                    <span class="text-gray-700 dark:text-gray-300 transition-colors duration-300 group-hover:text-sky-600 dark:group-hover:text-sky-400">
                        {CONTACT_EMAIL}
                    </span>
                </div>
                <div class="flex items-center space-x-3 group cursor-pointer">
                    <ChannelBadge icon="📞" />
                    <span class="text-gray-700 dark:text-gray-300 transition-colors duration-300 group-hover:text-sky-600 dark:group-hover:text-sky-400">
                        "520-910-8976"
                    </span>
                </div>
                <div class="flex items-center space-x-3 group cursor-pointer">
                    <div class="w-10 h-10 bg-sky-400 dark:bg-sky-500 rounded-full flex items-center justify-center text-white transition-all duration-300 group-hover:scale-110">
                        <i class="devicon-linkedin-plain"></i>
                    </div>
                    <a
                        href="#"
                        class="text-gray-700 dark:text-gray-300 hover:text-sky-600 dark:hover:text-sky-400 transition-colors duration-300"
                    >
                        "LinkedIn Profile"
                    </a>
                </div>
                <div class="flex items-center space-x-3 group cursor-pointer">
                    <div class="w-10 h-10 bg-sky-400 dark:bg-sky-500 rounded-full flex items-center justify-center text-white transition-all duration-300 group-hover:scale-110">
                        <i class="devicon-github-plain"></i>
                    </div>
                    <a
                        href="#"
                        class="text-gray-700 dark:text-gray-300 hover:text-sky-600 dark:hover:text-sky-400 transition-colors duration-300"
                    >
                        "GitHub Profile"
                    </a>
                </div>
                <div class="flex items-center space-x-3 group cursor-pointer">
                    <ChannelBadge icon="📍" />
                    <span class="text-gray-700 dark:text-gray-300 transition-colors duration-300">
                        "Davis, CA"
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChannelBadge(icon: &'static str) -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-sky-400 dark:bg-sky-500 rounded-full flex items-center justify-center transition-all duration-300 group-hover:scale-110">
            <span class="text-white text-sm">{icon}</span>
        </div>
    }
}

const LABEL_CLASS: &str =
    "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2 transition-colors duration-300";

fn field_class(invalid: bool) -> &'static str {
    if invalid {
        "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-sky-400 focus:border-transparent outline-none transition-all duration-300 border-red-500 dark:border-red-400 dark:bg-gray-800 dark:text-white"
    } else {
        "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-sky-400 focus:border-transparent outline-none transition-all duration-300 border-gray-200 dark:border-gray-600 dark:bg-gray-800 dark:text-white"
    }
}

fn message_class(invalid: bool) -> &'static str {
    if invalid {
        "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-sky-400 focus:border-transparent outline-none transition-all duration-300 resize-none border-red-500 dark:border-red-400 dark:bg-gray-800 dark:text-white"
    } else {
        "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-sky-400 focus:border-transparent outline-none transition-all duration-300 resize-none border-gray-200 dark:border-gray-600 dark:bg-gray-800 dark:text-white"
    }
}

fn submit_class(submitting: bool) -> &'static str {
    if submitting {
        "w-full py-3 px-6 rounded-lg font-medium transform transition-all duration-300 bg-gray-400 dark:bg-gray-600 cursor-not-allowed text-white"
    } else {
        "w-full py-3 px-6 rounded-lg font-medium transform transition-all duration-300 bg-gray-900 dark:bg-sky-600 hover:bg-gray-800 dark:hover:bg-sky-700 hover:scale-105 hover:shadow-lg text-white"
    }
}

fn error_note(msg: &'static str) -> impl IntoView {
    view! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{msg}</p> }
}
