//! Contact Form
//!
//! Collects an enquiry and simulates submission with a timed delay.
//! Nothing is transmitted or persisted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Service options for the enquiry select
const PROJECT_TYPES: &[(&str, &str)] = &[
    ("fitted-kitchen", "Fitted Kitchen"),
    ("replacement-doors", "Replacement Doors"),
    ("cabinet-spray-painting", "Cabinet Spray Painting"),
    ("bedroom-furniture", "Bedroom Furniture"),
    ("home-office", "Home Office"),
    ("other", "Other"),
];

/// Fields collected by the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormData::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get();
        if data.name.is_empty() || data.email.is_empty() || data.message.is_empty() {
            set_error.set("Please fill in your name, email, and message.".to_string());
            return;
        }
        set_error.set(String::new());
        set_is_submitting.set(true);

        spawn_local(async move {
            // Simulated submission: the enquiry never leaves the page
            TimeoutFuture::new(1_000).await;
            web_sys::console::log_1(&"[CONTACT] enquiry submitted (simulated)".into());
            form.set(ContactFormData::default());
            set_is_submitting.set(false);
            set_submitted.set(true);
        });
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! {
                <div class="form-success">
                    <h3>"Thank you for your enquiry"</h3>
                    <p>
                        "We've received your message and will be in touch within one \
                         working day."
                    </p>
                </div>
            }
        >
            <form class="contact-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-field">
                        <label for="name">"Name *"</label>
                        <input
                            id="name"
                            type="text"
                            required
                            prop:value=move || form.get().name
                            on:input=move |ev| {
                                form.update(|f| f.name = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label for="email">"Email *"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>

                <div class="form-field">
                    <label for="phone">"Phone"</label>
                    <input
                        id="phone"
                        type="tel"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="project-type">"What service are you interested in?"</label>
                    <select
                        id="project-type"
                        prop:value=move || form.get().project_type
                        on:change=move |ev| {
                            form.update(|f| f.project_type = event_target_value(&ev))
                        }
                    >
                        <option value="">"Please select"</option>
                        {PROJECT_TYPES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-field">
                    <label for="message">"Message *"</label>
                    <textarea
                        id="message"
                        rows=5
                        required
                        prop:value=move || form.get().message
                        on:input=move |ev| {
                            form.update(|f| f.message = event_target_value(&ev))
                        }
                    ></textarea>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>

                <button class="btn-primary" type="submit" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </Show>
    }
}
