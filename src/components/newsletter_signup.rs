//! Newsletter Signup
//!
//! Signup strip at the foot of the blog page. Renders and resets; no
//! address is stored or sent.

use leptos::prelude::*;

#[component]
pub fn NewsletterSignup() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (subscribed, set_subscribed) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            return;
        }
        set_email.set(String::new());
        set_subscribed.set(true);
    };

    view! {
        <section class="newsletter">
            <h2>"Subscribe to Our Newsletter"</h2>
            <p>
                "Stay up to date with the latest kitchen design trends, tips, and \
                 inspiration. We promise not to spam your inbox!"
            </p>

            <Show
                when=move || !subscribed.get()
                fallback=|| view! { <p class="newsletter-thanks">"Thanks for subscribing!"</p> }
            >
                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Your email address"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit">"Subscribe"</button>
                </form>
            </Show>

            <p class="newsletter-smallprint">
                "By subscribing, you agree to our Privacy Policy. You can unsubscribe at \
                 any time."
            </p>
        </section>
    }
}
