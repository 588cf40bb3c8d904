//! Contact Page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ContactForm, PageHero};
use crate::content::site::{CLUB_ADDRESS, CLUB_EMAIL, CLUB_PHONE};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact Us"/>

        <PageHero
            title="Contact Us"
            subtitle="Questions about membership, coaching, or a kitchen project? We'd \
                      love to hear from you."
            image_src="/images/club-house.jpg"
        />

        <section class="contact-layout">
            <div class="contact-details">
                <h2>"Find Us"</h2>
                <p>{CLUB_ADDRESS}</p>
                <p>
                    <a href=format!("tel:{}", CLUB_PHONE.replace(' ', ""))>{CLUB_PHONE}</a>
                </p>
                <p>
                    <a href=format!("mailto:{}", CLUB_EMAIL)>{CLUB_EMAIL}</a>
                </p>
                <p class="contact-hours">
                    "The clubhouse office is staffed weekdays 9am to 5pm; the kitchen \
                     showroom is open Monday to Saturday."
                </p>
            </div>

            <div class="contact-form-panel">
                <h2>"Send a Message"</h2>
                <ContactForm/>
            </div>
        </section>
    }
}
