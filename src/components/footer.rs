//! Site Footer

use leptos::prelude::*;

use crate::content::site::{
    CLUB_ADDRESS, CLUB_EMAIL, CLUB_NAME, CLUB_PHONE, CLUB_TAGLINE, FOOTER_LINKS,
};

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h3>{CLUB_NAME}</h3>
                    <p class="footer-est">"Est. 1888"</p>
                    <p>{CLUB_TAGLINE}</p>
                </div>

                <div class="footer-column">
                    <h3>"Quick Links"</h3>
                    <ul>
                        {FOOTER_LINKS.iter().map(|(label, href)| view! {
                            <li><a href=*href>{*label}</a></li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>"Contact Us"</h3>
                    <p>{CLUB_ADDRESS}</p>
                    <p>
                        <a href=format!("tel:{}", CLUB_PHONE.replace(' ', ""))>{CLUB_PHONE}</a>
                    </p>
                    <p>
                        <a href=format!("mailto:{}", CLUB_EMAIL)>{CLUB_EMAIL}</a>
                    </p>
                </div>
            </div>

            <div class="footer-legal">
                {format!("© {} {}. All rights reserved.", current_year, CLUB_NAME)}
            </div>
        </footer>
    }
}
