//! Site Header
//!
//! Top navigation bar with mobile drawer toggle. Also resets scroll and
//! closes the drawer after every navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::site::{CLUB_NAME, NAV_LINKS};
use crate::context::SiteContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext should be provided");
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        let _ = pathname.get();
        ctx.close_menu();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <header class="site-header">
            <a class="site-brand" href="/">{CLUB_NAME}</a>

            <button class="menu-toggle" on:click=move |_| ctx.toggle_menu()>
                {move || if ctx.menu_open.get() { "✕" } else { "☰" }}
            </button>

            <nav class=move || if ctx.menu_open.get() { "site-nav open" } else { "site-nav" }>
                {NAV_LINKS.iter().map(|(label, href)| {
                    let path = *href;
                    view! {
                        <a
                            href=path
                            class=move || {
                                if pathname.get() == path {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            }
                        >
                            {*label}
                        </a>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
