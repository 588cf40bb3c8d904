//! Site Application Shell
//!
//! Root component: seeds the content store, provides the chrome context,
//! and mounts the router with the shared header and footer.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Footer, Header};
use crate::context::SiteContext;
use crate::pages::{
    AboutPage, AdminPage, BlogPage, BrochureView, ContactPage, HomePage, NotFound,
    PortfolioPage,
};
use crate::store::SiteState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Chrome state
    let (menu_open, set_menu_open) = signal(false);
    provide_context(SiteContext::new((menu_open, set_menu_open)));

    // Content collections, seeded once and immutable from here on
    let state = SiteState::new();
    web_sys::console::log_1(
        &format!(
            "[APP] content loaded: {} posts, {} projects",
            state.posts.len(),
            state.projects.len()
        )
        .into(),
    );
    provide_context(Store::new(state));

    view! {
        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/portfolio") view=PortfolioPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/admin") view=AdminPage/>
                    // Every service route renders through the one template
                    <Route path=path!("/:section/:page") view=BrochureView/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
