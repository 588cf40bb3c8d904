//! Site Context
//!
//! Shared chrome state provided via Leptos Context API.

use leptos::prelude::*;

/// Site-wide signals provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Whether the mobile navigation drawer is open - read
    pub menu_open: ReadSignal<bool>,
    /// Whether the mobile navigation drawer is open - write
    set_menu_open: WriteSignal<bool>,
}

impl SiteContext {
    pub fn new(menu_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            menu_open: menu_open.0,
            set_menu_open: menu_open.1,
        }
    }

    /// Toggle the mobile navigation drawer
    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|v| *v = !*v);
    }

    /// Close the drawer (used after every navigation)
    pub fn close_menu(&self) {
        self.set_menu_open.set(false);
    }
}
