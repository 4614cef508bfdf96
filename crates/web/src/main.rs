//! La Maison web app
//!
//! Mobile-first ordering shell over the `maison` stores: chat, menu, cart and profile tabs.

use std::time::Duration;

use leptos::prelude::*;

use crate::context::{AppContext, Screen, use_app};

mod cart;
mod chat;
mod context;
mod menu;
mod profile;
mod storage;
mod tabs;

/// How long the splash screen stays up after mount.
const SPLASH_DELAY: Duration = Duration::from_secs(2);

/// Main app shell.
#[component]
fn App() -> impl IntoView {
    match AppContext::load() {
        Ok(app) => {
            provide_context(app);

            let splash = RwSignal::new(true);

            set_timeout(move || splash.set(false), SPLASH_DELAY);

            view! {
                <Show when=move || !splash.get() fallback=|| view! { <Splash /> }>
                    <Shell />
                </Show>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="app">
                <div class="load-error">
                    <p>{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

#[component]
fn Splash() -> impl IntoView {
    view! {
        <main class="splash">
            <h1 class="splash-title">"La Maison"</h1>
        </main>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let app = use_app();

    view! {
        <main class="app">
            {move || match app.screen.get() {
                Screen::Chat => view! { <chat::ChatScreen /> }.into_any(),
                Screen::Menu => view! { <menu::MenuScreen /> }.into_any(),
                Screen::Dish(id) => view! { <menu::DishScreen id=id /> }.into_any(),
                Screen::Cart => view! { <cart::CartScreen /> }.into_any(),
                Screen::Confirmed => view! { <cart::ConfirmedScreen /> }.into_any(),
                Screen::Loyalty => view! { <profile::LoyaltyScreen /> }.into_any(),
                Screen::Profile => view! { <profile::ProfileScreen /> }.into_any(),
            }}
            <tabs::TabBar />
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
