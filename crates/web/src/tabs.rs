use leptos::prelude::*;
use maison::cart::Cart;

use crate::context::{Screen, use_app};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chat,
    Menu,
    Cart,
    Profile,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Chat, Tab::Menu, Tab::Cart, Tab::Profile];

    fn screen(self) -> Screen {
        match self {
            Tab::Chat => Screen::Chat,
            Tab::Menu => Screen::Menu,
            Tab::Cart => Screen::Cart,
            Tab::Profile => Screen::Profile,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tab::Chat => "💬",
            Tab::Menu => "🍽️",
            Tab::Cart => "🛒",
            Tab::Profile => "👤",
        }
    }

    /// The tab that stays highlighted while `screen` is shown.
    fn for_screen(screen: &Screen) -> Option<Self> {
        match screen {
            Screen::Chat => Some(Tab::Chat),
            Screen::Menu | Screen::Dish(_) => Some(Tab::Menu),
            Screen::Cart => Some(Tab::Cart),
            Screen::Profile | Screen::Loyalty => Some(Tab::Profile),
            Screen::Confirmed => None,
        }
    }
}

#[component]
pub(crate) fn TabBar() -> impl IntoView {
    let app = use_app();
    let item_count = move || app.cart.with(Cart::item_count);

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let label = move || {
                        app.text(|catalog| match tab {
                            Tab::Chat => &catalog.tabs.chat,
                            Tab::Menu => &catalog.tabs.menu,
                            Tab::Cart => &catalog.tabs.cart,
                            Tab::Profile => &catalog.tabs.profile,
                        })
                    };
                    let badge = move || {
                        let count = item_count();

                        (tab == Tab::Cart && count > 0)
                            .then(|| view! { <span class="tab-badge">{count}</span> })
                    };

                    view! {
                        <button
                            type="button"
                            class="tab"
                            class:tab-active=move || {
                                app.screen.with(Tab::for_screen) == Some(tab)
                            }
                            on:click=move |_| app.navigate(tab.screen())
                        >
                            <span class="tab-icon">{tab.icon()}</span>
                            <span class="tab-label">{label}</span>
                            {badge}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
