use std::sync::Arc;

use leptos::prelude::*;
use maison::{
    cart::Cart,
    chat::ChatSession,
    i18n::{Catalog, Catalogs, Language, LanguageStore, Persistence},
    loyalty::LoyaltyAccount,
    menu::{Favorites, Menu},
    order::OrderSummary,
};

use crate::storage::BrowserStorage;

/// Which screen fills the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    Chat,
    Menu,
    Dish(String),
    Cart,
    Confirmed,
    Loyalty,
    Profile,
}

/// Stores shared by every screen, provided once at the root.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppContext {
    pub(crate) screen: RwSignal<Screen>,
    pub(crate) language: RwSignal<LanguageStore<BrowserStorage>>,
    pub(crate) cart: RwSignal<Cart>,
    pub(crate) last_order: RwSignal<Option<OrderSummary>>,
    pub(crate) favorites: RwSignal<Favorites>,
    pub(crate) chat: RwSignal<ChatSession>,
    pub(crate) loyalty: RwSignal<LoyaltyAccount>,
    pub(crate) menu: StoredValue<Menu>,
}

impl AppContext {
    /// Parse the bundled data and restore the saved language.
    ///
    /// # Errors
    ///
    /// Returns an error when a bundled catalog or the menu fails to parse.
    pub(crate) fn load() -> Result<Self, String> {
        let catalogs = Catalogs::bundled()
            .map_err(|error| format!("Failed to load translations: {error}"))?;
        let menu = Menu::bundled().map_err(|error| format!("Failed to load menu: {error}"))?;

        let language = LanguageStore::load(BrowserStorage, Arc::new(catalogs));
        let chat = ChatSession::new(language.catalog());

        Ok(Self {
            screen: RwSignal::new(Screen::Chat),
            language: RwSignal::new(language),
            cart: RwSignal::new(Cart::new()),
            last_order: RwSignal::new(None),
            favorites: RwSignal::new(Favorites::new()),
            chat: RwSignal::new(chat),
            loyalty: RwSignal::new(LoyaltyAccount::demo()),
            menu: StoredValue::new(menu),
        })
    }

    /// A string from the active catalog. Re-runs when the language changes.
    pub(crate) fn text(self, pick: impl Fn(&Catalog) -> &String) -> String {
        self.language.with(|store| pick(store.catalog()).clone())
    }

    pub(crate) fn active_language(self) -> Language {
        self.language.with(LanguageStore::language)
    }

    pub(crate) fn set_language(self, language: Language) {
        let mut persistence = Persistence::Saved;

        self.language.update(|store| persistence = store.set_language(language));

        if persistence == Persistence::Failed {
            leptos::logging::warn!("language {language} applies to this session only");
        }
    }

    pub(crate) fn navigate(self, screen: Screen) {
        self.screen.set(screen);
    }

    /// Price with the localized currency label.
    pub(crate) fn price(self, amount: impl std::fmt::Display) -> String {
        format!("{amount} {}", self.text(|catalog| &catalog.common.currency))
    }
}

pub(crate) fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
