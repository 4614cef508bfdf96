//! Maison prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, NewCartLine},
    chat::{Author, ChatMessage, ChatSession, PendingReply, VoiceHold},
    i18n::{Catalog, Catalogs, I18nError, LANGUAGE_KEY, Language, LanguageStore, Persistence},
    loyalty::{LoyaltyAccount, LoyaltyError, Reward, Tier},
    menu::{Badge, Category, CategoryFilter, Dish, Favorites, Menu, MenuError},
    order::OrderSummary,
    pricing::{PricingError, Totals},
    storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError},
};
