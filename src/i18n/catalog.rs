//! Catalogs
//!
//! One typed string bundle per language, compiled into the binary and parsed once at startup.
//! Every bundle has to fill every field, so a key missing from one language fails the load
//! instead of rendering blank text.

#![expect(
    missing_docs,
    reason = "catalog fields are translation keys named after the label they hold"
)]

use serde::Deserialize;

use super::{I18nError, Language};

const RU_YAML: &str = include_str!("../../locales/ru.yml");
const RO_YAML: &str = include_str!("../../locales/ro.yml");
const EN_YAML: &str = include_str!("../../locales/en.yml");

/// Strings shared by several screens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommonStrings {
    pub currency: String,
    pub back: String,
}

/// Bottom tab bar labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabStrings {
    pub chat: String,
    pub menu: String,
    pub cart: String,
    pub profile: String,
}

/// Menu browser strings, including category and badge labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuStrings {
    pub title: String,
    pub search: String,
    pub all: String,
    pub appetizers: String,
    pub salads: String,
    pub soups: String,
    pub mains: String,
    pub grill: String,
    pub desserts: String,
    pub drinks: String,
    pub popular: String,
    pub new: String,
    pub chef_choice: String,
    pub nothing_found: String,
}

/// Dish detail strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DishStrings {
    pub description: String,
    pub ingredients: String,
    pub allergens: String,
    pub prep_time: String,
    pub minutes: String,
    pub grams: String,
    pub add_to_order: String,
    pub added: String,
}

/// Cart screen strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartStrings {
    pub title: String,
    pub table: String,
    pub empty: String,
    pub empty_hint: String,
    pub go_to_menu: String,
    pub comment: String,
    pub subtotal: String,
    pub service: String,
    pub total: String,
    pub checkout: String,
}

/// Order confirmation strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderStrings {
    pub confirmed: String,
    pub waiter_notified: String,
    pub number: String,
    pub table: String,
    pub wait_time: String,
    pub amount: String,
    pub back_to_chat: String,
    pub view_menu: String,
}

/// Loyalty program strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoyaltyStrings {
    pub title: String,
    pub points: String,
    pub multiplier: String,
    pub levels: String,
    pub rewards: String,
    pub recent: String,
    pub claim: String,
    pub until: String,
    pub free_dessert: String,
    pub discount_10: String,
    pub order_entry: String,
}

/// Profile screen strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileStrings {
    pub title: String,
    pub guest: String,
    pub guest_hint: String,
    pub language: String,
    pub favorites: String,
    pub orders_history: String,
    pub loyalty: String,
    pub notifications: String,
    pub about: String,
    pub logout: String,
    pub version: String,
    pub not_saved: String,
}

/// Chat assistant strings, including the canned bot replies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatStrings {
    pub welcome: String,
    pub placeholder: String,
    pub reply: String,
    pub voice_message: String,
    pub voice_reply: String,
    pub live: String,
}

/// The full set of translated UI strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub common: CommonStrings,
    pub tabs: TabStrings,
    pub menu: MenuStrings,
    pub dish: DishStrings,
    pub cart: CartStrings,
    pub order: OrderStrings,
    pub loyalty: LoyaltyStrings,
    pub profile: ProfileStrings,
    pub chat: ChatStrings,
}

impl Catalog {
    /// Parse a single YAML bundle.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Catalog`] if the YAML is malformed or a key is missing or unknown.
    pub fn from_yaml(language: Language, yaml: &str) -> Result<Self, I18nError> {
        serde_norway::from_str(yaml).map_err(|source| I18nError::Catalog { language, source })
    }
}

/// One catalog per supported language.
#[derive(Debug, Clone)]
pub struct Catalogs {
    ru: Catalog,
    ro: Catalog,
    en: Catalog,
}

impl Catalogs {
    /// Parse the bundles compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Catalog`] naming the first bundle that fails to parse.
    pub fn bundled() -> Result<Self, I18nError> {
        Ok(Self {
            ru: Catalog::from_yaml(Language::Ru, RU_YAML)?,
            ro: Catalog::from_yaml(Language::Ro, RO_YAML)?,
            en: Catalog::from_yaml(Language::En, EN_YAML)?,
        })
    }

    /// The catalog for `language`.
    pub fn get(&self, language: Language) -> &Catalog {
        match language {
            Language::Ru => &self.ru,
            Language::Ro => &self.ro,
            Language::En => &self.en,
        }
    }
}
