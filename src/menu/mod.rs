//! Menu
//!
//! The read-only dish catalog the menu and dish detail screens browse. The cart never owns
//! dishes; it copies what it needs through [`Dish::to_cart_line`].

use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::NewCartLine,
    i18n::{Catalog, Language},
};

pub mod favorites;

pub use favorites::Favorites;

const MENU_FIXTURE_YAML: &str = include_str!("../../fixtures/menu.yml");

/// Menu loading errors
#[derive(Debug, Error)]
pub enum MenuError {
    /// YAML parsing error
    #[error("failed to parse menu: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two dishes share an id
    #[error("duplicate dish id: {0}")]
    DuplicateDish(String),

    /// No category has this key
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

/// A value with one variant per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized<T> {
    /// Russian
    pub ru: T,

    /// Romanian
    pub ro: T,

    /// English
    pub en: T,
}

impl<T> Localized<T> {
    /// The variant for `language`.
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Ru => &self.ru,
            Language::Ro => &self.ro,
            Language::En => &self.en,
        }
    }
}

/// Menu section a dish is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Cold and hot starters
    Appetizers,

    /// Salads
    Salads,

    /// Soups
    Soups,

    /// Main courses
    Mains,

    /// Grilled dishes
    Grill,

    /// Desserts
    Desserts,

    /// Drinks
    Drinks,
}

impl Category {
    /// Every category, in menu tab order.
    pub const ALL: [Category; 7] = [
        Category::Appetizers,
        Category::Salads,
        Category::Soups,
        Category::Mains,
        Category::Grill,
        Category::Desserts,
        Category::Drinks,
    ];

    /// Stable key, also used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::Appetizers => "appetizers",
            Category::Salads => "salads",
            Category::Soups => "soups",
            Category::Mains => "mains",
            Category::Grill => "grill",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }

    /// Localized tab label.
    pub fn label(self, catalog: &Catalog) -> &str {
        let strings = &catalog.menu;

        match self {
            Category::Appetizers => &strings.appetizers,
            Category::Salads => &strings.salads,
            Category::Soups => &strings.soups,
            Category::Mains => &strings.mains,
            Category::Grill => &strings.grill,
            Category::Desserts => &strings.desserts,
            Category::Drinks => &strings.drinks,
        }
    }
}

impl FromStr for Category {
    type Err = MenuError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| MenuError::UnknownCategory(key.to_string()))
    }
}

/// Marketing badge shown on a dish card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Best seller
    Popular,

    /// Recently added
    New,

    /// Recommended by the chef
    ChefChoice,
}

impl Badge {
    /// Localized badge label.
    pub fn label(self, catalog: &Catalog) -> &str {
        match self {
            Badge::Popular => &catalog.menu.popular,
            Badge::New => &catalog.menu.new,
            Badge::ChefChoice => &catalog.menu.chef_choice,
        }
    }
}

/// Category tab selection on the menu screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,

    /// Only this category
    Only(Category),
}

impl CategoryFilter {
    /// Check if a category passes the filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

/// A dish record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dish {
    /// Stable identifier, unique in the menu
    pub id: String,

    /// Section the dish is listed under
    pub category: Category,

    /// Price in whole currency units
    pub price: u32,

    /// Preparation time in minutes
    pub prep_time: u32,

    /// Portion weight in grams
    pub weight: u32,

    /// Optional card badge
    #[serde(default)]
    pub badge: Option<Badge>,

    /// Image reference
    pub image: String,

    name: Localized<String>,
    description: Localized<String>,
    ingredients: Localized<Vec<String>>,

    /// Allergen keys, absent when the dish has none
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
}

impl Dish {
    /// Display name in `language`.
    pub fn name(&self, language: Language) -> &str {
        self.name.get(language)
    }

    /// Description in `language`.
    pub fn description(&self, language: Language) -> &str {
        self.description.get(language)
    }

    /// Ingredient list in `language`.
    pub fn ingredients(&self, language: Language) -> &[String] {
        self.ingredients.get(language)
    }

    /// The cart input for this dish, with its name captured in `language`.
    pub fn to_cart_line(&self, language: Language) -> NewCartLine {
        NewCartLine {
            id: self.id.clone(),
            name: self.name(language).to_string(),
            unit_price: self.price,
            image: Some(self.image.clone()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuFixture {
    dishes: Vec<Dish>,
}

/// The full dish catalog, in listing order.
#[derive(Debug, Clone)]
pub struct Menu {
    dishes: Vec<Dish>,
}

impl Menu {
    /// Parse the menu compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns a [`MenuError`] if the fixture is malformed or repeats a dish id.
    pub fn bundled() -> Result<Self, MenuError> {
        Self::from_yaml(MENU_FIXTURE_YAML)
    }

    /// Parse a menu from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`MenuError`] if the YAML is malformed or repeats a dish id.
    pub fn from_yaml(yaml: &str) -> Result<Self, MenuError> {
        let fixture: MenuFixture = serde_norway::from_str(yaml)?;

        let mut seen = FxHashSet::default();

        for dish in &fixture.dishes {
            if !seen.insert(dish.id.as_str()) {
                return Err(MenuError::DuplicateDish(dish.id.clone()));
            }
        }

        Ok(Self {
            dishes: fixture.dishes,
        })
    }

    /// All dishes.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Look up a dish by id.
    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    /// Dishes in the selected category whose name in `language` contains `search`,
    /// ignoring case. A blank search matches every dish.
    pub fn filter(&self, filter: CategoryFilter, search: &str, language: Language) -> Vec<&Dish> {
        let needle = search.trim().to_lowercase();

        self.dishes
            .iter()
            .filter(|dish| filter.matches(dish.category))
            .filter(|dish| {
                needle.is_empty() || dish.name(language).to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::i18n::Catalogs;

    use super::*;

    fn ids<'a>(dishes: &[&'a Dish]) -> Vec<&'a str> {
        dishes.iter().map(|dish| dish.id.as_str()).collect()
    }

    #[test]
    fn bundled_menu_loads() -> TestResult {
        let menu = Menu::bundled()?;

        assert!(!menu.dishes().is_empty());

        for category in Category::ALL {
            assert!(
                menu.dishes().iter().any(|dish| dish.category == category),
                "no dish in {}",
                category.key()
            );
        }

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() -> TestResult {
        let menu = Menu::bundled()?;
        let first = menu.dishes().first().ok_or("empty menu")?;
        let yaml = MENU_FIXTURE_YAML.replace(
            "  - id: placinta\n",
            &format!("  - id: {}\n", first.id),
        );

        let result = Menu::from_yaml(&yaml);

        assert!(matches!(result, Err(MenuError::DuplicateDish(id)) if id == first.id));

        Ok(())
    }

    #[test]
    fn filter_by_category_keeps_order() -> TestResult {
        let menu = Menu::bundled()?;

        let soups = menu.filter(CategoryFilter::Only(Category::Soups), "", Language::En);

        assert_eq!(ids(&soups), ["zeama", "borscht"]);

        Ok(())
    }

    #[test]
    fn search_is_case_insensitive_in_active_language() -> TestResult {
        let menu = Menu::bundled()?;

        let english = menu.filter(CategoryFilter::All, "  CAESAR ", Language::En);
        let russian = menu.filter(CategoryFilter::All, "цезарь", Language::Ru);
        let wrong_language = menu.filter(CategoryFilter::All, "цезарь", Language::En);

        assert_eq!(ids(&english), ["caesar"]);
        assert_eq!(ids(&russian), ["caesar"]);
        assert!(wrong_language.is_empty());

        Ok(())
    }

    #[test]
    fn category_and_search_combine() -> TestResult {
        let menu = Menu::bundled()?;

        let result = menu.filter(CategoryFilter::Only(Category::Drinks), "steak", Language::En);

        assert!(result.is_empty());

        Ok(())
    }

    #[test]
    fn category_keys_parse() -> TestResult {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>()?, category);
        }

        assert!(matches!(
            "breakfast".parse::<Category>(),
            Err(MenuError::UnknownCategory(_))
        ));

        Ok(())
    }

    #[test]
    fn cart_line_captures_localized_name() -> TestResult {
        let menu = Menu::bundled()?;
        let dish = menu.get("mamaliga").ok_or("missing dish")?;

        let line = dish.to_cart_line(Language::Ro);

        assert_eq!(line.id, "mamaliga");
        assert_eq!(line.name, "Mămăligă cu brânză și jumări");
        assert_eq!(line.unit_price, 150);

        Ok(())
    }

    #[test]
    fn labels_come_from_catalog() -> TestResult {
        let catalogs = Catalogs::bundled()?;
        let catalog = catalogs.get(Language::En);

        assert_eq!(Category::Grill.label(catalog), "Grill");
        assert_eq!(Badge::ChefChoice.label(catalog), "Chef's choice");

        Ok(())
    }
}
