use std::io;

use clap::Args;
use maison::menu::Menu;

use super::{CliError, Locale};

#[derive(Debug, Args)]
pub(crate) struct DishArgs {
    /// Dish id, as listed by `maison menu`
    id: String,
}

pub(crate) fn run(
    args: &DishArgs,
    menu: &Menu,
    locale: Locale<'_>,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let dish = menu
        .get(&args.id)
        .ok_or_else(|| CliError::UnknownDish(args.id.clone()))?;

    let catalog = locale.catalog;
    let strings = &catalog.dish;

    writeln!(out, "{}", dish.name(locale.language))?;

    if let Some(badge) = dish.badge {
        writeln!(out, "[{}]", badge.label(catalog))?;
    }

    writeln!(
        out,
        "{} {} · {} {} · {}: {} {}",
        dish.price,
        catalog.common.currency,
        dish.weight,
        strings.grams,
        strings.prep_time,
        dish.prep_time,
        strings.minutes,
    )?;
    writeln!(out)?;
    writeln!(out, "{}: {}", strings.description, dish.description(locale.language))?;
    writeln!(
        out,
        "{}: {}",
        strings.ingredients,
        dish.ingredients(locale.language).join(", ")
    )?;

    if let Some(allergens) = &dish.allergens {
        writeln!(out, "{}: {}", strings.allergens, allergens.join(", "))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use maison::i18n::{Catalogs, Language};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn prints_localized_details() -> TestResult {
        let catalogs = Catalogs::bundled()?;
        let locale = Locale {
            language: Language::En,
            catalog: catalogs.get(Language::En),
        };
        let mut out = Vec::new();

        run(
            &DishArgs {
                id: "bruschetta".to_string(),
            },
            &Menu::bundled()?,
            locale,
            &mut out,
        )?;

        let printed = String::from_utf8(out)?;

        assert!(printed.contains("Tomato bruschetta"));
        assert!(printed.contains("95 MDL"));
        assert!(printed.contains("Allergens: gluten"));

        Ok(())
    }

    #[test]
    fn unknown_dish_is_an_error() -> TestResult {
        let catalogs = Catalogs::bundled()?;
        let locale = Locale {
            language: Language::Ru,
            catalog: catalogs.get(Language::Ru),
        };

        let result = run(
            &DishArgs {
                id: "pizza".to_string(),
            },
            &Menu::bundled()?,
            locale,
            Vec::new(),
        );

        assert!(matches!(result, Err(CliError::UnknownDish(id)) if id == "pizza"));

        Ok(())
    }
}
