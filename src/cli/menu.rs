use std::io;

use clap::Args;
use maison::menu::{Category, CategoryFilter, Menu};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::{CliError, Locale};

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Only list this category (appetizers, salads, soups, mains, grill, desserts, drinks)
    #[arg(long)]
    category: Option<Category>,

    /// Only list dishes whose name contains this text
    #[arg(long)]
    search: Option<String>,
}

pub(crate) fn run(
    args: &MenuArgs,
    menu: &Menu,
    locale: Locale<'_>,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let strings = &locale.catalog.menu;
    let filter = args.category.map_or(CategoryFilter::All, CategoryFilter::Only);
    let dishes = menu.filter(filter, args.search.as_deref().unwrap_or_default(), locale.language);

    let heading = match args.category {
        Some(category) => category.label(locale.catalog),
        None => &strings.all,
    };

    writeln!(out, "{} · {heading}", strings.title)?;

    if dishes.is_empty() {
        writeln!(out, "{}", strings.nothing_found)?;

        return Ok(());
    }

    let mut builder = Builder::default();

    for dish in dishes {
        builder.push_record([
            dish.id.clone(),
            dish.name(locale.language).to_string(),
            dish.category.label(locale.catalog).to_string(),
            format!("{} {}", dish.price, locale.catalog.common.currency),
            dish.badge
                .map(|badge| badge.label(locale.catalog).to_string())
                .unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::one(3), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
