use std::{io, sync::Arc};

use clap::Subcommand;
use maison::{
    i18n::{Catalog, Catalogs, I18nError, Language, LanguageStore},
    menu::{Menu, MenuError},
    pricing::PricingError,
    storage::FileStorage,
};
use thiserror::Error;

use crate::config::Config;

mod chat;
mod dish;
mod lang;
mod loyalty;
mod menu;
mod order;

/// Errors that end a command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Writing output failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The bundled menu failed to load
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// A bundled catalog failed to load, or a language code was not recognised
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Order totals could not be computed
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// No dish has this id
    #[error("unknown dish: {0:?}")]
    UnknownDish(String),

    /// An order item was not `ID` or `ID:QUANTITY`
    #[error("invalid order item {0:?}, expected ID or ID:QUANTITY")]
    InvalidOrderItem(String),
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List dishes, optionally filtered by category and name
    Menu(menu::MenuArgs),

    /// Show one dish in detail
    Dish(dish::DishArgs),

    /// Show or change the saved display language
    Lang(lang::LangCommand),

    /// Build a cart from dish ids and check it out
    Order(order::OrderArgs),

    /// Send a message to the assistant
    Chat(chat::ChatArgs),

    /// Show the loyalty account
    Loyalty,
}

/// What every command renders with.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Locale<'a> {
    pub(crate) language: Language,
    pub(crate) catalog: &'a Catalog,
}

pub(crate) fn run(config: Config, mut out: impl io::Write) -> Result<(), CliError> {
    let catalogs = Arc::new(Catalogs::bundled()?);
    let store = LanguageStore::load(
        FileStorage::new(config.storage_path),
        Arc::clone(&catalogs),
    );

    // The override never reaches storage.
    let language = config.language.unwrap_or_else(|| store.language());
    let locale = Locale {
        language,
        catalog: catalogs.get(language),
    };

    match config.command {
        Command::Menu(args) => menu::run(&args, &Menu::bundled()?, locale, &mut out),
        Command::Dish(args) => dish::run(&args, &Menu::bundled()?, locale, &mut out),
        Command::Order(args) => order::run(args, &Menu::bundled()?, locale, &mut out),
        Command::Chat(args) => chat::run(&args, locale, &mut out),
        Command::Loyalty => loyalty::run(locale, &mut out),
        Command::Lang(command) => lang::run(command, store, &mut out),
    }
}
