use std::io;

use clap::{Args, Subcommand};
use maison::{
    i18n::{Language, LanguageStore, Persistence},
    storage::KeyValueStorage,
};

use crate::config::parse_language;

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct LangCommand {
    #[command(subcommand)]
    command: Option<LangSubcommand>,
}

#[derive(Debug, Subcommand)]
enum LangSubcommand {
    /// Save a new display language (RU, RO, EN)
    Set {
        #[arg(value_parser = parse_language)]
        language: Language,
    },
}

pub(crate) fn run<S: KeyValueStorage>(
    command: LangCommand,
    mut store: LanguageStore<S>,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    if let Some(LangSubcommand::Set { language }) = command.command
        && store.set_language(language) == Persistence::Failed
    {
        writeln!(out, "{language} ({})", store.catalog().profile.not_saved)?;

        return Ok(());
    }

    let current = store.language();
    let label = &store.catalog().profile.language;

    let codes: Vec<String> = Language::ALL
        .into_iter()
        .map(|language| {
            if language == current {
                format!("[{language}]")
            } else {
                language.to_string()
            }
        })
        .collect();

    writeln!(out, "{label}: {}", codes.join(" "))?;

    Ok(())
}
