//! Language store

use std::sync::Arc;

use tracing::{info, warn};

use crate::storage::KeyValueStorage;

use super::{Catalog, Catalogs, Language};

/// Storage key the language choice is persisted under.
pub const LANGUAGE_KEY: &str = "app-lang";

/// Whether a language change reached durable storage.
///
/// The in-memory language changes either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// The choice will survive a reload.
    Saved,

    /// The write failed; the choice lasts for this session only.
    Failed,
}

/// The active display language and its catalog.
#[derive(Debug)]
pub struct LanguageStore<S> {
    language: Language,
    storage: S,
    catalogs: Arc<Catalogs>,
}

impl<S: KeyValueStorage> LanguageStore<S> {
    /// Restore the persisted language, or fall back to the default.
    ///
    /// Storage is read once here and never polled again. Unreadable storage and unsupported
    /// values both degrade to [`Language::Ru`].
    pub fn load(storage: S, catalogs: Arc<Catalogs>) -> Self {
        let persisted = match storage.get(LANGUAGE_KEY) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "could not read persisted language, using default");
                None
            }
        };

        let language = Language::from_persisted(persisted.as_deref());

        if let Some(value) = persisted.as_deref()
            && value != language.code()
        {
            warn!(value, fallback = %language, "unsupported persisted language");
        }

        Self {
            language,
            storage,
            catalogs,
        }
    }

    /// Switch the active language and persist the choice, best-effort.
    pub fn set_language(&mut self, language: Language) -> Persistence {
        self.language = language;

        info!(%language, "language changed");

        match self.storage.set(LANGUAGE_KEY, language.code()) {
            Ok(()) => Persistence::Saved,
            Err(error) => {
                warn!(%error, %language, "could not persist language");
                Persistence::Failed
            }
        }
    }
}

impl<S> LanguageStore<S> {
    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Strings for the active language.
    pub fn catalog(&self) -> &Catalog {
        self.catalogs.get(self.language)
    }

    /// All bundled catalogs.
    pub fn catalogs(&self) -> &Arc<Catalogs> {
        &self.catalogs
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the backing storage, e.g. to simulate a reload.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
