//! Integration test for language persistence across reloads.
//!
//! A "reload" is a fresh [`LanguageStore`] over storage that survived the previous one.

use std::{fs, sync::Arc};

use testresult::TestResult;

use maison::prelude::*;

fn catalogs() -> TestResult<Arc<Catalogs>> {
    Ok(Arc::new(Catalogs::bundled()?))
}

#[test]
fn choice_survives_reload_from_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("storage.json");

    let mut store = LanguageStore::load(FileStorage::new(&path), catalogs()?);

    assert_eq!(store.language(), Language::Ru);
    assert_eq!(store.set_language(Language::En), Persistence::Saved);

    let reloaded = LanguageStore::load(FileStorage::new(&path), catalogs()?);

    assert_eq!(reloaded.language(), Language::En);
    assert_eq!(reloaded.catalog().tabs.menu, "Menu");

    Ok(())
}

#[test]
fn unsupported_persisted_value_loads_as_russian() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{ "app-lang": "XX" }"#)?;

    let store = LanguageStore::load(FileStorage::new(&path), catalogs()?);

    assert_eq!(store.language(), Language::Ru);
    assert_eq!(store.catalog().tabs.menu, "Меню");

    Ok(())
}

#[test]
fn corrupted_file_degrades_then_recovers_on_write() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.json");
    fs::write(&path, "not json")?;

    let mut store = LanguageStore::load(FileStorage::new(&path), catalogs()?);

    assert_eq!(store.language(), Language::Ru);
    assert_eq!(store.set_language(Language::Ro), Persistence::Saved);

    let reloaded = LanguageStore::load(FileStorage::new(&path), catalogs()?);

    assert_eq!(reloaded.language(), Language::Ro);

    Ok(())
}

#[test]
fn other_keys_in_the_file_are_preserved() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{ "theme": "dark" }"#)?;

    let mut store = LanguageStore::load(FileStorage::new(&path), catalogs()?);
    store.set_language(Language::En);

    let storage = store.into_storage();

    assert_eq!(storage.get("theme")?, Some("dark".to_string()));
    assert_eq!(storage.get(LANGUAGE_KEY)?, Some("EN".to_string()));

    Ok(())
}
