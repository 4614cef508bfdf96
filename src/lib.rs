//! Maison
//!
//! Maison is the state core of a mobile-first restaurant ordering app: the cart store,
//! derived order totals, the language store with its bundled translation catalogs, and
//! the static menu, chat and loyalty collaborators the screens read from.

pub mod cart;
pub mod chat;
pub mod i18n;
pub mod loyalty;
pub mod menu;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod storage;
