//! diary-core - Core library for Diary
//!
//! This crate contains the entry model, the remote entry repository, and the
//! store/view-model shared by every Diary front end. The remote API is the
//! sole source of truth: the store refetches the full collection after each
//! mutation instead of patching its cache.

pub mod api;
pub mod error;
pub mod models;
pub mod store;
pub mod view;

pub use api::{EntryRepository, HttpEntryRepository};
pub use error::{Error, Result};
pub use models::{Entry, EntryDraft, EntryId, Mood};
pub use store::EntryStore;
