#![forbid(unsafe_code)]

pub mod prefs;
pub mod repository;
pub mod sqlite;

pub use prefs::{InMemoryPrefs, PrefsRepository};
pub use repository::{
    CumulativeRepository, GoalRepository, InMemoryRepository, Storage, StorageError,
    WearTimeRepository,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
