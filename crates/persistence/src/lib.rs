// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the cinema data layer.
//!
//! This crate stores genres, actors, cinema halls, movies, and movie
//! sessions in `SQLite` through Diesel, and implements the store contract
//! from the [`cinema`] crate so the movie and session services run against
//! a real database.
//!
//! ## Schema
//!
//! The schema is owned by the embedded migrations under `migrations/`
//! and applied every time a [`Persistence`] is opened. Show times are
//! stored as `YYYY-MM-DD HH:MM:SS` text, which sorts chronologically, so
//! day filters are plain half-open string ranges.
//!
//! ## Transactions
//!
//! [`cinema::Store::atomically`] opens a transaction (or a savepoint when
//! one is already open) and rolls it back when the unit of work fails.
//!
//! ## Testing Philosophy
//!
//! - Every test opens its own uniquely named in-memory database
//! - Services are exercised end to end through this crate
//! - Nothing here requires external infrastructure

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use cinema_domain::{Actor, CinemaHall, Genre};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod config;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use config::DatabaseArgs;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed store for the cinema data layer.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database, so instances
    /// never see each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_cinema_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // File databases use WAL journaling.
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Creates a genre.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::UniqueViolation`] if the name is taken.
    pub fn create_genre(&mut self, name: &str) -> Result<Genre, PersistenceError> {
        mutations::catalog::create_genre(&mut self.conn, name)
    }

    /// Creates an actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_actor(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Actor, PersistenceError> {
        mutations::catalog::create_actor(&mut self.conn, first_name, last_name)
    }

    /// Creates a cinema hall with `rows` rows of `seats_in_row` seats.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_cinema_hall(
        &mut self,
        name: &str,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<CinemaHall, PersistenceError> {
        mutations::catalog::create_cinema_hall(&mut self.conn, name, rows, seats_in_row)
    }

    /// Lists all genres ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_genres(&mut self) -> Result<Vec<Genre>, PersistenceError> {
        queries::catalog::list_genres(&mut self.conn)
    }

    /// Lists all actors ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_actors(&mut self) -> Result<Vec<Actor>, PersistenceError> {
        queries::catalog::list_actors(&mut self.conn)
    }

    /// Lists all cinema halls ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_cinema_halls(&mut self) -> Result<Vec<CinemaHall>, PersistenceError> {
        queries::catalog::list_cinema_halls(&mut self.conn)
    }

    /// Retrieves a cinema hall by id, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_cinema_hall(
        &mut self,
        cinema_hall_id: i64,
    ) -> Result<Option<CinemaHall>, PersistenceError> {
        queries::catalog::get_cinema_hall(&mut self.conn, cinema_hall_id)
    }
}
