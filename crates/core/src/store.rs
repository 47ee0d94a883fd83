// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The store contract the services run against.
//!
//! Implementations own the connection and the schema. Lookups by id return
//! `Ok(None)` for absent rows; only genuine store failures are errors.

use cinema_domain::{Actor, Genre, Movie, MovieFilter, MovieSession, NewMovieSession};
use time::Date;

/// Transaction boundary shared by every repository.
pub trait Store {
    /// The error type reported by the store.
    type Error: std::error::Error + 'static;

    /// Runs `f` as one atomic unit.
    ///
    /// Changes made by `f` are committed when it returns `Ok` and rolled
    /// back when it returns `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`, or a store error if the
    /// transaction cannot be opened or committed.
    fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<Self::Error>;
}

/// Movie rows and their genre/actor relations.
pub trait MovieRepository: Store {
    /// Loads every movie accepted by `filter`, relations populated, each
    /// movie at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_movies(&mut self, filter: &MovieFilter) -> Result<Vec<Movie>, Self::Error>;

    /// Loads one movie with its relations.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_movie(&mut self, movie_id: i64) -> Result<Option<Movie>, Self::Error>;

    /// Inserts a movie row without relations and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_movie(&mut self, title: &str, description: &str) -> Result<i64, Self::Error>;

    /// Loads the genres whose ids appear in `genre_ids`. Unknown ids are
    /// absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_genres(&mut self, genre_ids: &[i64]) -> Result<Vec<Genre>, Self::Error>;

    /// Loads the actors whose ids appear in `actor_ids`. Unknown ids are
    /// absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_actors(&mut self, actor_ids: &[i64]) -> Result<Vec<Actor>, Self::Error>;

    /// Adds genres to a movie. Already attached genres are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn attach_genres(&mut self, movie_id: i64, genre_ids: &[i64]) -> Result<(), Self::Error>;

    /// Adds actors to a movie. Already attached actors are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn attach_actors(&mut self, movie_id: i64, actor_ids: &[i64]) -> Result<(), Self::Error>;
}

/// Movie session rows.
pub trait MovieSessionRepository: Store {
    /// Inserts a session and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the store
    /// rejects a dangling reference.
    fn insert_movie_session(&mut self, session: &NewMovieSession) -> Result<i64, Self::Error>;

    /// Loads all sessions, or only those whose show time falls on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_movie_sessions(&mut self, date: Option<Date>)
    -> Result<Vec<MovieSession>, Self::Error>;

    /// Loads one session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_movie_session(&mut self, session_id: i64)
    -> Result<Option<MovieSession>, Self::Error>;

    /// Writes every field of `session` back to its row.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn save_movie_session(&mut self, session: &MovieSession) -> Result<(), Self::Error>;

    /// Deletes a session and returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_movie_session(&mut self, session_id: i64) -> Result<usize, Self::Error>;

    /// Checks whether a movie row exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn movie_exists(&mut self, movie_id: i64) -> Result<bool, Self::Error>;

    /// Checks whether a cinema hall row exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn cinema_hall_exists(&mut self, cinema_hall_id: i64) -> Result<bool, Self::Error>;
}
