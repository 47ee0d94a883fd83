// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! [`cinema`] store contract for [`Persistence`].

use cinema::{MovieRepository, MovieSessionRepository, Store};
use cinema_domain::{Actor, Genre, Movie, MovieFilter, MovieSession, NewMovieSession};
use time::Date;
use tracing::warn;

use crate::backend::sqlite;
use crate::error::PersistenceError;
use crate::{Persistence, mutations, queries};

impl Store for Persistence {
    type Error = PersistenceError;

    fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<Self::Error>,
    {
        sqlite::begin_transaction(&mut self.conn)?;

        match f(self) {
            Ok(value) => {
                sqlite::commit_transaction(&mut self.conn)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = sqlite::rollback_transaction(&mut self.conn) {
                    warn!("Failed to roll back transaction: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}

impl MovieRepository for Persistence {
    fn find_movies(&mut self, filter: &MovieFilter) -> Result<Vec<Movie>, PersistenceError> {
        queries::movies::find_movies(&mut self.conn, filter)
    }

    fn find_movie(&mut self, movie_id: i64) -> Result<Option<Movie>, PersistenceError> {
        queries::movies::get_movie(&mut self.conn, movie_id)
    }

    fn insert_movie(&mut self, title: &str, description: &str) -> Result<i64, PersistenceError> {
        mutations::movies::insert_movie(&mut self.conn, title, description)
    }

    fn find_genres(&mut self, genre_ids: &[i64]) -> Result<Vec<Genre>, PersistenceError> {
        queries::catalog::find_genres(&mut self.conn, genre_ids)
    }

    fn find_actors(&mut self, actor_ids: &[i64]) -> Result<Vec<Actor>, PersistenceError> {
        queries::catalog::find_actors(&mut self.conn, actor_ids)
    }

    fn attach_genres(&mut self, movie_id: i64, genre_ids: &[i64]) -> Result<(), PersistenceError> {
        mutations::movies::attach_genres(&mut self.conn, movie_id, genre_ids)
    }

    fn attach_actors(&mut self, movie_id: i64, actor_ids: &[i64]) -> Result<(), PersistenceError> {
        mutations::movies::attach_actors(&mut self.conn, movie_id, actor_ids)
    }
}

impl MovieSessionRepository for Persistence {
    fn insert_movie_session(&mut self, session: &NewMovieSession) -> Result<i64, PersistenceError> {
        mutations::sessions::insert_movie_session(&mut self.conn, session)
    }

    fn find_movie_sessions(
        &mut self,
        date: Option<Date>,
    ) -> Result<Vec<MovieSession>, PersistenceError> {
        queries::sessions::find_movie_sessions(&mut self.conn, date)
    }

    fn find_movie_session(
        &mut self,
        session_id: i64,
    ) -> Result<Option<MovieSession>, PersistenceError> {
        queries::sessions::get_movie_session(&mut self.conn, session_id)
    }

    fn save_movie_session(&mut self, session: &MovieSession) -> Result<(), PersistenceError> {
        mutations::sessions::save_movie_session(&mut self.conn, session)
    }

    fn delete_movie_session(&mut self, session_id: i64) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_movie_session(&mut self.conn, session_id)
    }

    fn movie_exists(&mut self, movie_id: i64) -> Result<bool, PersistenceError> {
        queries::movies::movie_exists(&mut self.conn, movie_id)
    }

    fn cinema_hall_exists(&mut self, cinema_hall_id: i64) -> Result<bool, PersistenceError> {
        queries::catalog::cinema_hall_exists(&mut self.conn, cinema_hall_id)
    }
}
