// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};

use cinema_domain::{Actor, Genre, Movie, MovieFilter, MovieSession, NewMovieSession};
use time::{Date, PrimitiveDateTime};

use crate::{MovieRepository, MovieSessionRepository, Store};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeStoreError(pub String);

impl std::fmt::Display for FakeStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fake store: {}", self.0)
    }
}

impl std::error::Error for FakeStoreError {}

#[derive(Debug, Clone, Default)]
struct Tables {
    next_id: i64,
    movies: BTreeMap<i64, (String, String)>,
    genres: BTreeMap<i64, Genre>,
    actors: BTreeMap<i64, Actor>,
    cinema_halls: BTreeSet<i64>,
    movie_genres: BTreeSet<(i64, i64)>,
    movie_actors: BTreeSet<(i64, i64)>,
    sessions: BTreeMap<i64, MovieSession>,
}

/// In-memory store that enforces references and rolls back failed units.
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    tables: Tables,
    /// When set, `attach_actors` fails.
    pub fail_attach_actors: bool,
    /// Number of `save_movie_session` calls that reached the store.
    pub saves: usize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> i64 {
        self.tables.next_id += 1;
        self.tables.next_id
    }

    pub fn add_genre(&mut self, name: &str) -> i64 {
        let id: i64 = self.next_id();
        self.tables.genres.insert(id, Genre::new(id, name));
        id
    }

    pub fn add_actor(&mut self, first_name: &str, last_name: &str) -> i64 {
        let id: i64 = self.next_id();
        self.tables
            .actors
            .insert(id, Actor::new(id, first_name, last_name));
        id
    }

    pub fn add_cinema_hall(&mut self) -> i64 {
        let id: i64 = self.next_id();
        self.tables.cinema_halls.insert(id);
        id
    }

    pub fn movie_count(&self) -> usize {
        self.tables.movies.len()
    }

    pub fn session_count(&self) -> usize {
        self.tables.sessions.len()
    }

    fn load_movie(&self, movie_id: i64) -> Option<Movie> {
        let (title, description) = self.tables.movies.get(&movie_id)?;
        let genres: Vec<Genre> = self
            .tables
            .movie_genres
            .iter()
            .filter(|(m, _)| *m == movie_id)
            .filter_map(|(_, g)| self.tables.genres.get(g).cloned())
            .collect();
        let actors: Vec<Actor> = self
            .tables
            .movie_actors
            .iter()
            .filter(|(m, _)| *m == movie_id)
            .filter_map(|(_, a)| self.tables.actors.get(a).cloned())
            .collect();
        Some(Movie::new(movie_id, title, description).with_relations(genres, actors))
    }
}

impl Store for FakeStore {
    type Error = FakeStoreError;

    fn atomically<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<Self::Error>,
    {
        let snapshot: Tables = self.tables.clone();
        let result: Result<T, E> = f(self);
        if result.is_err() {
            self.tables = snapshot;
        }
        result
    }
}

impl MovieRepository for FakeStore {
    fn find_movies(&mut self, filter: &MovieFilter) -> Result<Vec<Movie>, FakeStoreError> {
        Ok(self
            .tables
            .movies
            .keys()
            .filter_map(|id| self.load_movie(*id))
            .filter(|movie| filter.matches(movie))
            .collect())
    }

    fn find_movie(&mut self, movie_id: i64) -> Result<Option<Movie>, FakeStoreError> {
        Ok(self.load_movie(movie_id))
    }

    fn insert_movie(&mut self, title: &str, description: &str) -> Result<i64, FakeStoreError> {
        let id: i64 = self.next_id();
        self.tables
            .movies
            .insert(id, (title.to_string(), description.to_string()));
        Ok(id)
    }

    fn find_genres(&mut self, genre_ids: &[i64]) -> Result<Vec<Genre>, FakeStoreError> {
        let wanted: BTreeSet<i64> = genre_ids.iter().copied().collect();
        Ok(wanted
            .iter()
            .filter_map(|id| self.tables.genres.get(id).cloned())
            .collect())
    }

    fn find_actors(&mut self, actor_ids: &[i64]) -> Result<Vec<Actor>, FakeStoreError> {
        let wanted: BTreeSet<i64> = actor_ids.iter().copied().collect();
        Ok(wanted
            .iter()
            .filter_map(|id| self.tables.actors.get(id).cloned())
            .collect())
    }

    fn attach_genres(&mut self, movie_id: i64, genre_ids: &[i64]) -> Result<(), FakeStoreError> {
        for genre_id in genre_ids {
            self.tables.movie_genres.insert((movie_id, *genre_id));
        }
        Ok(())
    }

    fn attach_actors(&mut self, movie_id: i64, actor_ids: &[i64]) -> Result<(), FakeStoreError> {
        if self.fail_attach_actors {
            return Err(FakeStoreError(String::from("attach_actors failed")));
        }
        for actor_id in actor_ids {
            self.tables.movie_actors.insert((movie_id, *actor_id));
        }
        Ok(())
    }
}

impl MovieSessionRepository for FakeStore {
    fn insert_movie_session(&mut self, session: &NewMovieSession) -> Result<i64, FakeStoreError> {
        if !self.tables.movies.contains_key(&session.movie_id)
            || !self.tables.cinema_halls.contains(&session.cinema_hall_id)
        {
            return Err(FakeStoreError(String::from("FOREIGN KEY constraint failed")));
        }
        let id: i64 = self.next_id();
        self.tables.sessions.insert(
            id,
            MovieSession::new(
                id,
                session.show_time,
                session.movie_id,
                session.cinema_hall_id,
            ),
        );
        Ok(id)
    }

    fn find_movie_sessions(
        &mut self,
        date: Option<Date>,
    ) -> Result<Vec<MovieSession>, FakeStoreError> {
        Ok(self
            .tables
            .sessions
            .values()
            .filter(|s| date.is_none_or(|d| s.show_time().date() == d))
            .cloned()
            .collect())
    }

    fn find_movie_session(
        &mut self,
        session_id: i64,
    ) -> Result<Option<MovieSession>, FakeStoreError> {
        Ok(self.tables.sessions.get(&session_id).cloned())
    }

    fn save_movie_session(&mut self, session: &MovieSession) -> Result<(), FakeStoreError> {
        self.saves += 1;
        self.tables.sessions.insert(session.id(), session.clone());
        Ok(())
    }

    fn delete_movie_session(&mut self, session_id: i64) -> Result<usize, FakeStoreError> {
        Ok(usize::from(self.tables.sessions.remove(&session_id).is_some()))
    }

    fn movie_exists(&mut self, movie_id: i64) -> Result<bool, FakeStoreError> {
        Ok(self.tables.movies.contains_key(&movie_id))
    }

    fn cinema_hall_exists(&mut self, cinema_hall_id: i64) -> Result<bool, FakeStoreError> {
        Ok(self.tables.cinema_halls.contains(&cinema_hall_id))
    }
}

/// Parses a `YYYY-MM-DD HH:MM:SS` literal for test fixtures.
pub fn show_time(value: &str) -> PrimitiveDateTime {
    cinema_domain::parse_show_time(value).unwrap()
}

