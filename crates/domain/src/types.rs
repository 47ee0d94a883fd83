// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::PrimitiveDateTime;

/// A film genre.
///
/// Genres are referenced by movies and never mutated by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    id: i64,
    name: String,
}

impl Genre {
    /// Creates a genre from its persisted identifier and name.
    #[must_use]
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    /// Returns the persisted identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the genre name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A performer credited on movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    id: i64,
    first_name: String,
    last_name: String,
}

impl Actor {
    /// Creates an actor from its persisted identifier and names.
    #[must_use]
    pub fn new(id: i64, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Returns the persisted identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns `"<first> <last>"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A screening room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CinemaHall {
    id: i64,
    name: String,
    rows: i32,
    seats_in_row: i32,
}

impl CinemaHall {
    /// Creates a cinema hall from its persisted identifier and layout.
    #[must_use]
    pub fn new(id: i64, name: &str, rows: i32, seats_in_row: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            rows,
            seats_in_row,
        }
    }

    /// Returns the persisted identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub const fn seats_in_row(&self) -> i32 {
        self.seats_in_row
    }

    /// Returns the total number of seats in the hall.
    #[must_use]
    pub fn capacity(&self) -> i64 {
        i64::from(self.rows) * i64::from(self.seats_in_row)
    }
}

/// A movie together with its genre and actor relations.
///
/// Relation lists hold no duplicates. Their order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    id: i64,
    title: String,
    description: String,
    genres: Vec<Genre>,
    actors: Vec<Actor>,
}

impl Movie {
    /// Creates a movie with no relations attached.
    #[must_use]
    pub fn new(id: i64, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            genres: Vec::new(),
            actors: Vec::new(),
        }
    }

    /// Returns this movie with the given relations.
    #[must_use]
    pub fn with_relations(mut self, genres: Vec<Genre>, actors: Vec<Actor>) -> Self {
        self.genres = genres;
        self.actors = actors;
        self
    }

    /// Returns the persisted identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Returns the identifiers of the attached genres.
    #[must_use]
    pub fn genre_ids(&self) -> BTreeSet<i64> {
        self.genres.iter().map(Genre::id).collect()
    }

    /// Returns the identifiers of the attached actors.
    #[must_use]
    pub fn actor_ids(&self) -> BTreeSet<i64> {
        self.actors.iter().map(Actor::id).collect()
    }
}

/// A scheduled screening of one movie in one cinema hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSession {
    id: i64,
    show_time: PrimitiveDateTime,
    movie_id: i64,
    cinema_hall_id: i64,
}

impl MovieSession {
    /// Creates a session from its persisted fields.
    #[must_use]
    pub const fn new(
        id: i64,
        show_time: PrimitiveDateTime,
        movie_id: i64,
        cinema_hall_id: i64,
    ) -> Self {
        Self {
            id,
            show_time,
            movie_id,
            cinema_hall_id,
        }
    }

    /// Returns the persisted identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub const fn show_time(&self) -> PrimitiveDateTime {
        self.show_time
    }

    #[must_use]
    pub const fn movie_id(&self) -> i64 {
        self.movie_id
    }

    #[must_use]
    pub const fn cinema_hall_id(&self) -> i64 {
        self.cinema_hall_id
    }

    /// Applies every field set in `update`, leaving the rest unchanged.
    ///
    /// Reference validity is not checked here. Callers resolve the
    /// referenced movie and hall before applying.
    pub const fn apply(&mut self, update: &MovieSessionUpdate) {
        if let Some(show_time) = update.show_time {
            self.show_time = show_time;
        }
        if let Some(movie_id) = update.movie_id {
            self.movie_id = movie_id;
        }
        if let Some(cinema_hall_id) = update.cinema_hall_id {
            self.cinema_hall_id = cinema_hall_id;
        }
    }
}

/// Fields for a session that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovieSession {
    pub show_time: PrimitiveDateTime,
    pub movie_id: i64,
    pub cinema_hall_id: i64,
}

/// Partial update for an existing session. `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSessionUpdate {
    pub show_time: Option<PrimitiveDateTime>,
    pub movie_id: Option<i64>,
    pub cinema_hall_id: Option<i64>,
}

impl MovieSessionUpdate {
    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.show_time.is_none() && self.movie_id.is_none() && self.cinema_hall_id.is_none()
    }
}

/// Relation filter for listing movies.
///
/// An empty id set places no restriction on its dimension. Within a set the
/// ids are alternatives. Across the two sets both restrictions apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilter {
    genre_ids: BTreeSet<i64>,
    actor_ids: BTreeSet<i64>,
}

impl MovieFilter {
    /// Creates a filter that matches every movie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to movies having at least one of the given genres.
    #[must_use]
    pub fn with_genres<I: IntoIterator<Item = i64>>(mut self, genre_ids: I) -> Self {
        self.genre_ids.extend(genre_ids);
        self
    }

    /// Restricts to movies having at least one of the given actors.
    #[must_use]
    pub fn with_actors<I: IntoIterator<Item = i64>>(mut self, actor_ids: I) -> Self {
        self.actor_ids.extend(actor_ids);
        self
    }

    #[must_use]
    pub const fn genre_ids(&self) -> &BTreeSet<i64> {
        &self.genre_ids
    }

    #[must_use]
    pub const fn actor_ids(&self) -> &BTreeSet<i64> {
        &self.actor_ids
    }

    /// Returns `true` when neither dimension is restricted.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.genre_ids.is_empty() && self.actor_ids.is_empty()
    }

    /// Evaluates the filter against a loaded movie.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        let genre_match: bool = self.genre_ids.is_empty()
            || movie.genres().iter().any(|g| self.genre_ids.contains(&g.id()));
        let actor_match: bool = self.actor_ids.is_empty()
            || movie.actors().iter().any(|a| self.actor_ids.contains(&a.id()));
        genre_match && actor_match
    }
}
