// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row types and their conversions into domain entities.

use cinema_domain::{Actor, CinemaHall, Genre, Movie, MovieSession, parse_show_time};
use diesel::prelude::*;

use crate::diesel_schema::{actors, cinema_halls, genres, movie_sessions, movies};
use crate::error::PersistenceError;

/// Diesel Queryable struct for genre rows.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = genres)]
pub struct GenreRow {
    pub genre_id: i64,
    pub name: String,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Self::new(row.genre_id, &row.name)
    }
}

/// Diesel Queryable struct for actor rows.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = actors)]
pub struct ActorRow {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Self::new(row.actor_id, &row.first_name, &row.last_name)
    }
}

/// Diesel Queryable struct for cinema hall rows.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cinema_halls)]
pub struct CinemaHallRow {
    pub cinema_hall_id: i64,
    pub name: String,
    pub num_rows: i32,
    pub seats_in_row: i32,
}

impl From<CinemaHallRow> for CinemaHall {
    fn from(row: CinemaHallRow) -> Self {
        Self::new(row.cinema_hall_id, &row.name, row.num_rows, row.seats_in_row)
    }
}

/// Diesel Queryable struct for movie rows. Relations are loaded separately.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
pub struct MovieRow {
    pub movie_id: i64,
    pub title: String,
    pub description: String,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self::new(row.movie_id, &row.title, &row.description)
    }
}

/// Diesel Queryable struct for movie session rows.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movie_sessions)]
pub struct MovieSessionRow {
    pub movie_session_id: i64,
    pub show_time: String,
    pub movie_id: i64,
    pub cinema_hall_id: i64,
}

impl TryFrom<MovieSessionRow> for MovieSession {
    type Error = PersistenceError;

    fn try_from(row: MovieSessionRow) -> Result<Self, Self::Error> {
        Ok(Self::new(
            row.movie_session_id,
            parse_show_time(&row.show_time)?,
            row.movie_id,
            row.cinema_hall_id,
        ))
    }
}
