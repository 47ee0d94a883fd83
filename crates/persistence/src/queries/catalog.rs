// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Genre, actor, and cinema hall queries.

use cinema_domain::{Actor, CinemaHall, Genre};
use diesel::dsl::exists;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{ActorRow, CinemaHallRow, GenreRow};
use crate::diesel_schema::{actors, cinema_halls, genres};
use crate::error::PersistenceError;

/// Lists every genre ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_genres(conn: &mut SqliteConnection) -> Result<Vec<Genre>, PersistenceError> {
    let rows: Vec<GenreRow> = genres::table
        .order(genres::genre_id.asc())
        .select(GenreRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Genre::from).collect())
}

/// Loads the genres whose ids appear in `genre_ids`, ordered by id.
///
/// Unknown ids are silently absent from the result.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_genres(
    conn: &mut SqliteConnection,
    genre_ids: &[i64],
) -> Result<Vec<Genre>, PersistenceError> {
    debug!("Looking up genres by IDs: {:?}", genre_ids);

    let rows: Vec<GenreRow> = genres::table
        .filter(genres::genre_id.eq_any(genre_ids))
        .order(genres::genre_id.asc())
        .select(GenreRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Genre::from).collect())
}

/// Lists every actor ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_actors(conn: &mut SqliteConnection) -> Result<Vec<Actor>, PersistenceError> {
    let rows: Vec<ActorRow> = actors::table
        .order(actors::actor_id.asc())
        .select(ActorRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Actor::from).collect())
}

/// Loads the actors whose ids appear in `actor_ids`, ordered by id.
///
/// Unknown ids are silently absent from the result.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_actors(
    conn: &mut SqliteConnection,
    actor_ids: &[i64],
) -> Result<Vec<Actor>, PersistenceError> {
    debug!("Looking up actors by IDs: {:?}", actor_ids);

    let rows: Vec<ActorRow> = actors::table
        .filter(actors::actor_id.eq_any(actor_ids))
        .order(actors::actor_id.asc())
        .select(ActorRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Actor::from).collect())
}

/// Lists every cinema hall ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_cinema_halls(conn: &mut SqliteConnection) -> Result<Vec<CinemaHall>, PersistenceError> {
    let rows: Vec<CinemaHallRow> = cinema_halls::table
        .order(cinema_halls::cinema_hall_id.asc())
        .select(CinemaHallRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(CinemaHall::from).collect())
}

/// Retrieves a cinema hall by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the hall is not found.
pub fn get_cinema_hall(
    conn: &mut SqliteConnection,
    cinema_hall_id: i64,
) -> Result<Option<CinemaHall>, PersistenceError> {
    debug!("Looking up cinema hall by ID: {}", cinema_hall_id);

    let result: Result<CinemaHallRow, diesel::result::Error> = cinema_halls::table
        .filter(cinema_halls::cinema_hall_id.eq(cinema_hall_id))
        .select(CinemaHallRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(CinemaHall::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Checks whether a cinema hall exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn cinema_hall_exists(
    conn: &mut SqliteConnection,
    cinema_hall_id: i64,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(exists(
        cinema_halls::table.filter(cinema_halls::cinema_hall_id.eq(cinema_hall_id)),
    ))
    .get_result(conn)?)
}
