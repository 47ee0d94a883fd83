// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Genre, actor, and cinema hall creation.

use cinema_domain::{Actor, CinemaHall, Genre};
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{actors, cinema_halls, genres};
use crate::error::PersistenceError;

/// Creates a genre.
///
/// # Errors
///
/// Returns [`PersistenceError::UniqueViolation`] if a genre with the same
/// name already exists, or another error if the insert fails.
pub fn create_genre(conn: &mut SqliteConnection, name: &str) -> Result<Genre, PersistenceError> {
    diesel::insert_into(genres::table)
        .values(genres::name.eq(name))
        .execute(conn)?;

    let genre_id: i64 = get_last_insert_rowid(conn)?;
    info!(genre_id, name, "Created genre");

    Ok(Genre::new(genre_id, name))
}

/// Creates an actor.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_actor(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
) -> Result<Actor, PersistenceError> {
    diesel::insert_into(actors::table)
        .values((
            actors::first_name.eq(first_name),
            actors::last_name.eq(last_name),
        ))
        .execute(conn)?;

    let actor_id: i64 = get_last_insert_rowid(conn)?;
    info!(actor_id, first_name, last_name, "Created actor");

    Ok(Actor::new(actor_id, first_name, last_name))
}

/// Creates a cinema hall.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_cinema_hall(
    conn: &mut SqliteConnection,
    name: &str,
    rows: i32,
    seats_in_row: i32,
) -> Result<CinemaHall, PersistenceError> {
    diesel::insert_into(cinema_halls::table)
        .values((
            cinema_halls::name.eq(name),
            cinema_halls::num_rows.eq(rows),
            cinema_halls::seats_in_row.eq(seats_in_row),
        ))
        .execute(conn)?;

    let cinema_hall_id: i64 = get_last_insert_rowid(conn)?;
    info!(cinema_hall_id, name, rows, seats_in_row, "Created cinema hall");

    Ok(CinemaHall::new(cinema_hall_id, name, rows, seats_in_row))
}
