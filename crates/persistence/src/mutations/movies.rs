// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie creation and relation attachment.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{movies, movies_actors, movies_genres};
use crate::error::PersistenceError;

/// Inserts a movie row and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_movie(
    conn: &mut SqliteConnection,
    title: &str,
    description: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(movies::table)
        .values((movies::title.eq(title), movies::description.eq(description)))
        .execute(conn)?;

    let movie_id: i64 = get_last_insert_rowid(conn)?;
    info!(movie_id, title, "Inserted movie");

    Ok(movie_id)
}

/// Links a movie to genres. Links that already exist are left alone.
///
/// # Errors
///
/// Returns an error if an insert fails, including when a genre id does
/// not exist.
pub fn attach_genres(
    conn: &mut SqliteConnection,
    movie_id: i64,
    genre_ids: &[i64],
) -> Result<(), PersistenceError> {
    for genre_id in genre_ids {
        diesel::insert_or_ignore_into(movies_genres::table)
            .values((
                movies_genres::movie_id.eq(movie_id),
                movies_genres::genre_id.eq(genre_id),
            ))
            .execute(conn)?;
    }

    debug!(movie_id, count = genre_ids.len(), "Attached genres");
    Ok(())
}

/// Links a movie to actors. Links that already exist are left alone.
///
/// # Errors
///
/// Returns an error if an insert fails, including when an actor id does
/// not exist.
pub fn attach_actors(
    conn: &mut SqliteConnection,
    movie_id: i64,
    actor_ids: &[i64],
) -> Result<(), PersistenceError> {
    for actor_id in actor_ids {
        diesel::insert_or_ignore_into(movies_actors::table)
            .values((
                movies_actors::movie_id.eq(movie_id),
                movies_actors::actor_id.eq(actor_id),
            ))
            .execute(conn)?;
    }

    debug!(movie_id, count = actor_ids.len(), "Attached actors");
    Ok(())
}
