// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie session writes.

use cinema_domain::{MovieSession, NewMovieSession, format_show_time};
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::movie_sessions;
use crate::error::PersistenceError;

/// Inserts a movie session and returns its id.
///
/// # Errors
///
/// Returns [`PersistenceError::ForeignKeyViolation`] if the movie or
/// cinema hall does not exist, or another error if the insert fails.
pub fn insert_movie_session(
    conn: &mut SqliteConnection,
    session: &NewMovieSession,
) -> Result<i64, PersistenceError> {
    let show_time: String = format_show_time(session.show_time)?;

    diesel::insert_into(movie_sessions::table)
        .values((
            movie_sessions::show_time.eq(&show_time),
            movie_sessions::movie_id.eq(session.movie_id),
            movie_sessions::cinema_hall_id.eq(session.cinema_hall_id),
        ))
        .execute(conn)?;

    let movie_session_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        movie_session_id,
        show_time = %show_time,
        movie_id = session.movie_id,
        cinema_hall_id = session.cinema_hall_id,
        "Created movie session"
    );

    Ok(movie_session_id)
}

/// Writes every field of `session` back to its row.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if no row has the session's id,
/// [`PersistenceError::ForeignKeyViolation`] if a reference is dangling,
/// or another error if the update fails.
pub fn save_movie_session(
    conn: &mut SqliteConnection,
    session: &MovieSession,
) -> Result<(), PersistenceError> {
    let show_time: String = format_show_time(session.show_time())?;

    let rows: usize = diesel::update(
        movie_sessions::table.filter(movie_sessions::movie_session_id.eq(session.id())),
    )
    .set((
        movie_sessions::show_time.eq(&show_time),
        movie_sessions::movie_id.eq(session.movie_id()),
        movie_sessions::cinema_hall_id.eq(session.cinema_hall_id()),
    ))
    .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Movie session {} not found",
            session.id()
        )));
    }

    info!(movie_session_id = session.id(), "Saved movie session");
    Ok(())
}

/// Deletes a movie session and returns the number of rows removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_movie_session(
    conn: &mut SqliteConnection,
    movie_session_id: i64,
) -> Result<usize, PersistenceError> {
    let rows: usize = diesel::delete(
        movie_sessions::table.filter(movie_sessions::movie_session_id.eq(movie_session_id)),
    )
    .execute(conn)?;

    info!(movie_session_id, rows, "Deleted movie session");
    Ok(rows)
}
