// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie and movie-session services.
//!
//! Every operation takes the store it works against as an explicit
//! argument. The services never touch a database directly: they speak the
//! [`MovieRepository`] and [`MovieSessionRepository`] contracts, which the
//! persistence crate implements on top of Diesel.
//!
//! Absent rows are reported as `Ok(None)` (or `Ok(false)` for deletes).
//! Dangling movie or cinema hall references surface as
//! [`ServiceError::MissingReference`]. Everything else the store reports is
//! passed through unchanged as [`ServiceError::Store`].

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

mod error;
mod movie;
mod movie_session;
mod store;

#[cfg(test)]
mod tests;

pub use error::{ReferencedEntity, ServiceError};
pub use movie::{create_movie, get_movie_by_id, list_movies};
pub use movie_session::{
    create_movie_session, delete_movie_session_by_id, get_movie_session_by_id,
    list_movie_sessions, update_movie_session,
};
pub use store::{MovieRepository, MovieSessionRepository, Store};
