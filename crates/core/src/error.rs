// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The kind of row a movie session points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferencedEntity {
    Movie,
    CinemaHall,
}

impl std::fmt::Display for ReferencedEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::CinemaHall => write!(f, "cinema hall"),
        }
    }
}

/// Errors returned by the service operations.
///
/// `E` is the error type of the store the operation ran against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError<E> {
    /// A session was created or updated with a movie or cinema hall that
    /// does not exist. Nothing was written.
    MissingReference {
        /// What kind of row was referenced.
        entity: ReferencedEntity,
        /// The identifier that did not resolve.
        id: i64,
    },
    /// The store failed.
    Store(E),
}

impl<E: std::fmt::Display> std::fmt::Display for ServiceError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingReference { entity, id } => {
                write!(f, "Referenced {entity} {id} does not exist")
            }
            Self::Store(err) => write!(f, "Store error: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ServiceError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingReference { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl<E> From<E> for ServiceError<E> {
    fn from(err: E) -> Self {
        Self::Store(err)
    }
}
