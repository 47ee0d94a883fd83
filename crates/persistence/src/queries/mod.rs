// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `catalog`: Genres, actors, and cinema halls
//! - `movies`: Movies with their genre and actor relations
//! - `sessions`: Movie sessions
//!
//! Lookups by id return `Ok(None)` for absent rows.

pub mod catalog;
pub mod movies;
pub mod sessions;
