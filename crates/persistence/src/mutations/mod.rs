// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for persistence layer.
//!
//! This module contains all write operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `catalog`: Genre, actor, and cinema hall creation
//! - `movies`: Movie creation and relation attachment
//! - `sessions`: Movie session insert, update, and delete
//!
//! Inserts report the new row id through `last_insert_rowid()`.

pub mod catalog;
pub mod movies;
pub mod sessions;
