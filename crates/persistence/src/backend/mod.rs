// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! transaction, and helper functions that cannot be expressed in
//! Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite`: `SQLite` backend, used for file databases and for every test
//!
//! All domain queries and mutations live in `queries/` and `mutations/`
//! and are written in plain Diesel DSL.

pub mod sqlite;
