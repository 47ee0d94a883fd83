// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database selection flags for binaries that embed the store.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::Persistence;
use crate::error::PersistenceError;

/// Database options, meant to be flattened into a binary's CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct DatabaseArgs {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "CINEMA_DATABASE")]
    pub database: Option<PathBuf>,
}

impl DatabaseArgs {
    /// Opens the configured database, running pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(&self) -> Result<Persistence, PersistenceError> {
        if let Some(path) = &self.database {
            info!("Using file-based database at: {}", path.display());
            Persistence::new_with_file(path)
        } else {
            info!("Using in-memory database");
            Persistence::new_in_memory()
        }
    }
}
