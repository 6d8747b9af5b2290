// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Developer commands for the HR admin workspace: linting, building,
//! testing, coverage, dependency checks and migration verification.
//!
//! ### Migration Verification
//!
//! `cargo xtask verify-migrations` applies every embedded migration to a
//! scratch in-memory `SQLite` database and checks each collection table
//! against the record it stores: a non-null unique `id`, the `doc_key`
//! row key, exactly the entity's optional fields as nullable columns, an
//! index on the newest-first sort column where a listing is sorted, and no
//! foreign keys. It then reverts everything and checks nothing is left.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::collections::{BTreeMap, BTreeSet};
use std::{io, process::Output};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, deny, machete, build, test, verify-migrations)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate an lcov coverage report in target/
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependency licenses and advisories
    #[command(visible_alias = "cd")]
    Deny,

    /// Check for unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint clippy, docs, formatting and typos
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply clippy fixes
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Fix typos in place
    #[command(visible_alias = "typos")]
    FixTypos,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Verify that the collection migrations apply and revert cleanly
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => run_cargo(&["check", "--all-targets", "--all-features"]),
            Self::Coverage => run_cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ]),
            Self::Deny => run_cargo(&["deny", "check"]),
            Self::Machete => run_traced(&cmd!("cargo-machete")),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(&["fmt", "--all", "--check"]),
            Self::LintTypos => run_traced(&cmd!("typos")),
            Self::FixClippy => run_cargo(&[
                "clippy",
                "--all-targets",
                "--all-features",
                "--fix",
                "--allow-dirty",
                "--allow-staged",
                "--",
                "-D",
                "warnings",
            ]),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::FixTypos => run_traced(&cmd!("typos", "-w")),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    Command::Deny.run()?;
    Command::Machete.run()?;
    Command::Build.run()?;
    test()?;
    verify_migrations()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    Command::LintFormatting.run()?;
    Command::LintTypos.run()
}

fn lint_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Build the workspace docs the way docs.rs would, failing on warnings
fn lint_docs() -> Result<()> {
    let expression = cmd("cargo", ["doc", "--workspace", "--no-deps", "--all-features"])
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings");
    run_traced(&expression)
}

fn test() -> Result<()> {
    test_libs()?;
    // slowest, so last
    test_docs()
}

fn test_docs() -> Result<()> {
    run_cargo(&["test", "--doc", "--all-features"])
}

fn test_libs() -> Result<()> {
    run_cargo(&["test", "--all-targets", "--all-features"])
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_traced(&cmd("cargo", args.iter().copied()))
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    // CARGO is set because we're running in a cargo subcommand
    let expression = cmd("cargo", args.iter().copied())
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly");
    run_traced(&expression)
}

fn run_traced(expression: &duct::Expression) -> Result<()> {
    expression.run_with_trace()?;
    Ok(())
}

// ============================================================================
// Migration verification
// ============================================================================

/// What a collection table must look like once migrations are applied.
struct Collection {
    table: &'static str,
    /// Columns for the entity's optional fields; every other column is `NOT NULL`.
    nullable: &'static [&'static str],
    /// Column the listing sorts newest first, if any.
    sorted_by: Option<&'static str>,
}

const COLLECTIONS: [Collection; 6] = [
    Collection {
        table: "employees",
        nullable: &["passport_number", "passport_expiry"],
        sorted_by: None,
    },
    Collection {
        table: "vehicles",
        nullable: &["assigned_employee_id"],
        sorted_by: None,
    },
    Collection {
        table: "medical_claims",
        nullable: &["processed_date", "notes"],
        sorted_by: Some("submitted_date"),
    },
    Collection {
        table: "vehicle_claims",
        nullable: &["processed_date", "notes"],
        sorted_by: Some("submitted_date"),
    },
    Collection {
        table: "service_providers",
        nullable: &["email"],
        sorted_by: None,
    },
    Collection {
        table: "flight_reservations",
        nullable: &["return_date", "booking_reference"],
        sorted_by: Some("created_at"),
    },
];

/// Introspected shape of one table.
#[derive(Debug, Default)]
struct TableShape {
    /// Column name to (declared type, nullable).
    columns: BTreeMap<String, (String, bool)>,
    primary_key: BTreeSet<String>,
    /// Tables referenced by foreign keys.
    foreign_keys: Vec<String>,
    /// Column lists of unique indexes.
    unique: BTreeSet<Vec<String>>,
    /// Column lists of plain (non-unique) indexes.
    indexed: BTreeSet<Vec<String>>,
}

/// Apply, check, revert, check again
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting migration verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;
    tracing::info!("Applied {} migration(s)", applied.len());

    for collection in &COLLECTIONS {
        let shape = introspect_table(&mut conn, collection.table)?;
        check_collection(collection, &shape)
            .wrap_err(format!("collection '{}'", collection.table))?;
        tracing::info!(
            "Verified '{}' ({} columns)",
            collection.table,
            shape.columns.len()
        );
    }

    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {e}"))?;

    let leftover = user_tables(&mut conn)?;
    if !leftover.is_empty() {
        bail!("❌ Migration verification FAILED: tables left after revert: {leftover:?}");
    }

    tracing::info!("✓ Migration verification passed");
    Ok(())
}

fn check_collection(collection: &Collection, shape: &TableShape) -> Result<()> {
    if shape.columns.is_empty() {
        bail!("❌ table is missing");
    }

    match shape.columns.get("id") {
        Some((ty, false)) if normalize_sqlite_type(ty) == "text" => {}
        _ => bail!("❌ 'id' must be a non-null text column"),
    }
    if !shape.unique.contains(&vec![String::from("id")]) {
        bail!("❌ 'id' has no unique index");
    }

    let expected_key = BTreeSet::from([String::from("doc_key")]);
    if shape.primary_key != expected_key {
        bail!("❌ row key must be doc_key, found {:?}", shape.primary_key);
    }

    let nullable: BTreeSet<&str> = shape
        .columns
        .iter()
        .filter(|(_, (_, is_nullable))| *is_nullable)
        .map(|(name, _)| name.as_str())
        .collect();
    let expected: BTreeSet<&str> = collection.nullable.iter().copied().collect();
    if nullable != expected {
        bail!("❌ nullable columns {nullable:?}, expected {expected:?}");
    }

    if let Some(column) = collection.sorted_by {
        if !shape.indexed.contains(&vec![column.to_string()]) {
            bail!("❌ sort column '{column}' is not indexed");
        }
    }

    // References between collections are plain strings
    if !shape.foreign_keys.is_empty() {
        bail!("❌ declares foreign keys to {:?}", shape.foreign_keys);
    }

    Ok(())
}

fn user_tables(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    Ok(tables.into_iter().map(|t| t.name).collect())
}

fn introspect_table(conn: &mut SqliteConnection, table: &str) -> Result<TableShape> {
    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Integer)]
        unique: i32,
    }

    #[derive(QueryableByName)]
    struct IndexColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let mut shape = TableShape::default();

    let columns: Vec<ColumnInfo> = diesel::sql_query(format!("PRAGMA table_info({table})"))
        .load(conn)
        .wrap_err(format!("Failed to get columns for table {table}"))?;
    for col in columns {
        if col.pk > 0 {
            shape.primary_key.insert(col.name.clone());
        }
        shape.columns.insert(col.name, (col.r#type, col.notnull == 0));
    }

    let fks: Vec<ForeignKeyInfo> = diesel::sql_query(format!("PRAGMA foreign_key_list({table})"))
        .load(conn)
        .wrap_err(format!("Failed to get foreign keys for table {table}"))?;
    shape.foreign_keys = fks.into_iter().map(|fk| fk.table).collect();

    let indexes: Vec<IndexInfo> = diesel::sql_query(format!("PRAGMA index_list({table})"))
        .load(conn)
        .wrap_err(format!("Failed to get indexes for table {table}"))?;
    for idx in indexes {
        let index_columns: Vec<IndexColumnInfo> =
            diesel::sql_query(format!("PRAGMA index_info({})", idx.name))
                .load(conn)
                .wrap_err(format!("Failed to get index columns for {}", idx.name))?;
        let column_names: Vec<String> = index_columns.into_iter().map(|c| c.name).collect();

        if idx.unique == 1 {
            shape.unique.insert(column_names);
        } else {
            shape.indexed.insert(column_names);
        }
    }

    Ok(shape)
}

/// Normalize a declared `SQLite` type to its storage affinity
fn normalize_sqlite_type(sqlite_type: &str) -> &'static str {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer"
    } else if normalized.contains("TEXT")
        || normalized.contains("CHAR")
        || normalized.contains("CLOB")
    {
        "text"
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
    {
        "real"
    } else if normalized.contains("BLOB") {
        "blob"
    } else {
        "numeric"
    }
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn migrated() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        conn.run_pending_migrations(MIGRATIONS).unwrap();
        conn
    }

    #[test]
    fn test_collection_migrations_pass_verification() {
        verify_migrations().unwrap();
    }

    #[test]
    fn test_claim_table_shape_matches_record() {
        let mut conn = migrated();
        let shape = introspect_table(&mut conn, "medical_claims").unwrap();

        assert_eq!(shape.primary_key, BTreeSet::from([String::from("doc_key")]));
        assert!(shape.unique.contains(&vec![String::from("id")]));
        assert!(shape.indexed.contains(&vec![String::from("submitted_date")]));
        assert!(shape.foreign_keys.is_empty());
        assert_eq!(shape.columns["amount"], (String::from("REAL"), false));
    }

    #[test]
    fn test_extra_nullable_column_is_rejected() {
        let mut conn = migrated();
        diesel::sql_query("ALTER TABLE vehicles ADD COLUMN colour TEXT")
            .execute(&mut conn)
            .unwrap();
        let shape = introspect_table(&mut conn, "vehicles").unwrap();

        let err = check_collection(&COLLECTIONS[1], &shape).unwrap_err();
        assert!(err.to_string().contains("nullable columns"), "{err}");
    }

    #[test]
    fn test_foreign_key_is_rejected() {
        let mut conn = migrated();
        diesel::sql_query(
            "CREATE TABLE flight_reservations_fk (
                doc_key INTEGER PRIMARY KEY,
                id TEXT NOT NULL UNIQUE,
                employee_id TEXT NOT NULL REFERENCES employees(id),
                created_at TEXT NOT NULL,
                return_date TEXT,
                booking_reference TEXT
            )",
        )
        .execute(&mut conn)
        .unwrap();
        diesel::sql_query("CREATE INDEX idx_fk_created ON flight_reservations_fk(created_at)")
            .execute(&mut conn)
            .unwrap();
        let shape = introspect_table(&mut conn, "flight_reservations_fk").unwrap();

        let err = check_collection(&COLLECTIONS[5], &shape).unwrap_err();
        assert!(err.to_string().contains("foreign keys to"), "{err}");
    }

    #[test]
    fn test_missing_table_is_rejected() {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        let shape = introspect_table(&mut conn, "employees").unwrap();

        let err = check_collection(&COLLECTIONS[0], &shape).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err}");
    }
}
