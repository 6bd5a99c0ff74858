use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `records` table exists.
fn records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `records` table. Unset punches are stored as '00:00:00'.
///
/// AUTOINCREMENT keeps the highest id ever used in `sqlite_sequence`, which
/// `save_all` (delete everything, re-insert) never lowers.
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id    TEXT NOT NULL,
            date         TEXT NOT NULL,
            start_time   TEXT NOT NULL DEFAULT '00:00:00',
            end_time     TEXT NOT NULL DEFAULT '00:00:00',
            break_start  TEXT NOT NULL DEFAULT '00:00:00',
            break_end    TEXT NOT NULL DEFAULT '00:00:00',
            position     INTEGER NOT NULL DEFAULT 0,
            UNIQUE(person_id, date)
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Indexes used by `load` (display order) and month filters.
fn migrate_add_record_indexes(conn: &Connection) -> Result<Option<String>> {
    let version = "0001_records_indexes";

    if migration_applied(conn, version)? {
        return Ok(None);
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_records_position ON records(position);
        CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
        "#,
    )?;

    mark_applied(conn, version, "Added position/date indexes to records")?;
    Ok(Some(format!("Migration applied: {}", version)))
}

fn records_has_autoincrement(conn: &Connection) -> Result<bool> {
    let sql: Option<String> = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type='table' AND name='records'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(sql.is_some_and(|s| s.to_uppercase().contains("AUTOINCREMENT")))
}

/// Files created before ids were tracked in `sqlite_sequence`: rebuild the
/// table so a deleted id is never handed out again.
fn migrate_records_autoincrement(conn: &Connection) -> Result<Option<String>> {
    let version = "0002_records_autoincrement";

    if migration_applied(conn, version)? {
        return Ok(None);
    }

    if !records_has_autoincrement(conn)? {
        conn.execute_batch(
            r#"
            BEGIN;

            ALTER TABLE records RENAME TO records_old;

            CREATE TABLE records (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                person_id    TEXT NOT NULL,
                date         TEXT NOT NULL,
                start_time   TEXT NOT NULL DEFAULT '00:00:00',
                end_time     TEXT NOT NULL DEFAULT '00:00:00',
                break_start  TEXT NOT NULL DEFAULT '00:00:00',
                break_end    TEXT NOT NULL DEFAULT '00:00:00',
                position     INTEGER NOT NULL DEFAULT 0,
                UNIQUE(person_id, date)
            );

            INSERT INTO records
                (id, person_id, date, start_time, end_time, break_start, break_end, position)
            SELECT id, person_id, date, start_time, end_time, break_start, break_end, position
            FROM records_old;

            DROP TABLE records_old;

            CREATE INDEX IF NOT EXISTS idx_records_position ON records(position);
            CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);

            COMMIT;
            "#,
        )?;
    }

    mark_applied(conn, version, "Record ids are never reused")?;
    Ok(Some(format!("Migration applied: {}", version)))
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `DbPool::new` every time the database is opened. Nothing is
/// printed here; the returned lines describe what was done so that `init`
/// and `db --migrate` can report it.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut applied = Vec::new();
    ensure_log_table(conn)?;

    if !records_table_exists(conn)? {
        create_records_table(conn)?;
        applied.push("Created records table.".to_string());
    }

    applied.extend(migrate_add_record_indexes(conn)?);
    applied.extend(migrate_records_autoincrement(conn)?);

    Ok(applied)
}

/// Highest record id ever inserted, `0` for a table that never had rows.
pub fn record_id_high_water(conn: &Connection) -> Result<i64> {
    let seq: Option<i64> = conn
        .query_row(
            "SELECT seq FROM sqlite_sequence WHERE name = 'records'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let max_id: i64 =
        conn.query_row("SELECT IFNULL(MAX(id), 0) FROM records", [], |row| row.get(0))?;
    Ok(seq.unwrap_or(0).max(max_id))
}
