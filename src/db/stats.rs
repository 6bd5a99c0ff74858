use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::models::staff::ROSTER;
use crate::utils::colors::{CYAN, GREY, YELLOW, paint};
use std::collections::HashMap;
use std::fs;

fn label(text: &str) -> String {
    paint(CYAN, &format!("• {text}:"))
}

/// File, size, record counts per roster member and covered date range.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    let size_kb = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0) as f64 / 1024.0;

    println!();
    println!("{} {}", label("File"), paint(YELLOW, db_path));
    println!("{} {:.1} KB", label("Size"), size_kb);
    println!("{} {}", label("Records"), count_records(&pool.conn)?);

    let per_person: HashMap<String, i64> = {
        let mut stmt = pool
            .conn
            .prepare("SELECT person_id, COUNT(*) FROM records GROUP BY person_id")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<rusqlite::Result<_>>()?
    };
    for s in ROSTER.iter() {
        let n = per_person.get(s.person_id).copied().unwrap_or(0);
        println!("    {} ({}): {}", s.styled_name(), s.person_id, n);
    }

    // MIN/MAX over an empty table yield one row of NULLs
    let (first, last): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(date), MAX(date) FROM records",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    let none = || paint(GREY, "--");

    println!("{}", label("Date range"));
    println!("    from: {}", first.unwrap_or_else(none));
    println!("    to:   {}", last.unwrap_or_else(none));
    println!();
    Ok(())
}

/// `PRAGMA integrity_check`: `Ok(None)` when the file is sound, otherwise the
/// first problem SQLite reports.
pub fn integrity_problem(pool: &DbPool) -> rusqlite::Result<Option<String>> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok((verdict != "ok").then_some(verdict))
}
