use crate::cli::commands::resolve_person;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::daily::work_seconds;
use crate::core::calculator::monthly::YearMonth;
use crate::core::load_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::punch_field::PunchField;
use crate::models::record::AttendanceRecord;
use crate::models::staff::StaffProfile;
use crate::utils::colors::{colorize_in_out, colorize_punch};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { person, month } = cmd {
        let staff = resolve_person(person.as_deref())?;
        let ym = month.as_deref().map(YearMonth::parse).transpose()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let store = load_store(&mut pool)?;

        let rows: Vec<&AttendanceRecord> = store
            .list()
            .iter()
            .filter(|r| staff.is_none_or(|s| s.person_id == r.person_id))
            .filter(|r| ym.is_none_or(|m| m.contains(r.date)))
            .collect();

        if rows.is_empty() {
            println!("No records found.");
            return Ok(());
        }

        print!("{}", render_records(&rows));
    }
    Ok(())
}

fn person_cell(person_id: &str) -> String {
    match StaffProfile::find(person_id) {
        Some(s) => s.styled_name(),
        None => person_id.to_string(),
    }
}

fn render_records(rows: &[&AttendanceRecord]) -> String {
    let mut table = Table::new(
        ["ID", "DATE", "PERSON", "START", "END", "BREAK START", "BREAK END", "WORK"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            person_cell(&r.person_id),
            colorize_in_out(&r.punch_str(PunchField::Start), true),
            colorize_in_out(&r.punch_str(PunchField::End), false),
            colorize_punch(&r.punch_str(PunchField::BreakStart)),
            colorize_punch(&r.punch_str(PunchField::BreakEnd)),
            colorize_punch(&format_seconds(work_seconds(r))),
        ]);
    }

    table.render()
}
