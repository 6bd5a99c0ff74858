use crate::cli::commands::resolve_person;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::monthly::{PersonFilter, YearMonth, monthly_summary};
use crate::core::load_store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::staff::StaffProfile;
use crate::ui::messages::header;
use crate::utils::colors::colorize_punch;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { person, month } = cmd {
        let filter = match resolve_person(person.as_deref())? {
            Some(s) => PersonFilter::One(s),
            None => PersonFilter::All,
        };
        let ym = match month {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::current(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let store = load_store(&mut pool)?;

        let summary = monthly_summary(store.list(), filter, ym);

        header(format!("Monthly totals {}", ym));

        let mut table = Table::new(
            ["PERSON", "ID", "WORK", "RECORDS"]
                .into_iter()
                .map(Column::new)
                .collect(),
        );

        for s in &summary {
            let name = StaffProfile::find(s.person_id)
                .map(StaffProfile::styled_name)
                .unwrap_or_else(|| s.display_name.to_string());
            table.add_row(vec![
                name,
                s.person_id.to_string(),
                colorize_punch(&format_seconds(s.total_work_seconds)),
                s.record_count.to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
