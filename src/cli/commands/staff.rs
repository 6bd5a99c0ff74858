use crate::errors::AppResult;
use crate::models::staff::ROSTER;
use crate::utils::table::{Column, Table};

pub fn handle() -> AppResult<()> {
    let mut table = Table::new(vec![Column::new("ID"), Column::new("NAME")]);

    for s in ROSTER.iter() {
        table.add_row(vec![
            s.person_id.to_string(),
            s.styled_name(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
