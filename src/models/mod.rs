pub mod punch_field;
pub mod record;
pub mod staff;
pub mod time_of_day;
