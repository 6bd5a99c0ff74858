pub mod daily;
pub mod monthly;
