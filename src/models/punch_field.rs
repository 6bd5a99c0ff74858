use clap::ValueEnum;
use serde::Serialize;

/// The four punch slots of a day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum PunchField {
    Start,
    End,
    BreakStart,
    BreakEnd,
}

impl PunchField {
    pub const ALL: [PunchField; 4] = [
        PunchField::Start,
        PunchField::End,
        PunchField::BreakStart,
        PunchField::BreakEnd,
    ];

    pub fn pf_as_str(&self) -> &'static str {
        match self {
            PunchField::Start => "start",
            PunchField::End => "end",
            PunchField::BreakStart => "break-start",
            PunchField::BreakEnd => "break-end",
        }
    }

    /// Human label for success messages.
    pub fn label(&self) -> &'static str {
        match self {
            PunchField::Start => "Clock-in",
            PunchField::End => "Clock-out",
            PunchField::BreakStart => "Break start",
            PunchField::BreakEnd => "Break end",
        }
    }
}
