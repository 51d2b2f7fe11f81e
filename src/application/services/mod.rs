//! Application services

pub mod tally;

pub use tally::{format_amount, RoomTotal, TallyService};
