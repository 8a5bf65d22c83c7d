pub mod day_9;
pub mod day_13;
pub mod day_18;
pub mod day_22;
pub mod day_24;
