pub mod report;
pub mod time;

pub use time::Time;
