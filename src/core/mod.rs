pub mod calculator;
pub mod clock;
pub mod config;
pub mod day;
pub mod log;
pub mod storage;
pub mod submission;
pub mod todo;
