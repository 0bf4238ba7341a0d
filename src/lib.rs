//! Terminal take on a productivity dashboard: a daily task list that archives itself when the
//! day changes, a pomodoro countdown, notes, a month calendar and a motivational quote.
//! Everything is kept in a local store, there is no server involved.
//!

pub mod calendar;
pub mod cli;
pub mod dashboard;
pub mod fs;
pub mod notes;
pub mod pomodoro;
pub mod quote;
pub mod storage;
pub mod tasks;
pub mod utils;
