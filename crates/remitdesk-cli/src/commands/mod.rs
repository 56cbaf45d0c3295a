pub mod actions;
pub mod auth;
mod output;
pub mod records;
