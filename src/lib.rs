pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod matching;
pub mod models;
pub mod moods;
pub mod reaper;
pub mod schema;
