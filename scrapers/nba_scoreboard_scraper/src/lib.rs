//! Scrapes NBA game results from the basketball-reference.com scoreboard
//! page and posts one Telegram message per game.
//!
//! The parsing pipeline lives in [`scoreboard`], [`summary`], [`rows`],
//! [`team`] and [`game`]; [`fetch`] and [`telegram`] talk to the outside
//! world.

pub mod config;
pub mod fetch;
pub mod game;
pub mod rows;
pub mod scoreboard;
pub mod summary;
pub mod team;
pub mod telegram;
pub mod types;
