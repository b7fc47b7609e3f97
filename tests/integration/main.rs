#![allow(clippy::expect_used, clippy::panic, dead_code, deprecated)]


mod config;
mod generate;
