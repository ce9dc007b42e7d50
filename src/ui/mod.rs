//! GUI module for the omok game
//!
//! A hotseat front end using egui/eframe. It only talks to the core through
//! [`OmokGame`](crate::OmokGame).

mod app;
mod board_view;
mod theme;

pub use app::OmokApp;
