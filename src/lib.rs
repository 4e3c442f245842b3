pub mod app;
pub mod catalog;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod format;
pub mod order;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
