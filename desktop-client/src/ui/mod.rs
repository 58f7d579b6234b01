mod app;
mod game_ui;

pub use app::ArcadeApp;
