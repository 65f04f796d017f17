pub mod app;
pub mod game;

pub use app::AppConfig;
pub use game::GameConfig;
