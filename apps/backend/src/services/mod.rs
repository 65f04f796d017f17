pub mod game_session;

pub use game_session::GameSessionService;
