pub mod game_loop;
pub mod headless;
pub mod human;

pub use game_loop::GameLoop;
pub use headless::HeadlessMode;
pub use human::HumanMode;
