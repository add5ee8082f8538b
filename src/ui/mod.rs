pub mod app;
pub mod planner;

pub use app::App;
