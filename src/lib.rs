pub mod app;
pub mod cli;

pub use app::App;
pub use cli::{Args, Mode};
