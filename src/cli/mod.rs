pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, NewsCommands};
pub use render::Renderer;
