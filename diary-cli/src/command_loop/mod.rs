mod command_loop;
mod menu;

pub use command_loop::CommandLoop;
pub use menu::MenuChoice;
