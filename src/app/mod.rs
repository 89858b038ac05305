// Application layer: the interactive frontend around the library core.

pub mod console;
pub mod menu;
pub mod render;

pub use console::Console;
