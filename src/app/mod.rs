pub mod console;
pub mod seed;

pub use console::Console;
pub use seed::build_hotel;
