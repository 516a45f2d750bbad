pub mod console;
pub mod round;
pub mod session;
