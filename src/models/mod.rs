pub mod climb;
pub mod session;

pub use climb::{Climb, Discipline};
pub use session::{Session, SessionType};
