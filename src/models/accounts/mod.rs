pub mod entities;

pub use entities::{Account, Role};
