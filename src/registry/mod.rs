pub mod directory;

pub use directory::{Company, TickerDirectory};
