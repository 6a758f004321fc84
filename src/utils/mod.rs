pub mod colors;
pub mod formatting;
pub mod time;

pub use formatting::short_hash;
