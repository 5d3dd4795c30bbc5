pub mod hotel;
pub mod overlap;

pub use hotel::Hotel;
pub use overlap::overlaps;
