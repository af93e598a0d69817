pub mod restaurant;
pub mod order;
pub mod delivery;

pub use restaurant::*;
pub use order::*;
pub use delivery::*;
