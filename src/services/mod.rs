pub mod order_service;
pub mod delivery_service;

pub use order_service::*;
pub use delivery_service::*;
