//! Domain data types shared by the actors, the checkout pipeline and the tracker.

pub mod cart;
pub mod order;
pub mod vendor;

pub use cart::*;
pub use order::*;
pub use vendor::*;
