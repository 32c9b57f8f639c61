pub mod params;
pub mod roles;
pub mod units;

pub use params::*;
pub use roles::*;
pub use units::*;
