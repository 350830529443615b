pub mod peaks;
pub mod symbolic;
pub mod traits;

pub use traits::PeakFinder;
