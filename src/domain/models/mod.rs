mod coordinate;
mod official;
mod report;

pub use coordinate::*;
pub use official::*;
pub use report::*;
