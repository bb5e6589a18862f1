mod lookup_representatives;
mod resolve_district;

pub use lookup_representatives::*;
pub use resolve_district::*;
