mod format;
mod nearby;
mod ordering;

pub use nearby::{SearchError, get_nearby_hotels};
