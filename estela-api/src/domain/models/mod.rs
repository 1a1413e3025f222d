mod entry;
mod ids;
mod update;

pub use entry::*;
pub use ids::*;
pub use update::*;
