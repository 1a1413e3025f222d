mod entries;
mod snapshots;

pub use entries::EntryServiceImpl;
pub use snapshots::EntrySubscription;
