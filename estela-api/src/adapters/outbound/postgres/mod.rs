mod entries;

pub use entries::PostgresEntryRepository;
