//! Store implementations that live in the core crate.
//! The relational adapter lives in `thai_lexicon_mysql`.

mod memory;

pub use memory::MemoryStopwordStore;
