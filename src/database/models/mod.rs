pub mod record;

pub use record::{fixture_records, NewRecord, Record, RecordPatch};
