/// The comma-delimited line codec for emergency records.
pub mod line;
pub use line::{ParseLineError, parse_line, read_records, to_line, write_records};

mod store;
pub use store::{Store, StoreError};
