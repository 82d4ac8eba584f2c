pub mod cursbnr;

pub use cursbnr::{CursBnrProvider, parse_rate_page};
