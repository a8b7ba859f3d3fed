//! Parser for gem5 `stats.txt` reports and the benchmark metrics derived from them
mod config;
mod decode;
mod error;
mod metrics;
mod table;
mod value;

pub use config::*;
pub use decode::*;
pub use error::*;
pub use metrics::*;
pub use table::*;
pub use value::*;
