mod fact_key;
mod period;
mod types;

pub use fact_key::{CustomKey, FactKey};
pub use period::{TargetDate, YearMonth};
pub use types::{FactMap, FactValue, Year};
