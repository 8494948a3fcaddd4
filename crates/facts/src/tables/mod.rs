//! Static reference tables.
//!
//! Three tables cover different eras at different granularity:
//!
//! ```text
//!   1914 ........ 2004          extended  (per year, rule based)
//!          1950 ............ 2019   yearly    (per year)
//!                                2020 ...  monthly   (per month)
//! ```
//!
//! The monthly and yearly tables ship as JSON assets compiled in with
//! `include_str!` and parsed once on first use. The extended table is
//! defined in Rust. All tables are immutable after construction.

mod extended;
mod extended_data;
mod monthly;
mod period_table;
mod yearly;

use std::sync::Arc;

use lazy_static::lazy_static;

pub use extended::{ExtendedTable, YearBucket};
pub use monthly::MonthlyTable;
pub use yearly::YearlyTable;

use crate::errors::FactsError;
use crate::models::Year;

/// First year served from the monthly table. Earlier years use the yearly table.
pub const MONTHLY_FIRST_YEAR: Year = 2020;

/// First year the extended table is consulted for.
pub const EXTENDED_FIRST_YEAR: Year = 1914;

/// Last year the extended table is consulted for.
pub const EXTENDED_LAST_YEAR: Year = 2004;

const MONTHLY_JSON: &str = include_str!("data/monthly.json");
const YEARLY_JSON: &str = include_str!("data/yearly.json");

lazy_static! {
    static ref EMBEDDED: Arc<FactTables> = Arc::new(
        FactTables::from_json(MONTHLY_JSON, YEARLY_JSON, ExtendedTable::embedded())
            .expect("embedded fact tables must be valid"),
    );
}

/// The full set of reference tables a resolver reads from.
#[derive(Clone, Debug, Default)]
pub struct FactTables {
    pub monthly: MonthlyTable,
    pub yearly: YearlyTable,
    pub extended: ExtendedTable,
}

impl FactTables {
    pub fn new(monthly: MonthlyTable, yearly: YearlyTable, extended: ExtendedTable) -> Self {
        Self {
            monthly,
            yearly,
            extended,
        }
    }

    /// The tables compiled into this crate, shared process-wide.
    pub fn embedded() -> Arc<FactTables> {
        Arc::clone(&EMBEDDED)
    }

    /// Build tables from monthly and yearly JSON assets.
    pub fn from_json(
        monthly_json: &str,
        yearly_json: &str,
        extended: ExtendedTable,
    ) -> Result<Self, FactsError> {
        Ok(Self::new(
            MonthlyTable::from_json(monthly_json)?,
            YearlyTable::from_json(yearly_json)?,
            extended,
        ))
    }
}
