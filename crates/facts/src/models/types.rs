use std::collections::HashMap;
use std::sync::Arc;

use super::fact_key::FactKey;

/// Pre-formatted display value ("$0.25", "Richard Nixon", "203,211,926").
pub type FactValue = Arc<str>;

/// Key to value mapping produced by every table, provider and the resolver.
pub type FactMap = HashMap<FactKey, FactValue>;

/// Calendar year used by the yearly and extended tables.
pub type Year = i32;
