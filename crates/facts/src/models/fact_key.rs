use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier for a trivia or economic fact.
///
/// Known keys are enumerated so table lookups and call sites are checked at
/// compile time. Live snapshots may carry keys this crate does not know
/// about; those are kept as [`FactKey::Custom`] so they still pass through
/// resolution unchanged.
///
/// Build keys from text with [`FactKey::from`] or [`FactKey::custom`]. A
/// `Custom` key can only be made that way, so it never shadows a known key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FactKey {
    Gasoline,
    Bread,
    Milk,
    Eggs,
    PostageStamp,
    MinimumWage,
    MovieTicket,
    MedianHomePrice,
    President,
    VicePresident,
    Population,
    Gold,
    Silver,
    WorldSeries,
    NumberOneSong,
    /// A key outside the known set, stored with its original spelling.
    Custom(CustomKey),
}

/// Name of a key outside the known set. Never equal to a canonical name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomKey(Arc<str>);

impl CustomKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FactKey {
    /// Every known key, in display order.
    pub const KNOWN: &'static [FactKey] = &[
        FactKey::Gasoline,
        FactKey::Bread,
        FactKey::Milk,
        FactKey::Eggs,
        FactKey::PostageStamp,
        FactKey::MinimumWage,
        FactKey::MovieTicket,
        FactKey::MedianHomePrice,
        FactKey::President,
        FactKey::VicePresident,
        FactKey::Population,
        FactKey::Gold,
        FactKey::Silver,
        FactKey::WorldSeries,
        FactKey::NumberOneSong,
    ];

    /// Canonical string for this key (e.g. "GALLON OF GASOLINE").
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gasoline => "GALLON OF GASOLINE",
            Self::Bread => "LOAF OF BREAD",
            Self::Milk => "GALLON OF MILK",
            Self::Eggs => "DOZEN EGGS",
            Self::PostageStamp => "POSTAGE STAMP",
            Self::MinimumWage => "MINIMUM WAGE",
            Self::MovieTicket => "MOVIE TICKET",
            Self::MedianHomePrice => "MEDIAN HOME PRICE",
            Self::President => "PRESIDENT",
            Self::VicePresident => "VICE PRESIDENT",
            Self::Population => "US POPULATION",
            Self::Gold => "OUNCE OF GOLD",
            Self::Silver => "OUNCE OF SILVER",
            Self::WorldSeries => "WON LAST WORLD SERIES",
            Self::NumberOneSong => "NUMBER ONE SONG",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Key for `name`, resolving to a known key when the name matches one.
    ///
    /// Same as [`FactKey::from`]; `FactKey::custom("president")` is
    /// [`FactKey::President`].
    pub fn custom(name: &str) -> Self {
        Self::from(name)
    }

    /// Returns true for keys outside the known set.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    fn known(name: &str) -> Option<Self> {
        Self::KNOWN
            .iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .cloned()
    }
}

impl From<&str> for FactKey {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        Self::known(trimmed).unwrap_or_else(|| Self::Custom(CustomKey(Arc::from(trimmed))))
    }
}

impl FromStr for FactKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for FactKey {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<FactKey> for String {
    fn from(key: FactKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for FactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
