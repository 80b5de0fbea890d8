//! Admin Types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Top-level tenant category that scopes roles and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminType {
    /// Administrator of a single brand.
    Brand,
    /// Agency managing several brands.
    Agency,
    /// Platform owner.
    Owner,
}

impl AdminType {
    /// Returns the namespace string used as the first permission segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Agency => "agency",
            Self::Owner => "owner",
        }
    }

    /// Returns all admin types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Brand, Self::Agency, Self::Owner]
    }
}

impl fmt::Display for AdminType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(Self::Brand),
            "agency" => Ok(Self::Agency),
            "owner" => Ok(Self::Owner),
            other => Err(Error::UnknownAdminType(other.to_string())),
        }
    }
}
