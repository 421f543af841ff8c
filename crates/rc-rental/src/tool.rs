//! Tools, brands, and the tool lookup seam.

use std::fmt;
use std::str::FromStr;

use rc_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::charges::ChargeProfile;

/// Tool manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Brand {
    /// Stihl.
    Stihl,
    /// Werner.
    Werner,
    /// DeWalt.
    DeWalt,
    /// Ridgid.
    Ridgid,
}

impl Brand {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Brand::Stihl => "Stihl",
            Brand::Werner => "Werner",
            Brand::DeWalt => "DeWalt",
            Brand::Ridgid => "Ridgid",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Brand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stihl" => Ok(Brand::Stihl),
            "werner" => Ok(Brand::Werner),
            "dewalt" => Ok(Brand::DeWalt),
            "ridgid" => Ok(Brand::Ridgid),
            _ => Err(Error::InvalidArgument(format!(
                "'{s}' is not a valid tool brand"
            ))),
        }
    }
}

impl TryFrom<String> for Brand {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Brand> for String {
    fn from(b: Brand) -> String {
        b.name().to_string()
    }
}

/// A rentable tool with its charge profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Unique tool code (e.g. "LADW").
    pub code: String,
    /// Tool type (e.g. "Ladder").
    pub tool_type: String,
    /// Manufacturer.
    pub brand: Brand,
    /// Charges for the tool's type.
    pub charges: ChargeProfile,
}

impl Tool {
    /// Create a tool; the tool type is taken from the charge profile.
    pub fn new(code: impl Into<String>, brand: Brand, charges: ChargeProfile) -> Self {
        Self {
            code: code.into(),
            tool_type: charges.tool_type.clone(),
            brand,
            charges,
        }
    }
}

/// Looks tools up by code.
pub trait ToolLookup: Send + Sync {
    /// Return the tool registered under `code`, or `None` if there is none.
    ///
    /// An `Err` means the lookup itself failed, not that the tool is missing.
    fn lookup_tool(&self, code: &str) -> Result<Option<Tool>>;
}

impl ToolLookup for Vec<Tool> {
    fn lookup_tool(&self, code: &str) -> Result<Option<Tool>> {
        Ok(self.iter().find(|t| t.code == code).cloned())
    }
}

impl<T: ToolLookup + ?Sized> ToolLookup for &T {
    fn lookup_tool(&self, code: &str) -> Result<Option<Tool>> {
        (**self).lookup_tool(code)
    }
}
