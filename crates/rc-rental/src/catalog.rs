//! In-memory catalog of charge profiles, tools, and holiday definitions.
//!
//! A catalog is loaded from TOML:
//!
//! ```toml
//! [resolver]
//! fixed_date_window = 2
//!
//! [[charges]]
//! tool_type = "Ladder"
//! daily_rate = "1.99"
//! weekday_charge = true
//! weekend_charge = true
//! holiday_charge = false
//!
//! [[tools]]
//! code = "LADW"
//! tool_type = "Ladder"
//! brand = "Werner"
//!
//! [[holidays]]
//! name = "Labor Day"
//! month = 9
//! pattern_observance = true
//! weekday = "Mon"
//! week_number = 1
//! ```
//!
//! or built from the standard data set with [`Catalog::standard`].

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Weekday;
use rc_core::errors::{Error, Result};
use rc_time::{HolidayDefinition, HolidaySource, ResolverSettings};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::charges::ChargeProfile;
use crate::tool::{Brand, Tool, ToolLookup};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    resolver: ResolverSettings,
    #[serde(default)]
    charges: Vec<ChargeProfile>,
    #[serde(default)]
    tools: Vec<ToolEntry>,
    #[serde(default)]
    holidays: Vec<HolidayDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ToolEntry {
    code: String,
    tool_type: String,
    brand: Brand,
}

/// Tools keyed by code, plus the holiday definitions and resolver settings
/// they are priced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    settings: ResolverSettings,
    tools: BTreeMap<String, Tool>,
    holidays: Vec<HolidayDefinition>,
}

impl Catalog {
    /// Build a catalog, joining each tool to the charge profile of its type.
    ///
    /// Fails with [`Error::Config`] on duplicate charge types, tool codes, or
    /// holiday names, on a tool whose type has no charge profile, on a
    /// negative daily rate, and on any holiday definition that does not
    /// validate.
    pub fn from_parts(
        settings: ResolverSettings,
        charges: Vec<ChargeProfile>,
        tools: impl IntoIterator<Item = (String, String, Brand)>,
        holidays: Vec<HolidayDefinition>,
    ) -> Result<Self> {
        let mut profiles = BTreeMap::new();
        for profile in charges {
            if profile.daily_rate.is_sign_negative() {
                return Err(Error::Config(format!(
                    "charge for {} has a negative daily rate {}",
                    profile.tool_type, profile.daily_rate
                )));
            }
            let tool_type = profile.tool_type.clone();
            if profiles.insert(tool_type.clone(), profile).is_some() {
                return Err(Error::Config(format!("duplicate charge type {tool_type}")));
            }
        }

        let mut by_code = BTreeMap::new();
        for (code, tool_type, brand) in tools {
            let profile = profiles.get(&tool_type).ok_or_else(|| {
                Error::Config(format!("tool {code} has unknown tool type {tool_type}"))
            })?;
            let tool = Tool::new(code.clone(), brand, profile.clone());
            if by_code.insert(code.clone(), tool).is_some() {
                return Err(Error::Config(format!("duplicate tool code {code}")));
            }
        }

        let mut names = std::collections::BTreeSet::new();
        for holiday in &holidays {
            holiday
                .validate()
                .map_err(|e| Error::Config(format!("invalid holiday: {e}")))?;
            if !names.insert(holiday.name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate holiday {}",
                    holiday.name
                )));
            }
        }

        Ok(Self {
            settings,
            tools: by_code,
            holidays,
        })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|e| Error::Config(format!("catalog: {e}")))?;
        let catalog = Self::from_parts(
            file.resolver,
            file.charges,
            file.tools
                .into_iter()
                .map(|t| (t.code, t.tool_type, t.brand)),
            file.holidays,
        )?;
        info!(
            tools = catalog.tools.len(),
            holidays = catalog.holidays.len(),
            window = catalog.settings.fixed_date_window,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Read and parse a TOML catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// The standard rental catalog: chainsaw, ladder, and two jackhammers,
    /// with New Year's Day, Independence Day, and Labor Day.
    pub fn standard() -> Self {
        let ladder = ChargeProfile::new("Ladder", Decimal::new(199, 2), true, true, false);
        let chainsaw = ChargeProfile::new("Chainsaw", Decimal::new(149, 2), true, false, true);
        let jackhammer =
            ChargeProfile::new("Jackhammer", Decimal::new(299, 2), true, false, false);

        let tools = [
            Tool::new("CHNS", Brand::Stihl, chainsaw),
            Tool::new("LADW", Brand::Werner, ladder),
            Tool::new("JAKD", Brand::DeWalt, jackhammer.clone()),
            Tool::new("JAKR", Brand::Ridgid, jackhammer),
        ];

        Self {
            settings: ResolverSettings::default(),
            tools: tools.into_iter().map(|t| (t.code.clone(), t)).collect(),
            holidays: vec![
                HolidayDefinition::fixed("New Year's Day", 1, 1, false),
                HolidayDefinition::fixed("Independence Day", 7, 4, true),
                HolidayDefinition::nth_weekday("Labor Day", 9, Weekday::Mon, 1),
            ],
        }
    }

    /// Resolver settings carried by the catalog.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Tools, ordered by code.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Tool registered under `code`.
    pub fn tool(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }

    /// Holiday definitions, in catalog order.
    pub fn holidays(&self) -> &[HolidayDefinition] {
        &self.holidays
    }
}

impl ToolLookup for Catalog {
    fn lookup_tool(&self, code: &str) -> Result<Option<Tool>> {
        Ok(self.tool(code).cloned())
    }
}

impl HolidaySource for Catalog {
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>> {
        Ok(self.holidays.clone())
    }
}
