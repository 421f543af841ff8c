//! `HolidaySource`: supplier of holiday definitions.
//!
//! The resolver does not own the definitions; it asks a source for them on
//! every cache miss.  A source backed by external storage may fail, which is
//! reported as [`Error::Unavailable`](rc_core::Error::Unavailable).

use std::sync::Arc;

use rc_core::errors::Result;

use crate::holiday::HolidayDefinition;

/// Anything that can list the known holiday definitions.
///
/// Definitions have a stable identity by name; order is not significant.
pub trait HolidaySource: Send + Sync {
    /// Return every known holiday definition.
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>>;
}

impl HolidaySource for Vec<HolidayDefinition> {
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>> {
        Ok(self.clone())
    }
}

impl HolidaySource for [HolidayDefinition] {
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>> {
        Ok(self.to_vec())
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for &T {
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>> {
        (**self).list_holiday_definitions()
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for Arc<T> {
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>> {
        (**self).list_holiday_definitions()
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for Box<T> {
    fn list_holiday_definitions(&self) -> Result<Vec<HolidayDefinition>> {
        (**self).list_holiday_definitions()
    }
}
