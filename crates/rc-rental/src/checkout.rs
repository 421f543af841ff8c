//! The checkout service.

use chrono::NaiveDate;
use rc_core::errors::{Error, Result};
use rc_time::HolidayCalendar;
use tracing::{debug, info};

use crate::agreement::RentalAgreement;
use crate::request::RentalRequest;
use crate::tool::ToolLookup;

/// Turns rental requests into priced agreements.
///
/// Borrows its collaborators; one `Checkout` can serve any number of
/// requests, from any number of threads.
#[derive(Clone, Copy)]
pub struct Checkout<'a> {
    tools: &'a dyn ToolLookup,
    calendar: &'a dyn HolidayCalendar,
}

impl std::fmt::Debug for Checkout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("calendar", &self.calendar.name())
            .finish_non_exhaustive()
    }
}

impl<'a> Checkout<'a> {
    /// Create a checkout over `tools`, consulting `calendar` for holidays.
    pub fn new(tools: &'a dyn ToolLookup, calendar: &'a dyn HolidayCalendar) -> Self {
        Self { tools, calendar }
    }

    /// Validate the inputs, look the tool up, and price the rental.
    ///
    /// Validation runs before the lookup, so an invalid request never touches
    /// the tool store.
    pub fn checkout(
        &self,
        tool_code: &str,
        days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> Result<RentalAgreement> {
        let request = RentalRequest::new(tool_code, days, discount_percent, checkout_date)?;
        self.checkout_request(request)
    }

    /// Price an already validated request.
    pub fn checkout_request(&self, request: RentalRequest) -> Result<RentalAgreement> {
        debug!(tool = request.tool_code(), "looking up tool");
        let tool = self
            .tools
            .lookup_tool(request.tool_code())?
            .ok_or_else(|| Error::ToolNotFound(request.tool_code().to_string()))?;
        let agreement = RentalAgreement::new(request, tool, self.calendar)?;
        info!(
            tool = agreement.tool_code(),
            checkout = %agreement.checkout_date(),
            due = %agreement.due_date(),
            total = %agreement.total(),
            "checkout complete"
        );
        Ok(agreement)
    }
}
