//! # rc-rental
//!
//! Tool-rental pricing.
//!
//! A [`Checkout`] validates a [`RentalRequest`], looks the tool up through a
//! [`ToolLookup`], and produces a [`RentalAgreement`]: due date, billable
//! ("charge") days, pre-discount charge, discount, and total.  Billable days
//! are counted by the [`ChargeCalculator`] against the tool's
//! [`ChargeProfile`] and an injected [`HolidayCalendar`](rc_time::HolidayCalendar).
//!
//! The [`Catalog`] is an in-memory tool and holiday store, loadable from
//! TOML, that implements both lookups.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Rental agreement and its report.
pub mod agreement;

/// Billable-day counting and charge totals.
pub mod calculator;

/// In-memory catalog of tools, charge profiles, and holidays.
pub mod catalog;

/// Per-tool-type charge profiles.
pub mod charges;

/// The checkout service.
pub mod checkout;

/// Validated rental requests.
pub mod request;

/// Tools, brands, and the tool lookup seam.
pub mod tool;

pub use agreement::RentalAgreement;
pub use calculator::{ChargeCalculator, ChargeTotals};
pub use catalog::Catalog;
pub use charges::ChargeProfile;
pub use checkout::Checkout;
pub use request::RentalRequest;
pub use tool::{Brand, Tool, ToolLookup};
