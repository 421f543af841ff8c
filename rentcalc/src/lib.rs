//! # rentcalc
//!
//! Tool-rental charge engine.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `rc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! rentcalc = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rentcalc::rental::{Catalog, Checkout};
//! use rentcalc::time::HolidayResolver;
//! use rust_decimal_macros::dec;
//!
//! let catalog = Catalog::standard();
//! let holidays = HolidayResolver::with_settings(&catalog, *catalog.settings());
//! let checkout = Checkout::new(&catalog, &holidays);
//!
//! let date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
//! let agreement = checkout.checkout("LADW", 3, 10, date).unwrap();
//! assert_eq!(agreement.charge_days(), 2);
//! assert_eq!(agreement.total(), dec!(3.58));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and validation macros.
pub use rc_core as core;

/// Holiday definitions, resolution, and calendars.
pub use rc_time as time;

/// Currencies, rounding, and currency formatting.
pub use rc_money as money;

/// Charge profiles, tools, agreements, checkout, and the catalog.
pub use rc_rental as rental;
