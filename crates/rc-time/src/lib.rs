//! # rc-time
//!
//! Holiday definitions and the machinery that turns them into concrete dates.
//!
//! A [`HolidayDefinition`] is an abstract rule ("July 4, observed on the
//! nearest weekday", "1st Monday of September").  The [`HolidayResolver`]
//! maps a definition to the date it is observed in a given year and answers
//! "is this date a holiday" by scanning the definitions supplied by a
//! [`HolidaySource`].  Both answers are memoised in a [`HolidayCache`] owned by
//! the resolver.
//!
//! Consumers that only need the yes/no question depend on the
//! [`HolidayCalendar`] trait, which the resolver and the fixture calendars
//! ([`NoHolidays`], [`BespokeHolidays`]) all implement.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar with an explicit, hand-maintained holiday set.
pub mod bespoke;

/// Memoisation of resolved holidays and per-date holiday status.
pub mod cache;

/// `HolidayCalendar` trait and the trivial calendar.
pub mod calendar;

/// `HolidayDefinition`: fixed-date and nth-weekday holiday rules.
pub mod holiday;

/// `HolidayResolver`: resolves definitions and answers holiday queries.
pub mod resolver;

/// Resolver settings.
pub mod settings;

/// `HolidaySource`: where holiday definitions come from.
pub mod source;

/// Weekday and month helpers.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bespoke::BespokeHolidays;
pub use cache::HolidayCache;
pub use calendar::{HolidayCalendar, NoHolidays};
pub use holiday::{HolidayDefinition, ObservanceRule};
pub use resolver::HolidayResolver;
pub use settings::ResolverSettings;
pub use source::HolidaySource;
pub use weekday::is_weekend;
