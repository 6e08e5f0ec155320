//! Daily transit computation and horoscope text composition.
//!
//! This crate provides:
//! - `daily_transits`: where the Sun and Moon sit today, and their
//!   sign-distance aspect to a natal Moon sign
//! - Static interpretive text tables keyed by sign, nakshatra, and
//!   aspect, plus the composer that stitches them into a horoscope
//!
//! The aspect here is deliberately coarse: a whole-sign distance in
//! multiples of 30 degrees, not the true ecliptic separation. The text
//! tables are keyed to exact multiples of 30, so "fixing" the aspect
//! to real degree math would silently orphan every insight entry.

pub mod compose;
pub mod guidance;
pub mod transits;

pub use compose::{compose_horoscope, fallback_horoscope};
pub use guidance::{general_guidance, moon_sign_guidance, nakshatra_wisdom, transit_insights};
pub use transits::{DailyTransits, Transit, daily_transits, sign_aspect_deg};
