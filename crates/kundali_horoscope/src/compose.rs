//! Horoscope text assembly.
//!
//! Pure string composition over the computed transits and the static
//! tables. Caching, persistence, and "today" resolution belong to the
//! caller.

use kundali_time::weekday_name;
use kundali_vedic::{Nakshatra, Rashi};

use crate::guidance::{general_guidance, moon_sign_guidance, nakshatra_wisdom, transit_insights};
use crate::transits::DailyTransits;

/// Compose the full daily horoscope text.
///
/// Section order mirrors the consuming screen: header, moon-sign
/// guidance, transit insights (when any aspect matched), nakshatra
/// wisdom (when the profile carries one), closing guidance.
pub fn compose_horoscope(
    jd: f64,
    natal_moon: Rashi,
    natal_nakshatra: Option<Nakshatra>,
    transits: &DailyTransits,
) -> String {
    let mut horoscope = format!(
        "{}'s Guidance for {} Moon\n\n",
        weekday_name(jd),
        natal_moon
    );

    horoscope.push_str(moon_sign_guidance(natal_moon));
    horoscope.push_str("\n\n");

    let insights = transit_insights(transits, natal_moon);
    if !insights.is_empty() {
        horoscope.push_str("Today's Cosmic Influences:\n");
        horoscope.push_str(&insights);
        horoscope.push_str("\n\n");
    }

    if let Some(nakshatra) = natal_nakshatra {
        horoscope.push_str(&format!("Nakshatra Wisdom ({nakshatra}):\n"));
        horoscope.push_str(nakshatra_wisdom(nakshatra));
        horoscope.push_str("\n\n");
    }

    horoscope.push_str(&general_guidance());
    horoscope
}

/// Fallback text for profiles with incomplete birth data.
///
/// Callers must use this instead of invoking the engine with
/// placeholder coordinates — a zero latitude/longitude produces a
/// valid-looking but meaningless chart.
pub fn fallback_horoscope() -> &'static str {
    "Welcome to Your Daily Guidance\n\n\
     To receive personalized astrological insights, please complete your \
     birth profile with your birth date, time, and location.\n\n\
     General Wisdom for Today:\n\
     The cosmos invites you to align with your highest purpose. Take time to \
     connect with your inner wisdom through meditation or quiet reflection. \
     Trust that the universe supports your growth and evolution.\n\n\
     Remember: You are a unique expression of cosmic consciousness. Your \
     journey is sacred, and each day offers opportunities for awakening and \
     transformation.\n\n\
     Complete your profile to unlock personalized daily horoscopes tailored \
     to your birth chart."
}
