//! Static interpretive text tables.
//!
//! Keyed by moon sign, nakshatra, and whole-sign aspect. Aspect
//! matching is exact equality against multiples of 30 — safe because
//! [`crate::transits::sign_aspect_deg`] only ever produces such
//! values, and intentional: the table has no entries for anything
//! else.

use kundali_vedic::{Nakshatra, Rashi};

use crate::transits::DailyTransits;

/// Daily guidance for a natal Moon sign.
pub const fn moon_sign_guidance(sign: Rashi) -> &'static str {
    match sign {
        Rashi::Aries => {
            "Your fiery nature seeks expression today. Channel your dynamic energy \
             into purposeful action. The warrior spirit within you is awakened - \
             use it wisely for constructive endeavors."
        }
        Rashi::Taurus => {
            "Stability and comfort call to you. Ground yourself in the material \
             world while remaining open to spiritual growth. Your natural patience \
             is a gift - trust in divine timing."
        }
        Rashi::Gemini => {
            "Communication flows through you like a river. Share your ideas and \
             connect with others. Your curious mind seeks knowledge - follow the \
             threads of wisdom that appear."
        }
        Rashi::Cancer => {
            "Emotional depth is your strength. Honor your feelings while \
             maintaining boundaries. The nurturing energy within you can heal both \
             yourself and others today."
        }
        Rashi::Leo => {
            "Your inner light shines brightly. Express your authentic self with \
             confidence. Leadership comes naturally - inspire others through your \
             example and generosity of spirit."
        }
        Rashi::Virgo => {
            "Attention to detail serves you well. Organize and refine your \
             environment and thoughts. Service to others brings fulfillment, but \
             remember to serve yourself with equal devotion."
        }
        Rashi::Libra => {
            "Balance and harmony guide your path. Seek equilibrium in all \
             relationships and decisions. Your diplomatic nature can bridge \
             divides - use this gift with awareness."
        }
        Rashi::Scorpio => {
            "Transformation stirs within your depths. Embrace change and release \
             what no longer serves. Your intensity is power - direct it toward \
             regeneration and truth."
        }
        Rashi::Sagittarius => {
            "Expansion and wisdom call to you. Explore new horizons, whether \
             physical or philosophical. Your optimistic spirit uplifts others - \
             share your vision generously."
        }
        Rashi::Capricorn => {
            "Discipline and structure support your goals. Build steadily toward \
             your aspirations. Your practical wisdom combined with spiritual \
             awareness creates lasting achievement."
        }
        Rashi::Aquarius => {
            "Innovation and humanitarian ideals inspire you. Think beyond \
             convention and embrace your uniqueness. Your vision for collective \
             progress can manifest through conscious action."
        }
        Rashi::Pisces => {
            "Spiritual sensitivity heightens your awareness. Trust your intuition \
             and creative imagination. Compassion flows naturally from you - \
             extend it to yourself as well as others."
        }
    }
}

/// One-line wisdom for a birth nakshatra.
pub const fn nakshatra_wisdom(nakshatra: Nakshatra) -> &'static str {
    match nakshatra {
        Nakshatra::Ashwini => {
            "Swift action and healing energy surround you. Trust your pioneering spirit."
        }
        Nakshatra::Bharani => {
            "Creative power and transformation are your gifts. Honor life cycles."
        }
        Nakshatra::Krittika => {
            "Sharp discernment cuts through illusion. Use your clarity wisely."
        }
        Nakshatra::Rohini => {
            "Beauty and growth flourish through you. Nurture what you wish to see bloom."
        }
        Nakshatra::Mrigashira => {
            "Curiosity leads to discovery. Follow your quest for knowledge."
        }
        Nakshatra::Ardra => "Storms bring renewal. Embrace change as a purifying force.",
        Nakshatra::Punarvasu => "Return to your center. Renewal and restoration are available.",
        Nakshatra::Pushya => "Nourishment and support flow naturally. Share your abundance.",
        Nakshatra::Ashlesha => "Deep wisdom lies in the shadows. Embrace your mystical nature.",
        Nakshatra::Magha => "Ancestral power supports you. Honor your lineage and authority.",
        Nakshatra::PurvaPhalguni => "Joy and creativity are your birthright. Celebrate life.",
        Nakshatra::UttaraPhalguni => {
            "Generosity and partnership bring fulfillment. Give and receive freely."
        }
        Nakshatra::Hasta => {
            "Skillful hands create magic. Your craftsmanship manifests intentions."
        }
        Nakshatra::Chitra => "Artistic vision illuminates your path. Create beauty consciously.",
        Nakshatra::Swati => "Independence and flexibility serve you. Move with the wind.",
        Nakshatra::Vishakha => {
            "Determined focus achieves goals. Channel your intensity purposefully."
        }
        Nakshatra::Anuradha => {
            "Devotion and friendship deepen bonds. Cultivate meaningful connections."
        }
        Nakshatra::Jyeshtha => {
            "Leadership and protection are your domain. Use power responsibly."
        }
        Nakshatra::Mula => {
            "Root out what no longer serves. Transformation begins at the foundation."
        }
        Nakshatra::PurvaAshadha => {
            "Invincible spirit carries you forward. Trust your inner strength."
        }
        Nakshatra::UttaraAshadha => "Victory comes through righteousness. Stand in your truth.",
        Nakshatra::Shravana => "Listen deeply to wisdom. Knowledge comes through receptivity.",
        Nakshatra::Dhanishta => {
            "Rhythm and prosperity align. Move in harmony with cosmic timing."
        }
        Nakshatra::Shatabhisha => "Healing and mystery intertwine. Explore hidden dimensions.",
        Nakshatra::PurvaBhadrapada => {
            "Spiritual fire purifies. Embrace transformation courageously."
        }
        Nakshatra::UttaraBhadrapada => {
            "Deep wisdom and compassion unite. Serve the greater good."
        }
        Nakshatra::Revati => "Journey's end brings new beginnings. Trust in divine guidance.",
    }
}

/// Transit-derived insight lines, joined with single spaces.
///
/// Aspect values are compared for exact equality: every aspect is a
/// whole-sign multiple of 30 by construction, so the conjunction /
/// trine / opposition / square buckets either match exactly or not at
/// all.
pub fn transit_insights(transits: &DailyTransits, natal_moon: Rashi) -> String {
    let mut insights: Vec<&str> = Vec::new();

    let moon_aspect = transits.moon.aspect_to_natal_moon_deg;
    if moon_aspect == 0.0 {
        insights.push(
            "The Moon returns to your natal position, bringing emotional clarity and a fresh start.",
        );
    } else if moon_aspect == 120.0 || moon_aspect == 240.0 {
        insights.push(
            "The Moon forms a harmonious trine, supporting emotional flow and positive connections.",
        );
    } else if moon_aspect == 180.0 {
        insights.push(
            "The Moon opposes your natal position, inviting balance between inner needs and outer demands.",
        );
    } else if moon_aspect == 90.0 || moon_aspect == 270.0 {
        insights.push(
            "The Moon creates dynamic tension, catalyzing growth through emotional challenges.",
        );
    }

    let sun_aspect = transits.sun.aspect_to_natal_moon_deg;
    if sun_aspect == 0.0 {
        insights.push(
            "The Sun illuminates your emotional nature, bringing vitality and self-awareness.",
        );
    } else if sun_aspect == 120.0 || sun_aspect == 240.0 {
        insights
            .push("The Sun supports your emotional well-being with harmonious, creative energy.");
    }

    if transits.moon.sign == natal_moon {
        insights
            .push("With the Moon in your natal sign, your intuition is particularly strong today.");
    }

    insights.join(" ")
}

/// Closing lines appended to every horoscope.
pub fn general_guidance() -> String {
    [
        "Remember: The stars incline but do not compel. Your free will shapes your destiny.",
        "Practice: Take time for meditation or quiet reflection to align with cosmic rhythms.",
        "Affirmation: I am in harmony with the universe and trust in divine timing.",
    ]
    .join("\n")
}
