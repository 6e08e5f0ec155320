use clap::{Parser, Subcommand};
use kundali_horoscope::{compose_horoscope, daily_transits, fallback_horoscope};
use kundali_time::{CivilDateTime, parse_time_hms};
use kundali_vedic::{
    BirthDetails, Nakshatra, Rashi, compute_ascendant, compute_chart, compute_moon_sign,
    compute_nakshatra, compute_sun_sign, lahiri_ayanamsa_deg, pada_of,
};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic placement and horoscope CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full Vedic chart for a birth
    Chart {
        /// Birth date (YYYY-MM-DD, UTC)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS, UTC)
        #[arg(long)]
        time: String,
        /// Latitude in decimal degrees, positive north
        #[arg(long)]
        lat: f64,
        /// Longitude in decimal degrees, positive east
        #[arg(long)]
        lon: f64,
    },
    /// Moon sign only
    MoonSign {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Sun sign only
    SunSign {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Ascendant (lagna) sign only
    Ascendant {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Birth star (nakshatra) only
    Nakshatra {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Sun/Moon transits for a date relative to a natal Moon sign
    Transits {
        /// Transit date (YYYY-MM-DD, UTC, computed at 00:00)
        #[arg(long)]
        date: String,
        /// Natal Moon sign name (e.g. Libra)
        #[arg(long)]
        moon_sign: String,
    },
    /// Daily horoscope text for a natal Moon sign
    Horoscope {
        #[arg(long)]
        date: String,
        /// Natal Moon sign name; omit for the fallback text
        #[arg(long)]
        moon_sign: Option<String>,
        /// Natal nakshatra name (optional)
        #[arg(long)]
        nakshatra: Option<String>,
    },
    /// Julian Date for a civil date/time
    Jd {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
    },
    /// Lahiri ayanamsa at a Julian Date
    Ayanamsa {
        /// Julian Date
        #[arg(long)]
        jd: f64,
    },
}

/// Parse `YYYY-MM-DD` into (year, month, day).
fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("invalid date {s:?}: expected YYYY-MM-DD"));
    }
    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| format!("invalid year in {s:?}"))?;
    let month = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid month in {s:?}"))?;
    let day = parts[2]
        .parse::<u32>()
        .map_err(|_| format!("invalid day in {s:?}"))?;
    Ok((year, month, day))
}

fn birth_details(date: &str, time: &str, lat: f64, lon: f64) -> Result<BirthDetails, String> {
    let (year, month, day) = parse_date(date)?;
    BirthDetails::from_civil_parts(year, month, day, time, lat, lon).map_err(|e| e.to_string())
}

fn civil_midnight(date: &str) -> Result<CivilDateTime, String> {
    let (year, month, day) = parse_date(date)?;
    CivilDateTime::new(year, month, day, 0, 0, 0.0).map_err(|e| e.to_string())
}

fn natal_sign(name: &str) -> Result<Rashi, String> {
    Rashi::from_name(name).ok_or_else(|| {
        format!("invalid moon sign {name:?}: expected one of Aries..Pisces")
    })
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
        } => {
            let birth = birth_details(&date, &time, lat, lon)?;
            let chart = compute_chart(&birth);
            println!("Moon sign:  {} ({:.4} deg)", chart.moon_sign, chart.moon_longitude.degrees());
            println!("Sun sign:   {} ({:.4} deg)", chart.sun_sign, chart.sun_longitude.degrees());
            println!(
                "Ascendant:  {} ({:.4} deg)",
                chart.ascendant_sign,
                chart.ascendant_longitude.degrees()
            );
            println!(
                "Nakshatra:  {} (pada {})",
                chart.nakshatra,
                pada_of(chart.moon_longitude)
            );
            println!("Ayanamsa:   {:.4} deg", chart.ayanamsa_deg);
        }
        Commands::MoonSign {
            date,
            time,
            lat,
            lon,
        } => {
            let birth = birth_details(&date, &time, lat, lon)?;
            println!("{}", compute_moon_sign(&birth));
        }
        Commands::SunSign {
            date,
            time,
            lat,
            lon,
        } => {
            let birth = birth_details(&date, &time, lat, lon)?;
            println!("{}", compute_sun_sign(&birth));
        }
        Commands::Ascendant {
            date,
            time,
            lat,
            lon,
        } => {
            let birth = birth_details(&date, &time, lat, lon)?;
            println!("{}", compute_ascendant(&birth));
        }
        Commands::Nakshatra {
            date,
            time,
            lat,
            lon,
        } => {
            let birth = birth_details(&date, &time, lat, lon)?;
            println!("{}", compute_nakshatra(&birth));
        }
        Commands::Transits { date, moon_sign } => {
            let natal = natal_sign(&moon_sign)?;
            let dt = civil_midnight(&date)?;
            let transits = daily_transits(&dt, natal);
            println!(
                "Sun:  {} (aspect {:.0} deg)",
                transits.sun.sign, transits.sun.aspect_to_natal_moon_deg
            );
            println!(
                "Moon: {} (aspect {:.0} deg)",
                transits.moon.sign, transits.moon.aspect_to_natal_moon_deg
            );
        }
        Commands::Horoscope {
            date,
            moon_sign,
            nakshatra,
        } => {
            let Some(moon_sign) = moon_sign else {
                println!("{}", fallback_horoscope());
                return Ok(());
            };
            let natal = natal_sign(&moon_sign)?;
            let natal_nakshatra = match nakshatra {
                None => None,
                Some(name) => Some(Nakshatra::from_name(&name).ok_or_else(|| {
                    format!("invalid nakshatra {name:?}: expected one of Ashwini..Revati")
                })?),
            };
            let dt = civil_midnight(&date)?;
            let transits = daily_transits(&dt, natal);
            println!(
                "{}",
                compose_horoscope(dt.julian_day(), natal, natal_nakshatra, &transits)
            );
        }
        Commands::Jd { date, time } => {
            let (year, month, day) = parse_date(&date)?;
            let (hour, minute, second) =
                parse_time_hms(&time).map_err(|e| e.to_string())?;
            let dt = CivilDateTime::new(year, month, day, hour, minute, second)
                .map_err(|e| e.to_string())?;
            println!("{:.6}", dt.julian_day());
        }
        Commands::Ayanamsa { jd } => {
            println!("{:.6} deg", lahiri_ayanamsa_deg(jd));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(msg) = run(cli) {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}
