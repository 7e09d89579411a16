//! `sanmei`: fate charts, pillars and table lookups from the command line.

use std::path::PathBuf;
use std::process;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sanmei_base::{
    Branch, RuleTenStars, Stem, TableTenStars, TenStarSource, day_pillar, tenchusatsu,
    twelve_star,
};
use sanmei_rs::{
    BirthInput, ChartConfig, Engine, FateChart, Gender, HiddenStemBasis, PillarResolution,
    SolarTermMode, TenStarMethod,
};
use sanmei_search::{
    AstronomicalSolarTerms, NominalSolarTerms, SUPPORTED_YEARS, SolarTermConfig, SolarTermSource,
    month_terms_for_year,
};
use sanmei_time::{CivilTime, ZoneOffset, julian_day_number};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sanmei", about = "Sanmei fate-chart CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full fate chart for a birth
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        engine: EngineArgs,
        /// Gender (m/f), echoed in the output only
        #[arg(long)]
        gender: Option<Gender>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Four pillars for a birth
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        engine: EngineArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Month-opening solar terms of a year
    SolarTerms {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// UTC offset for displayed times
        #[arg(long, default_value = "+09:00", value_parser = parse_offset, allow_hyphen_values = true)]
        tz: FixedOffset,
        /// Term source
        #[arg(long, value_enum, default_value_t = ModeArg::Astronomical)]
        mode: ModeArg,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Day pillar of a calendar date
    DayPillar {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Ten major star of a day stem against another stem
    TenStar {
        /// Day stem (glyph or pinyin)
        day: Stem,
        /// Other stem (glyph or pinyin)
        other: Stem,
        /// Lookup method
        #[arg(long = "ten-star", value_enum, default_value_t = MethodArg::Rule)]
        method: MethodArg,
    },
    /// Twelve minor star of a day stem against a branch
    TwelveStar {
        /// Day stem (glyph or pinyin)
        day: Stem,
        /// Branch (glyph or pinyin)
        branch: Branch,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Local standard time of birth (YYYY-MM-DDThh:mm[:ss])
    #[arg(long, value_parser = parse_local)]
    date: NaiveDateTime,
    /// UTC offset of the birth time (+09:00, -05:00, Z)
    #[arg(long, default_value = "+09:00", value_parser = parse_offset, allow_hyphen_values = true)]
    tz: FixedOffset,
    /// Birthplace longitude in degrees, east positive
    #[arg(long, default_value_t = 135.0, allow_negative_numbers = true)]
    lon: f64,
}

#[derive(Args)]
struct EngineArgs {
    /// TOML configuration file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Solar-term source
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Ten-star lookup method
    #[arg(long = "ten-star", value_enum)]
    ten_star: Option<MethodArg>,
    /// Elapsed-day basis for hidden stems
    #[arg(long, value_enum)]
    basis: Option<BasisArg>,
    /// Add the equation of time to true solar time
    #[arg(long)]
    equation_of_time: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Nominal,
    Astronomical,
}

impl From<ModeArg> for SolarTermMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Nominal => SolarTermMode::Nominal,
            ModeArg::Astronomical => SolarTermMode::Astronomical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Rule,
    Table,
}

impl From<MethodArg> for TenStarMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Rule => TenStarMethod::Rule,
            MethodArg::Table => TenStarMethod::Table,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BasisArg {
    BirthMonth,
    OwnMonth,
}

impl From<BasisArg> for HiddenStemBasis {
    fn from(b: BasisArg) -> Self {
        match b {
            BasisArg::BirthMonth => HiddenStemBasis::BirthMonthEntry,
            BasisArg::OwnMonth => HiddenStemBasis::OwnGoverningMonth,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing and setup
// ---------------------------------------------------------------------------

fn parse_local(s: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDThh:mm[:ss], got {s}"))
}

/// Parse "+09:00", "-0330", "+9", "Z" or "UTC".
fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| "invalid offset".to_string());
    }
    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(format!("offset must start with + or -, got {s}")),
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().map_err(|_| format!("invalid offset hours in {s}"))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| format!("invalid offset minutes in {s}"))?;
    if !(0..60).contains(&minutes) {
        return Err(format!("invalid offset minutes in {s}"));
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| format!("offset out of range: {s}"))
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &EngineArgs) -> ChartConfig {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("cannot read {}: {e}", path.display())));
            toml::from_str::<ChartConfig>(&text)
                .unwrap_or_else(|e| fail(format!("invalid config {}: {e}", path.display())))
        }
        None => ChartConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.solar_terms = mode.into();
    }
    if let Some(method) = args.ten_star {
        config.ten_star_method = method.into();
    }
    if let Some(basis) = args.basis {
        config.hidden_stem_basis = basis.into();
    }
    if args.equation_of_time {
        config.equation_of_time = true;
    }
    config
}

fn build_engine(args: &EngineArgs) -> Engine {
    let config = load_config(args);
    tracing::debug!(?config, "building engine");
    Engine::new(config).unwrap_or_else(|e| fail(format!("failed to build engine: {e}")))
}

fn zone_of(offset: FixedOffset) -> ZoneOffset {
    ZoneOffset::from_minutes(offset.local_minus_utc() / 60).unwrap_or_else(|e| fail(e))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn minute_text(t: &CivilTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        t.year, t.month, t.day, t.hour, t.minute
    )
}

fn print_pillars(r: &PillarResolution, zone: ZoneOffset) {
    let p = r.pillars;
    println!(
        "Pillars:      {} {} {} {}  (year month day hour)",
        p.year.name(),
        p.month.name(),
        p.day.name(),
        p.hour.name()
    );
    println!(
        "Month term:   {} {} ({})  next {} {}",
        r.month_term.term,
        minute_text(&r.month_term.civil(zone)),
        r.mode.name(),
        r.next_term.term,
        minute_text(&r.next_term.civil(zone)),
    );
    println!(
        "True solar:   {} ({:+.1} min)",
        minute_text(&r.true_solar_time),
        r.solar_time_correction.total_minutes()
    );
    if let Some(w) = &r.boundary {
        println!(
            "Warning:      {:+.1} h from {}; year/month may differ in the other solar-term mode",
            w.hours_from_entry, w.term
        );
    }
}

fn print_chart(c: &FateChart) {
    println!(
        "Birth:        {} {}  lon {:.4}",
        minute_text(&c.input.local),
        c.input.zone,
        c.input.longitude_deg
    );
    let p = c.four_pillars;
    println!(
        "Pillars:      {} {} {} {}  (year month day hour)",
        p.year.name(),
        p.month.name(),
        p.day.name(),
        p.hour.name()
    );
    println!(
        "Month term:   {} {} ({})",
        c.month_term.term,
        minute_text(&c.month_term.civil(c.input.zone)),
        c.solar_term_mode.name()
    );
    println!(
        "True solar:   {} ({:+.1} min)",
        minute_text(&c.true_solar_time),
        c.solar_time_correction.total_minutes()
    );
    let h = c.hidden_stems;
    println!(
        "Hidden stems: {} {} {}  ({}; {}/{}/{} days)",
        h.year.stem,
        h.month.stem,
        h.day.stem,
        h.basis.name(),
        h.year.elapsed_days,
        h.month.elapsed_days,
        h.day.elapsed_days
    );
    let t = c.ten_stars;
    println!(
        "Ten stars:    head {}  chest {}  belly {}  left hand {}  right hand {}",
        t.head.glyph(),
        t.chest.glyph(),
        t.belly.glyph(),
        t.left_hand.glyph(),
        t.right_hand.glyph()
    );
    let w = c.twelve_stars;
    println!(
        "Twelve stars: left shoulder {}({})  left leg {}({})  right leg {}({})",
        w.left_shoulder.glyph(),
        w.left_shoulder.score(),
        w.left_leg.glyph(),
        w.left_leg.score(),
        w.right_leg.glyph(),
        w.right_leg.score()
    );
    println!("Energy:       {}", c.total_energy);
    let counts: Vec<String> = c
        .five_elements
        .counts
        .iter()
        .map(|(e, n)| format!("{}{n}", e.glyph()))
        .collect();
    let energy: Vec<String> = c
        .five_elements
        .energy
        .iter()
        .map(|(e, n)| format!("{}{n}", e.glyph()))
        .collect();
    println!(
        "Elements:     {}  (weighted {})",
        counts.join(" "),
        energy.join(" ")
    );
    println!("Tenchusatsu:  {}", c.tenchusatsu);
    if let Some(g) = c.input.gender {
        println!("Gender:       {g:?}");
    }
    for warning in &c.warnings {
        let sanmei_rs::ChartWarning::BoundarySensitive(b) = warning;
        println!(
            "Warning:      {:+.1} h from {}; year/month may differ in the other solar-term mode",
            b.hours_from_entry, b.term
        );
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            birth,
            engine,
            gender,
            json,
        } => {
            let engine = build_engine(&engine);
            let input = BirthInput::new(birth.date, birth.tz, birth.lon, gender);
            let chart = engine.compute(&input).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Pillars {
            birth,
            engine,
            json,
        } => {
            let engine = build_engine(&engine);
            let input = BirthInput::new(birth.date, birth.tz, birth.lon, None);
            let resolution = engine.pillars(&input).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&resolution);
            } else {
                print_pillars(&resolution, zone_of(birth.tz));
            }
        }

        Commands::SolarTerms {
            year,
            tz,
            mode,
            json,
        } => {
            if !SUPPORTED_YEARS.contains(&year) {
                fail(format!(
                    "year {year} is outside {}..={}",
                    SUPPORTED_YEARS.start(),
                    SUPPORTED_YEARS.end()
                ));
            }
            let zone = zone_of(tz);
            let source: Box<dyn SolarTermSource> = match SolarTermMode::from(mode) {
                SolarTermMode::Nominal => Box::new(NominalSolarTerms),
                SolarTermMode::Astronomical => Box::new(
                    AstronomicalSolarTerms::new(SolarTermConfig::default())
                        .unwrap_or_else(|e| fail(e)),
                ),
            };
            let entries =
                month_terms_for_year(source.as_ref(), year, zone).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&entries);
            } else {
                println!("Solar terms {year} ({}, UTC{zone})", source.mode().name());
                for e in &entries {
                    println!(
                        "  {}  {}  opens {}",
                        e.term,
                        minute_text(&e.civil(zone)),
                        e.term.month_branch()
                    );
                }
            }
        }

        Commands::DayPillar { date } => {
            use chrono::Datelike;
            let jdn = julian_day_number(date.year(), date.month(), date.day());
            let p = day_pillar(jdn);
            println!(
                "{}  (cycle {}, JDN {jdn}, {})",
                p.name(),
                p.index(),
                tenchusatsu(p)
            );
        }

        Commands::TenStar { day, other, method } => {
            let source: Box<dyn TenStarSource> = match TenStarMethod::from(method) {
                TenStarMethod::Rule => Box::new(RuleTenStars),
                TenStarMethod::Table => Box::new(TableTenStars::default()),
            };
            println!("{}", source.ten_star(day, other).glyph());
        }

        Commands::TwelveStar { day, branch } => {
            let star = twelve_star(day, branch);
            println!(
                "{}  ({}, score {})",
                star.glyph(),
                star.stage(),
                star.score()
            );
        }
    }
}
