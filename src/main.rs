use chrono::{NaiveDate, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lunar_calendar::cycle::parse_iso_date;
use lunar_calendar::{CalendarError, CycleCalculator, Profile, CYCLE_LENGTH};

fn resolve_start_date(args: &[String]) -> Result<Profile, CalendarError> {
    if let Some(arg) = args.first() {
        return Profile::from_iso(arg);
    }
    match std::env::var("LUNAR_CYCLE_START") {
        Ok(value) => Profile::from_iso(&value),
        Err(_) => Err(CalendarError::MissingStartDate),
    }
}

fn resolve_today(args: &[String]) -> Result<NaiveDate, CalendarError> {
    match args.get(1) {
        Some(arg) => parse_iso_date(arg),
        None => Ok(Utc::now().date_naive()),
    }
}

fn main() -> Result<(), CalendarError> {
    // Initialize logging with structured format.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_target(false)
        .compact()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let profile = resolve_start_date(&args)?;
    let today = resolve_today(&args)?;
    info!(start = %profile.start_date, %today, "resolving cycle");

    let calculator = CycleCalculator::new(profile);
    let snapshot = calculator.snapshot(today);

    println!("📆 Date: {}", snapshot.date);
    println!("🌸 Cycle Day: {} (started {})", snapshot.cycle_day, profile.start_date);
    println!(
        "{} Archetype: {} ({})",
        snapshot.archetype.symbol, snapshot.archetype.name, snapshot.archetype.message
    );
    println!(
        "{} Moon Phase: {} (fraction {:.3})",
        snapshot.phase_symbol(),
        snapshot.phase_name(),
        snapshot.phase_fraction
    );
    if !snapshot.phase_message().is_empty() {
        println!("🌙 {}", snapshot.phase_message());
    }

    println!("\n📜 Cycle Overview ({} days):", CYCLE_LENGTH);
    for day in calculator.cycle_overview(today) {
        let marker = if day.date == snapshot.date { "👉" } else { "  " };
        println!(
            "{} Day {:>2}  {}  {} {}  {} {}",
            marker,
            day.cycle_day.get(),
            day.date,
            day.archetype.symbol,
            day.archetype.name,
            day.phase_symbol(),
            day.phase_name()
        );
    }

    Ok(())
}
