//! executable part of this library. pick a range in the GUI, or headless on the command line

use chrono::NaiveDate;
use clap::Parser;
use range_picker::{
    Clock, PickerError, RangeChange, RangeController, Side, WeekendList,
    config::{Config, load_config},
    csv::write_weekends,
    dates::{parse_iso_date, to_iso_date},
    gui,
};
use std::{error::Error, fs::File};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Weekend Range Picker - select a date range and list all weekends inside it
///
/// By default, this application runs in GUI mode. Use the --cli flag to run in command-line mode.
#[derive(Parser, Debug)]
#[command(version, about = "Weekend Range Picker - select a date range and list all weekends inside it", long_about = None)]
struct Args {
    /// file with settings for the picker
    #[arg(short, long)]
    config: Option<String>,

    /// run in CLI mode (no GUI)
    #[arg(short = 'C', long)]
    cli: bool,

    /// apply a preset, e.g. "Last 7 Days"
    #[arg(short, long)]
    preset: Option<String>,

    /// first day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "to", value_parser = parse_iso_date)]
    from: Option<NaiveDate>,

    /// last day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "from", value_parser = parse_iso_date)]
    to: Option<NaiveDate>,

    /// click a day in one of the calendars, e.g. from:2024-03-11 or to:2024-03-15
    #[arg(short, long, value_parser = parse_selection)]
    select: Vec<(Side, NaiveDate)>,

    /// pretend today is this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    today: Option<NaiveDate>,

    /// filename of csv with the weekends of the final range
    #[arg(short, long)]
    out: Option<String>,

    /// log filter used when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    init_logging(args.log_level.as_deref().unwrap_or(&config.logging.level));

    if args.cli {
        info!("running in CLI mode");
        run_cli(&args, &config)?;
    } else {
        info!("starting GUI mode");
        gui::run(config)?;
    }

    Ok(())
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

/// parse `from:YYYY-MM-DD` or `to:YYYY-MM-DD`
fn parse_selection(value: &str) -> Result<(Side, NaiveDate), PickerError> {
    let (side, date) = value
        .split_once(':')
        .ok_or_else(|| PickerError::InvalidSelection(value.to_string()))?;
    Ok((side.parse()?, parse_iso_date(date)?))
}

/// apply preset, explicit range and clicks in this order, print every change
fn run_cli(args: &Args, config: &Config) -> Result<RangeChange, Box<dyn Error>> {
    let clock = Clock::from(args.today.or(config.picker.today));
    let mut controller = RangeController::new(clock)
        .with_presets(config.picker.catalog())
        .with_observer(|change: &RangeChange| println!("{}", describe(change)));

    println!("Today: {}", to_iso_date(&controller.today()));

    if let Some(label) = &args.preset {
        controller.apply_preset(label)?;
    }

    if let (Some(from), Some(to)) = (args.from, args.to) {
        controller.apply_range(from, to)?;
    }

    for (side, date) in &args.select {
        if !controller.select_date(*date, *side) {
            println!("ignored {side} date {}", to_iso_date(date));
        }
    }

    if let Some(out) = &args.out {
        match store_csv(controller.current_weekends(), out) {
            Ok(_) => println!("stored weekends to {out}"),
            Err(e) => println!("error: could not store results: {e:?}"),
        };
    }

    Ok(controller.snapshot())
}

/// the two lines logged for every change
fn describe(change: &RangeChange) -> String {
    let [from, to] = change.iso_range();
    format!(
        "Selected Range: [{}, {}]\nWeekends in Range: [{}]",
        from.unwrap_or_else(|| "-".to_string()),
        to.unwrap_or_else(|| "-".to_string()),
        change.iso_weekends().join(", ")
    )
}

fn store_csv(weekends: &WeekendList, filename: &str) -> Result<(), Box<dyn Error>> {
    let file = File::create(filename)?;
    write_weekends(file, weekends)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_picker::DateRange;
    use tempfile::NamedTempFile;

    fn create_test_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_args_parsing() {
        // Test default values
        let args = Args::parse_from(["range_picker"]);
        assert_eq!(args.config, None);
        assert!(!args.cli);
        assert!(args.select.is_empty());

        // Test with custom values
        let args = Args::parse_from([
            "range_picker",
            "--config",
            "custom.toml",
            "--cli",
            "--preset",
            "Last 7 Days",
            "--today",
            "2024-03-13",
            "--out",
            "weekends.csv",
        ]);
        assert_eq!(args.config, Some("custom.toml".to_string()));
        assert!(args.cli);
        assert_eq!(args.preset, Some("Last 7 Days".to_string()));
        assert_eq!(args.today, Some(create_test_date(2024, 3, 13)));
        assert_eq!(args.out, Some("weekends.csv".to_string()));

        // Test with short options
        let args = Args::parse_from([
            "range_picker",
            "-c",
            "custom.toml",
            "-C",
            "-s",
            "from:2024-03-11",
            "-s",
            "to:2024-03-15",
        ]);
        assert_eq!(args.config, Some("custom.toml".to_string()));
        assert!(args.cli);
        assert_eq!(
            args.select,
            vec![
                (Side::From, create_test_date(2024, 3, 11)),
                (Side::To, create_test_date(2024, 3, 15)),
            ]
        );
    }

    #[test]
    fn test_args_range_needs_both_ends() {
        assert!(Args::try_parse_from(["range_picker", "--from", "2024-03-01"]).is_err());
        assert!(Args::try_parse_from(["range_picker", "--today", "13.03.2024"]).is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection("to:2024-03-15").unwrap(),
            (Side::To, create_test_date(2024, 3, 15))
        );
        assert!(matches!(
            parse_selection("2024-03-15"),
            Err(PickerError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("up:2024-03-15"),
            Err(PickerError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("from:yesterday"),
            Err(PickerError::InvalidIsoDate(_))
        ));
    }

    #[test]
    fn test_describe() {
        let change = RangeChange {
            range: DateRange::new(Some(create_test_date(2024, 3, 7)), None).unwrap(),
            weekends: WeekendList::default(),
        };
        assert_eq!(
            describe(&change),
            "Selected Range: [2024-03-07, -]\nWeekends in Range: []"
        );
    }

    #[test]
    fn test_run_cli_selections() {
        let args = Args::parse_from([
            "range_picker",
            "-C",
            "--today",
            "2024-03-01",
            "-s",
            "from:2024-03-11",
            "-s",
            "to:2024-03-15",
            "-s",
            "to:2024-03-18",
        ]);

        let change = run_cli(&args, &Config::default()).unwrap();

        assert_eq!(
            change.iso_range(),
            [Some("2024-03-11".to_string()), Some("2024-03-18".to_string())]
        );
        assert_eq!(change.iso_weekends(), vec!["2024-03-16", "2024-03-17"]);
    }

    #[test]
    fn test_run_cli_preset_then_range() {
        let args = Args::parse_from([
            "range_picker",
            "-C",
            "--today",
            "2024-03-13",
            "--preset",
            "Last 7 Days",
        ]);
        let change = run_cli(&args, &Config::default()).unwrap();
        assert_eq!(change.iso_weekends(), vec!["2024-03-09", "2024-03-10"]);

        let args = Args::parse_from([
            "range_picker",
            "-C",
            "--today",
            "2024-03-13",
            "--preset",
            "Last 7 Days",
            "--from",
            "2024-03-11",
            "--to",
            "2024-03-15",
        ]);
        let change = run_cli(&args, &Config::default()).unwrap();
        assert!(change.iso_weekends().is_empty());
    }

    #[test]
    fn test_run_cli_unknown_preset() {
        let args = Args::parse_from(["range_picker", "-C", "--preset", "Next Year"]);
        assert!(run_cli(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_run_cli_writes_csv() {
        let temp_file = NamedTempFile::new().unwrap();
        let file_path = temp_file.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "range_picker",
            "-C",
            "--today",
            "2024-03-13",
            "--preset",
            "Last 7 Days",
            "--out",
            &file_path,
        ]);
        run_cli(&args, &Config::default()).unwrap();

        let content = std::fs::read_to_string(file_path).unwrap();
        assert_eq!(content, "date,weekday\n2024-03-09,Sat\n2024-03-10,Sun\n");
    }

    #[test]
    fn test_store_csv_invalid_path() {
        let result = store_csv(
            &WeekendList::default(),
            "/invalid/path/that/should/not/exist/weekends.csv",
        );

        assert!(result.is_err());
    }
}
