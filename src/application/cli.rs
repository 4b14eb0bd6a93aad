use crate::application::{Config, FilterSelect, logging};
use crate::domain::{FilterConfig, FilterOptions, Outcome, ResolvedRange};
use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filterdate")]
#[command(about = "Turn date-range presets into concrete from/to dates")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON options file (defaults to $FILTERDATE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a preset to a date range
    Resolve {
        /// Preset number as selected
        #[arg(allow_negative_numbers = true)]
        preset: String,

        /// Reference date (YYYY-MM-DD format, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Reference time of day (HH:MM:SS, defaults to now)
        #[arg(short, long)]
        time: Option<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List the offered presets
    Options {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Flags that override the options file.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Use the day-bucket presets
    #[arg(long)]
    pub range: bool,

    /// Days per bucket
    #[arg(long, allow_negative_numbers = true)]
    pub serie: Option<i64>,

    /// ISO, short, it, en, full-it, full-en or default
    #[arg(long)]
    pub format: Option<String>,

    /// Print dates instead of formatted strings
    #[arg(long)]
    pub raw: bool,

    /// Do not offer the no-filter preset
    #[arg(long)]
    pub no_empty_filter: bool,

    /// Offer the custom preset
    #[arg(long)]
    pub custom_filter: bool,
}

impl FilterArgs {
    fn to_options(&self) -> FilterOptions {
        FilterOptions {
            serie: self.serie,
            filter_type: self.range.then(|| "range".to_string()),
            format_date_string: self.format.clone(),
            custom_filter: self.custom_filter.then_some(true),
            convert_date_to_string: self.raw.then_some(false),
            empty_filter: self.no_empty_filter.then_some(false),
            ..Default::default()
        }
    }
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        logging::init(cli.verbose);

        let config = match &cli.config {
            Some(path) => Config::with_path(path),
            None => Config::from_env(),
        };
        let base = config.load_options()?;

        match cli.command {
            Commands::Resolve {
                preset,
                date,
                time,
                json,
                filter,
            } => {
                let select = build_select(base, &filter)?;
                let now = reference_now(date.as_deref(), time.as_deref())?;
                let outcome = select.on_change_at(&preset, now)?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                } else {
                    println!("{}", describe(&outcome));
                }
            }
            Commands::Options { filter } => {
                let select = build_select(base, &filter)?;
                for option in select.options() {
                    println!("{}\t{}", option.code, option.label);
                }
            }
        }

        Ok(())
    }
}

fn build_select(base: FilterOptions, filter: &FilterArgs) -> anyhow::Result<FilterSelect> {
    let options = base.overlay(filter.to_options());
    let config = FilterConfig::from_options(options).context("Invalid filter options")?;
    Ok(FilterSelect::with_default_plugins(config))
}

fn reference_now(
    date: Option<&str>,
    time: Option<&str>,
) -> anyhow::Result<chrono::NaiveDateTime> {
    let now = Local::now().naive_local();
    let date = match date {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date {date_str:?}"))?,
        None => now.date(),
    };
    let time = match time {
        Some(time_str) => NaiveTime::parse_from_str(time_str, "%H:%M:%S")
            .with_context(|| format!("Invalid time {time_str:?}"))?,
        None => now.time(),
    };
    Ok(date.and_time(time))
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NoFilter => "no filter".to_string(),
        Outcome::DeferToCustom(preset) => format!("custom {preset}"),
        Outcome::Range(ResolvedRange::Dates(range)) => {
            format!("{} {}", range.start(), range.end())
        }
        Outcome::Range(ResolvedRange::Formatted { from, to }) => format!("{from} {to}"),
    }
}
