use chrono::{Local, NaiveDateTime, Utc};
use clap::Parser;
use moodlog::application::{
    add_entry, delete_entry, edit_entry, export_journal, init::init, list_entries, show_entry,
    EntryChanges, InsightsService, NewEntry,
};
use moodlog::cli::output;
use moodlog::cli::{Cli, Commands};
use moodlog::domain::entry::parse_entry_date;
use moodlog::domain::{DateRange, EntryFilter, Granularity, Mood, TrendPeriod};
use moodlog::error::{MoodlogError, Result};
use moodlog::infrastructure::{Config, FileSystemRepository, JournalRepository, JsonFileStore};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "MOODLOG_LOG";

fn main() {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let now = reference_time(cli.now.as_deref())?;
    let json = cli.json;
    debug!(%now, "Reference time");

    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Add {
            date,
            title,
            content,
            mood,
        } => {
            let (_, mut store) = open_journal()?;
            let new_entry = NewEntry {
                date,
                title,
                content,
                mood,
            };
            let entry = add_entry(&mut store, new_entry, Utc::now())?;
            if json {
                print_json(&entry)
            } else {
                println!("Added entry {} for {}", entry.id, entry.date);
                Ok(())
            }
        }
        Commands::Show { id } => {
            let (_, store) = open_journal()?;
            let entry = show_entry(&store, &id)?;
            if json {
                print_json(entry)
            } else {
                print!("{}", output::format_entry_detail(entry));
                Ok(())
            }
        }
        Commands::Edit {
            id,
            date,
            title,
            content,
            mood,
        } => {
            let (_, mut store) = open_journal()?;
            let changes = EntryChanges {
                date,
                title,
                content,
                mood,
            };
            let entry = edit_entry(&mut store, &id, changes)?;
            if json {
                print_json(&entry)
            } else {
                println!("Updated entry {}", entry.id);
                Ok(())
            }
        }
        Commands::Delete { id } => {
            let (_, mut store) = open_journal()?;
            let removed = delete_entry(&mut store, &id)?;
            if json {
                print_json(&removed)
            } else {
                println!("Deleted entry {} ({})", removed.id, removed.title);
                Ok(())
            }
        }
        Commands::Export { path } => {
            let (_, store) = open_journal()?;
            let document = export_journal(&store, path.as_deref(), Utc::now())?;
            match path {
                Some(path) if !json => {
                    println!(
                        "Exported {} entries to {}",
                        document.entries.len(),
                        path.display()
                    );
                    Ok(())
                }
                _ => print_json(&document),
            }
        }
        Commands::List {
            range,
            mood,
            search,
        } => {
            let mut filter =
                EntryFilter::new().with_range(parse_arg::<DateRange>(&range)?);
            if let Some(mood) = mood {
                filter = filter.with_mood(parse_arg::<Mood>(&mood)?);
            }
            if let Some(search) = search {
                filter = filter.with_search(search);
            }

            let (_, store) = open_journal()?;
            let entries = list_entries(&store, &filter, now.date());
            if json {
                print_json(&entries)
            } else {
                print!("{}", output::format_entry_list(&entries));
                Ok(())
            }
        }
        Commands::Summary => {
            let service = open_insights()?;
            let summary = service.summary();
            if json {
                print_json(&summary)
            } else {
                print!(
                    "{}",
                    output::format_summary(&summary, service.has_sufficient_data())
                );
                Ok(())
            }
        }
        Commands::Distribution => {
            let distribution = open_insights()?.distribution();
            if json {
                print_json(&distribution)
            } else {
                print!("{}", output::format_distribution(&distribution));
                Ok(())
            }
        }
        Commands::Weekdays => {
            let weekdays = open_insights()?.weekdays();
            if json {
                print_json(&weekdays)
            } else {
                print!("{}", output::format_weekdays(&weekdays));
                Ok(())
            }
        }
        Commands::Trend { period } => {
            let period = period.as_deref().map(parse_arg::<TrendPeriod>).transpose()?;
            let (config, store) = open_journal()?;
            let period = period.unwrap_or(config.default_period);

            let points = insights(store, &config).trend_chart(period, now);
            if json {
                print_json(&points)
            } else {
                print!("{}", output::format_chart(&points));
                Ok(())
            }
        }
        Commands::Groups { by, all } => {
            let granularity = by.as_deref().map(parse_arg::<Granularity>).transpose()?;
            let (config, store) = open_journal()?;
            let granularity = granularity.unwrap_or(config.default_granularity);

            let service = insights(store, &config);
            let groups = if all {
                service.all_groups(granularity)
            } else {
                service.recent_groups(granularity, now)
            };
            if json {
                print_json(&groups)
            } else {
                print!("{}", output::format_groups(&groups));
                Ok(())
            }
        }
        Commands::Insights => {
            let (config, store) = open_journal()?;
            let report = insights(store, &config).report(config.default_granularity, now);
            if json {
                print_json(&report)
            } else {
                print!("{}", output::format_report(&report));
                Ok(())
            }
        }
    }
}

/// `--now` if given, otherwise the local wall clock
fn reference_time(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        Some(value) => parse_entry_date(value).ok_or_else(|| {
            MoodlogError::InvalidArgument(format!(
                "Invalid --now value: '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]",
                value
            ))
        }),
        None => Ok(Local::now().naive_local()),
    }
}

fn parse_arg<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    T::from_str(value).map_err(MoodlogError::InvalidArgument)
}

fn open_journal() -> Result<(Config, JsonFileStore)> {
    let repo = FileSystemRepository::discover()?;
    debug!(root = %repo.root().display(), "Using journal");
    let config = repo.load_config()?;
    let store = repo.open_store(&config)?;
    Ok((config, store))
}

fn open_insights() -> Result<InsightsService<JsonFileStore>> {
    let (config, store) = open_journal()?;
    Ok(insights(store, &config))
}

fn insights(store: JsonFileStore, config: &Config) -> InsightsService<JsonFileStore> {
    InsightsService::new(store).with_min_entries(config.min_entries_for_insights)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
