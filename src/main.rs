use chrono::Local;
use clap::Parser;
use moodjour::application::{init::init, ConfigService, EntryStore, SettingsService};
use moodjour::cli::{
    format_entry, format_entry_list, format_mood_list, format_stats, Cli, Commands, EntryFields,
};
use moodjour::domain::mood::{category_of, MoodCategory};
use moodjour::domain::{DateReference, JournalEntry, Theme};
use moodjour::error::{MoodjourError, Result};
use moodjour::infrastructure::FileSystemRepository;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn open_store() -> Result<EntryStore<FileSystemRepository>> {
    let repo = FileSystemRepository::discover()?;
    Ok(EntryStore::open(repo))
}

fn warn_unknown_mood(mood: &str) {
    if category_of(mood) == MoodCategory::Unknown {
        eprintln!(
            "Note: '{}' is not a known mood and will not count towards mood statistics",
            mood
        );
    }
}

/// Apply the flags that were given onto `entry`
fn apply_fields(entry: &mut JournalEntry, fields: EntryFields) -> Result<()> {
    if fields.secondary.len() > 2 {
        return Err(MoodjourError::InvalidInput(
            "At most two secondary moods (--also) are allowed".to_string(),
        ));
    }

    if let Some(title) = fields.title {
        entry.title = title;
    }
    if let Some(mood) = fields.mood {
        warn_unknown_mood(&mood);
        entry.primary_mood = mood;
    }
    if !fields.secondary.is_empty() {
        let mut secondary = fields.secondary.into_iter();
        entry.secondary_mood1 = secondary.next();
        entry.secondary_mood2 = secondary.next();
    }
    if let Some(category) = fields.category {
        entry.category = Some(category).filter(|c| !c.trim().is_empty());
    }
    entry.tags.extend(fields.tags);

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodjour journal at {}", path.display());
            Ok(())
        }
        Commands::Add {
            fields,
            date,
            content,
        } => {
            if fields.mood.is_none() {
                return Err(MoodjourError::InvalidInput(
                    "A primary mood is required (--mood). See 'moodjour moods'".to_string(),
                ));
            }

            let date = DateReference::parse(&date)?.resolve(today);
            let mut store = open_store()?;

            let mut entry = JournalEntry::new(date, "", content, "");
            apply_fields(&mut entry, fields)?;
            if !store.add(&mut entry) {
                return Err(MoodjourError::InvalidInput(
                    "No entry ids left in this journal".to_string(),
                ));
            }

            println!(
                "Added entry #{} for {} ({} words)",
                entry.id,
                entry.entry_date.format("%d-%m-%Y"),
                entry.word_count
            );
            Ok(())
        }
        Commands::Edit {
            id,
            fields,
            content,
            clear_tags,
            clear_also,
        } => {
            let mut store = open_store()?;
            let mut entry = store.by_id(id).ok_or(MoodjourError::EntryNotFound(id))?;

            if clear_tags {
                entry.tags.clear();
            }
            if clear_also {
                entry.secondary_mood1 = None;
                entry.secondary_mood2 = None;
            }
            if let Some(content) = content {
                entry.content = content;
            }
            apply_fields(&mut entry, fields)?;
            store.update(&entry);

            println!("Updated entry #{}", id);
            Ok(())
        }
        Commands::Delete { id } => {
            let mut store = open_store()?;
            if !store.delete(id) {
                return Err(MoodjourError::EntryNotFound(id));
            }
            println!("Deleted entry #{}", id);
            Ok(())
        }
        Commands::Show { id } => {
            let store = open_store()?;
            let entry = store.by_id(id).ok_or(MoodjourError::EntryNotFound(id))?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::On { date } => {
            let date = DateReference::parse(&date)?.resolve(today);
            let store = open_store()?;
            match store.by_date(date) {
                Some(entry) => print!("{}", format_entry(&entry)),
                None => println!("No entry on {}", date.format("%d-%m-%Y")),
            }
            Ok(())
        }
        Commands::List { limit } => {
            let store = open_store()?;
            let mut entries = store.all();
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Search { text } => {
            let store = open_store()?;
            let entries = store.search(&text);
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Stats { tags } => {
            let store = open_store()?;
            let limit = tags.unwrap_or(store.repository().config.top_tags);
            print!("{}", format_stats(&store.stats(limit)));
            Ok(())
        }
        Commands::Moods => {
            print!("{}", format_mood_list());
            Ok(())
        }
        Commands::Theme { value } => {
            let repo = FileSystemRepository::discover()?;
            let settings = SettingsService::new(&repo);

            match value {
                Some(value) => {
                    let theme = Theme::from_str(&value).map_err(MoodjourError::InvalidInput)?;
                    if settings.set_theme(theme) {
                        println!("Theme set to {}", theme);
                    } else {
                        println!("Theme could not be saved");
                    }
                }
                None => println!("{}", settings.theme()),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let mut service = ConfigService::new(repo);

            if list {
                let config = service.list();
                println!("entries_file = {}", config.entries_file);
                println!("settings_file = {}", config.settings_file);
                println!("top_tags = {}", config.top_tags);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: entries_file, settings_file, top_tags, created");
                Ok(())
            }
        }
    }
}
