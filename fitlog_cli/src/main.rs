use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use fitlog_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Personal workout and nutrition tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and manage workouts
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },

    /// Log and manage meals
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },

    /// Show today's exercise count and calorie/macro totals
    Today,

    /// Show a month calendar with workout-day badges
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },

    /// Export a backup of all data
    Export {
        /// Output file (defaults to fitlog-backup-<today>.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Restore from a backup file, replacing all current data
    Import {
        /// Backup file to import
        file: PathBuf,
    },

    /// Show summary statistics
    Stats,

    /// Delete ALL workout and nutrition data
    Clear {
        /// Skip the confirmation prompts
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum WorkoutCommands {
    /// Log an exercise to today's workout
    Log {
        /// Exercise name (see the built-in catalog for category badges)
        name: String,

        #[arg(long)]
        sets: u32,

        #[arg(long)]
        reps: u32,

        /// Weight used (0 = unspecified)
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// Weight unit (lbs or kg), defaults to the configured unit
        #[arg(long)]
        unit: Option<WeightUnit>,
    },

    /// List all workout days, newest first
    History,

    /// Delete a whole workout day by id
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MealCommands {
    /// Log a food item to today's meals
    Log {
        /// Food name
        name: String,

        #[arg(long)]
        calories: u32,

        /// Protein in grams
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Carbs in grams
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fats in grams
        #[arg(long, default_value_t = 0.0)]
        fats: f64,
    },

    /// List all meal days with totals, newest first
    History,

    /// Delete a whole meal day by id
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    // Initialize logging
    fitlog_core::logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine data directory
    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }

    let backend = JsonFileBackend::new(config.store_path());
    let mut store = DataStore::open(backend);

    match cli.command {
        Commands::Workout { command } => match command {
            WorkoutCommands::Log {
                name,
                sets,
                reps,
                weight,
                unit,
            } => cmd_workout_log(&mut store, &config, name, sets, reps, weight, unit),
            WorkoutCommands::History => cmd_workout_history(&store),
            WorkoutCommands::Delete { id, yes } => cmd_workout_delete(&mut store, id, yes),
        },
        Commands::Meal { command } => match command {
            MealCommands::Log {
                name,
                calories,
                protein,
                carbs,
                fats,
            } => cmd_meal_log(&mut store, name, calories, protein, carbs, fats),
            MealCommands::History => cmd_meal_history(&store),
            MealCommands::Delete { id, yes } => cmd_meal_delete(&mut store, id, yes),
        },
        Commands::Today => cmd_today(&store),
        Commands::Calendar { month } => cmd_calendar(&store, month),
        Commands::Export { out } => cmd_export(&store, out),
        Commands::Import { file } => cmd_import(&mut store, file),
        Commands::Stats => cmd_stats(&store),
        Commands::Clear { yes } => cmd_clear(&mut store, yes),
    }
}

fn cmd_workout_log(
    store: &mut DataStore<JsonFileBackend>,
    config: &Config,
    name: String,
    sets: u32,
    reps: u32,
    weight: f64,
    unit: Option<WeightUnit>,
) -> Result<()> {
    let unit = unit.unwrap_or(config.units.default_weight_unit);
    let entry = ExerciseEntry::new(name.clone(), sets, reps, weight, unit);

    store.append_workout(&today_date_key(), &today_date_display(), vec![entry])?;

    if weight > 0.0 {
        println!("✓ Logged {} {}x{} @ {} {}", name, sets, reps, weight, unit);
    } else {
        println!("✓ Logged {} {}x{}", name, sets, reps);
    }
    Ok(())
}

fn cmd_workout_history(store: &DataStore<JsonFileBackend>) -> Result<()> {
    if store.workouts().is_empty() {
        println!("No workouts logged yet");
        return Ok(());
    }

    let catalog = get_default_catalog();
    for day in store.workouts() {
        let badge = catalog.categories_of(&day.exercises);
        if badge.is_empty() {
            println!("{}  [{}]", day.date_display, day.id);
        } else {
            println!("{}  ({})  [{}]", day.date_display, badge, day.id);
        }
        for ex in &day.exercises {
            if ex.weight > 0.0 {
                println!("  {}  {}x{} @ {}{}", ex.name, ex.sets, ex.reps, ex.weight, ex.unit);
            } else {
                println!("  {}  {}x{}", ex.name, ex.sets, ex.reps);
            }
        }
        println!();
    }
    Ok(())
}

fn cmd_workout_delete(store: &mut DataStore<JsonFileBackend>, id: Uuid, yes: bool) -> Result<()> {
    if !yes && !confirm("Delete this workout?")? {
        println!("Cancelled");
        return Ok(());
    }

    if store.delete_workout(id)? {
        println!("✓ Workout deleted");
    } else {
        println!("No workout with id {}", id);
    }
    Ok(())
}

fn cmd_meal_log(
    store: &mut DataStore<JsonFileBackend>,
    name: String,
    calories: u32,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> Result<()> {
    let item = MealItem::new(name.clone(), calories, protein, carbs, fats);
    store.append_meal(&today_date_key(), &today_date_display(), vec![item])?;

    println!("✓ Logged {} ({} kcal)", name, calories);
    Ok(())
}

fn cmd_meal_history(store: &DataStore<JsonFileBackend>) -> Result<()> {
    if store.meals().is_empty() {
        println!("No meals logged yet");
        return Ok(());
    }

    for day in store.meals() {
        let totals = day_macro_totals(day);
        println!("{}  [{}]", day.date_display, day.id);
        println!(
            "  {} kcal · P:{}g · C:{}g · F:{}g",
            totals.calories, totals.protein, totals.carbs, totals.fats
        );
        for item in &day.items {
            println!("  {}  {} kcal", item.name, item.calories);
        }
        println!();
    }
    Ok(())
}

fn cmd_meal_delete(store: &mut DataStore<JsonFileBackend>, id: Uuid, yes: bool) -> Result<()> {
    if !yes && !confirm("Delete this meal log?")? {
        println!("Cancelled");
        return Ok(());
    }

    if store.delete_meal(id)? {
        println!("✓ Meal log deleted");
    } else {
        println!("No meal log with id {}", id);
    }
    Ok(())
}

fn cmd_today(store: &DataStore<JsonFileBackend>) -> Result<()> {
    let today = today_date_key();
    let exercises = store
        .store()
        .workout_for_date(&today)
        .map(|w| w.exercises.len())
        .unwrap_or(0);
    let totals = daily_totals(store.store().meal_for_date(&today));

    println!("{}", today_date_display());
    println!();
    println!("  Exercises: {}", exercises);
    println!("  Calories:  {} kcal", totals.calories);
    println!("  Protein:   {}g", totals.protein);
    println!("  Carbs:     {}g", totals.carbs);
    println!("  Fats:      {}g", totals.fats);
    Ok(())
}

fn cmd_calendar(store: &DataStore<JsonFileBackend>, month: Option<String>) -> Result<()> {
    let first = match month {
        Some(m) => NaiveDate::parse_from_str(&format!("{}-01", m), "%Y-%m-%d")
            .map_err(|_| Error::Other(format!("invalid month '{}', expected YYYY-MM", m)))?,
        None => {
            let now = Local::now().date_naive();
            NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
                .ok_or_else(|| Error::Other("invalid current date".into()))?
        }
    };

    let days_in_month = match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
    }
    .ok_or_else(|| Error::Other("invalid month arithmetic".into()))?
    .signed_duration_since(first)
    .num_days() as u32;

    println!("{}", first.format("%B %Y"));
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    let catalog = get_default_catalog();
    let today = today_date_key();
    let mut badged: Vec<(u32, String)> = Vec::new();

    // Leading blanks up to the first weekday (Sunday-first grid)
    let mut column = first.weekday().num_days_from_sunday();
    print!("{}", "    ".repeat(column as usize));

    for day in 1..=days_in_month {
        let date_key = format!("{}-{:02}-{:02}", first.year(), first.month(), day);
        let workout = store.store().workout_for_date(&date_key);

        let mark = if workout.is_some() {
            '*'
        } else if date_key == today {
            '.'
        } else {
            ' '
        };
        print!("{:>3}{}", day, mark);

        if let Some(w) = workout {
            let badge = catalog.categories_of(&w.exercises);
            if !badge.is_empty() {
                badged.push((day, badge));
            }
        }

        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }
    }
    if column != 0 {
        println!();
    }

    if !badged.is_empty() {
        println!();
        for (day, badge) in &badged {
            println!("  {:>2}: {}", day, badge);
        }
    }

    println!();
    println!("Legend: * workout day, . today");
    for category in Category::ALL {
        println!("  {:<2} {}", category.abbrev(), category.name());
    }
    Ok(())
}

fn cmd_export(store: &DataStore<JsonFileBackend>, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| PathBuf::from(backup_file_name(Local::now().date_naive())));

    let contents = export_to_string(store.store(), chrono::Utc::now())?;
    std::fs::write(&path, contents)?;

    println!("✓ Backup exported to {}", path.display());
    Ok(())
}

fn cmd_import(store: &mut DataStore<JsonFileBackend>, file: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .map_err(|e| Error::BackupUnreadable(format!("{}: {}", file.display(), e)))?;

    // Parse and validate before touching the store
    let (workouts, meals) = parse_backup(&text)?;
    store.replace_all(workouts, meals)?;

    println!("✓ Backup restored");
    Ok(())
}

fn cmd_stats(store: &DataStore<JsonFileBackend>) -> Result<()> {
    let summary = store_summary(store.store());

    println!("Your Progress");
    println!("  Workouts:  {}", summary.workout_days);
    println!("  Exercises: {}", summary.total_exercises);
    println!("  Meal days: {}", summary.meal_days);
    Ok(())
}

fn cmd_clear(store: &mut DataStore<JsonFileBackend>, yes: bool) -> Result<()> {
    // Two explicit confirmations before wiping everything
    if !yes {
        if !confirm("ARE YOU SURE? This will delete ALL your workout and nutrition data.")? {
            println!("Cancelled");
            return Ok(());
        }
        if !confirm("ARE YOU REALLY SURE? This action CANNOT be undone.")? {
            println!("Cancelled");
            return Ok(());
        }
    }

    store.replace_all(vec![], vec![])?;
    println!("✓ All data cleared");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
