//! Habitforge - Entry Point
//!
//! Command-line front end: loads the profile, applies one command through
//! the progression store, and saves the profile after every mutation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use habitforge::data::{export_default_data, DataManager, DEFAULT_DATA_DIR};
use habitforge::progression::activity::weekday_label;
use habitforge::progression::{
    exercise_rewards, water_rewards, weight_log_rewards, ActivityKind, FixedClock,
    ProgressionStore, StreakChange, SystemClock, WaterMilestone, WeightOutcome, MAX_LIVES,
};
use habitforge::save::{default_profile_path, delete_profile, load_profile, save_profile};

#[derive(Parser, Debug)]
#[command(name = "habitforge", version, about = "Track habit streaks, lives and league rank")]
struct Cli {
    /// Profile file (defaults to the platform data directory)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Directory holding leagues.ron
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show score, streaks, lives and rank
    Status,
    /// Log an activity, award its points and update the streak
    Log {
        /// weight, water or exercise
        kind: ActivityKind,
        /// Date of the activity (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Exercise duration in minutes
        #[arg(long, default_value_t = 0)]
        minutes: u32,
        /// Water milestone: first, half, goal or set
        #[arg(long, default_value = "first")]
        milestone: WaterMilestone,
        /// Weight outcome: logged, onboarding, sub or main
        #[arg(long, default_value = "logged")]
        goal: WeightOutcome,
    },
    /// Award raw points
    Award {
        points: f64,
    },
    /// List leagues and levels
    Leagues,
    /// Write the built-in league table to the data directory
    ExportData,
    /// Delete the profile
    Reset,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let profile_path = cli.profile.clone().unwrap_or_else(default_profile_path);

    match cli.command {
        Command::Leagues => {
            print_leagues(&DataManager::load_or_default(&cli.data_dir));
            return Ok(());
        }
        Command::ExportData => {
            let path = export_default_data(&cli.data_dir)?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
        Command::Reset => {
            delete_profile(&profile_path)?;
            println!("Profile reset");
            return Ok(());
        }
        _ => {}
    }

    let data = DataManager::load_or_default(&cli.data_dir);
    let state = load_profile(&profile_path)
        .with_context(|| format!("failed to load profile {}", profile_path.display()))?;

    let store = ProgressionStore::with_state(state, data.rank_catalog());
    let store = match cli.today {
        Some(today) => store.with_clock(FixedClock(today)),
        None => store.with_clock(SystemClock),
    };
    let save_path = profile_path.clone();
    let mut store = store.on_change(move |state| {
        if let Err(e) = save_profile(&save_path, state) {
            log::error!("Failed to save profile: {}", e);
        }
    });

    match cli.command {
        Command::Status => print_status(&store),
        Command::Log {
            kind,
            date,
            minutes,
            milestone,
            goal,
        } => {
            let date = date.unwrap_or_else(|| store.today());
            let awards = match kind {
                ActivityKind::Weight => weight_log_rewards(goal),
                ActivityKind::Water => water_rewards(milestone),
                ActivityKind::Exercise => exercise_rewards(minutes),
            };
            let applied = store.apply_rewards(&awards);
            println!("+{} points", applied);

            match store.record_activity(date, kind) {
                StreakChange::Extended { streak } => println!("Streak: {} day(s)", streak),
                StreakChange::LifeLost { lives } => println!("Missed a day! Lives left: {}", lives),
                StreakChange::StreakLost { previous } => {
                    println!("Out of lives, your {} day streak is gone", previous)
                }
                StreakChange::Exempt | StreakChange::AlreadyCounted | StreakChange::Unchanged => {}
            }
        }
        Command::Award { points } => {
            anyhow::ensure!(points > 0.0, "points must be positive");
            println!("+{} points", store.award_points(points));
        }
        Command::Leagues | Command::ExportData | Command::Reset => unreachable!(),
    }

    Ok(())
}

fn print_status(store: &ProgressionStore) {
    let snapshot = store.snapshot();
    println!("Score:      {:.0} XP (x{} multiplier)", snapshot.total_score, snapshot.multiplier);
    println!(
        "Streak:     {} day(s), best {}",
        snapshot.current_streak, snapshot.best_streak
    );
    println!("Lives:      {}/{}", snapshot.lives, MAX_LIVES);
    if let Some(last) = snapshot.last_activity_date {
        println!("Last entry: {}", last);
    }

    let week: Vec<String> = snapshot
        .week_activity
        .iter()
        .enumerate()
        .map(|(i, &active)| format!("{}{}", weekday_label(i), if active { "*" } else { "-" }))
        .collect();
    println!("Week:       {}", week.join(" "));

    println!(
        "Rank:       {} / {} ({:.0}% to next level)",
        snapshot.league_name, snapshot.level_title, snapshot.rank_progress
    );
}

fn print_leagues(data: &DataManager) {
    for league in data.catalog.leagues() {
        println!("{} {} ({} - {} XP)", league.icon, league.name, league.min_score, league.max_score);
        for level in &league.levels {
            println!("    {}. {} from {} XP", level.number, level.title, level.min_score);
        }
    }
}
