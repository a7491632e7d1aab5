//! Nexhale CLI
//!
//! Command-line front end for Nexhale:
//! - Classify monthly exposure against the risk tiers
//! - Browse brands, flavors and moods
//! - Log smoking and vaping sessions
//! - Check health, quit plan and leaderboard

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use nexhale::client::{MonthSelector, UpdateProfileRequest};
use nexhale::config::{generate_default_config, Config, LoggingConfig};
use nexhale::health::{ExposureReading, HealthReport, ProductLine, TierTable};
use nexhale::tracking::{
    brand_display_names, check_age, effective_limit, find_brand, mood_distribution,
    moods_by_category, validate_limit, DailyZone, LeaderboardKind, LoginForm, QuitPlanProgress,
    RegistrationForm, SmokingEntry, VapeEntry, WeekProgress, BRANDS, DEFAULT_PG_PERCENTAGE,
    DEFAULT_VAPE_FLAVOR, VAPE_FLAVORS,
};
use nexhale::NexhaleClient;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "nexhale")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track smoking and vaping, and see what a month of it means")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file (default: platform config dir, then ./nexhale.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a monthly reading offline
    Classify {
        /// Monthly TAR (smoking) or CEI (vape)
        chemical: f64,
        /// Monthly nicotine in mg
        nicotine: f64,
        #[arg(short, long, default_value = "smoking")]
        product: ProductLine,
    },

    /// Print the risk tier table
    Tiers {
        #[arg(short, long, default_value = "smoking")]
        product: ProductLine,
    },

    /// List cigarette brands and vape flavors
    Brands,

    /// List moods for a product
    Moods {
        #[arg(short, long, default_value = "smoking")]
        product: ProductLine,
    },

    /// Show the daily zone for a stick count
    Zone { sticks: u32 },

    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEXHALE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and store the session token
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEXHALE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        age: u32,
        /// Preferred brand display name (see `nexhale brands`)
        #[arg(long)]
        brand: String,
    },

    /// Log a smoking or vaping session
    Log {
        #[command(subcommand)]
        entry: LogCommand,
    },

    /// Classify this month's intake from the backend
    Health {
        #[arg(short, long, default_value = "smoking")]
        product: ProductLine,
        /// Month (1-12); requires --year
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long, requires = "month")]
        year: Option<i32>,
    },

    /// Intake series and mood breakdown
    Stats {
        #[arg(short, long, value_enum, default_value_t = Period::Daily)]
        period: Period,
    },

    /// Today's lowest-intake ranking
    Leaderboard {
        #[arg(short, long, default_value = "tar")]
        kind: LeaderboardKind,
    },

    /// Show the quit plan, or set a new monthly nicotine limit
    QuitPlan {
        /// New monthly nicotine limit in mg (50-2000)
        #[arg(long)]
        set: Option<f64>,
    },

    /// Show or update the profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileCommand>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// Log cigarettes
    Smoking {
        /// Brand display name (see `nexhale brands`)
        #[arg(long)]
        brand: String,
        #[arg(long)]
        sticks: u32,
        /// Price per stick
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        #[arg(long)]
        mood: Option<String>,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a vaping session
    Vape {
        #[arg(long)]
        puffs: u32,
        /// Liquid used, in ml
        #[arg(long)]
        liquid: f64,
        #[arg(long, default_value = DEFAULT_VAPE_FLAVOR)]
        flavor: String,
        /// Propylene glycol percentage
        #[arg(long, default_value_t = DEFAULT_PG_PERCENTAGE)]
        pg: u8,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Change username or preferences
    Update {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        flavor: Option<String>,
        #[arg(long)]
        liquid: Option<String>,
    },

    /// Change the account email
    ChangeEmail {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEXHALE_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) if path.exists() => Config::load_with_env(path)?,
        Some(_) => Config::from_env(),
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    let format = cli.format;
    match cli.command {
        Commands::Classify {
            chemical,
            nicotine,
            product,
        } => {
            let report = HealthReport::assess(product, ExposureReading::new(chemical, nicotine));
            output(format, &report, |r| println!("{}", r))?;
        }

        Commands::Tiers { product } => {
            output(format, product.table(), |t| print_tiers(product, t))?;
        }

        Commands::Brands => {
            #[derive(Serialize)]
            struct Catalog {
                brands: Vec<String>,
                vape_flavors: &'static [&'static str],
            }

            let catalog = Catalog {
                brands: brand_display_names(),
                vape_flavors: &VAPE_FLAVORS,
            };
            output(format, &catalog, |_| {
                println!("{:<45} {:<12} {:<12} {}", "Brand", "Nicotine", "TAR", "Company");
                println!("{}", "-".repeat(90));
                for brand in BRANDS.iter() {
                    println!(
                        "{:<45} {:<12} {:<12} {}",
                        brand.display_name(),
                        format!("{} mg", brand.nicotine_mg),
                        format!("{} mg", brand.tar_mg),
                        brand.company
                    );
                }
                println!();
                println!("Vape flavors: {}", VAPE_FLAVORS.join(", "));
            })?;
        }

        Commands::Moods { product } => {
            let groups = moods_by_category(product);
            output(format, &groups, |groups| {
                for (category, moods) in groups {
                    println!("{}:", category);
                    for mood in moods {
                        println!("  {:<22} {}", mood.value, mood.option_label());
                    }
                }
            })?;
        }

        Commands::Zone { sticks } => {
            let zone = DailyZone::from_sticks(sticks);
            output(format, &zone, |z| {
                println!("{} cigarettes: {}", sticks, z.label());
                println!("{}", z.description());
            })?;
        }

        Commands::Login { email, password } => {
            LoginForm {
                email: email.clone(),
                password: password.clone(),
            }
            .validate()?;
            if let Some(age) = config.session.age {
                check_age(age)?;
            }

            let client = connect(&config, false)?;
            let auth = client.login(&email, &password).await.context("Login failed")?;
            let name = auth
                .user
                .get("user_name")
                .or_else(|| auth.user.get("username"))
                .and_then(|v| v.as_str());
            let path = session_path(&cli.config)?;
            Config::save_session(&path, &auth.token, name)?;
            println!("Logged in. Session saved to {:?}", path);
        }

        Commands::Register {
            name,
            email,
            password,
            age,
            brand,
        } => {
            RegistrationForm {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                age: Some(age),
                preferred_brand: Some(brand),
            }
            .validate()?;

            let client = connect(&config, false)?;
            let auth = client
                .register(&name, &email, &password)
                .await
                .context("Registration failed")?;
            let path = session_path(&cli.config)?;
            let mut saved = Config::save_session(&path, &auth.token, Some(&name))?;
            saved.session.age = Some(age);
            saved.save(&path)?;
            println!("Welcome, {}. Session saved to {:?}", name, path);
        }

        Commands::Log { entry } => {
            let client = connect(&config, true)?;
            match entry {
                LogCommand::Smoking {
                    brand,
                    sticks,
                    price,
                    mood,
                    date,
                } => {
                    if find_brand(&brand).is_none() {
                        bail!("Unknown brand {:?}. Run `nexhale brands` for the list", brand);
                    }
                    let mut entry = SmokingEntry::new(brand, sticks).price(price);
                    if let Some(mood) = mood {
                        entry = entry.mood(mood);
                    }
                    let date = date.unwrap_or_else(today);
                    let brands = client.brands().await.context("Failed to fetch brands")?;
                    let request = entry.into_request(date, &brands)?;
                    client
                        .log_smoking(&request)
                        .await
                        .context("Failed to log cigarettes")?;

                    println!(
                        "Logged {} cigarette(s) on {} (cost {:.2})",
                        request.cigarette_count, request.date, request.cost
                    );
                }
                LogCommand::Vape {
                    puffs,
                    liquid,
                    flavor,
                    pg,
                    mood,
                    date,
                } => {
                    let mut entry = VapeEntry::new(puffs, liquid).flavor(flavor).pg(pg);
                    if let Some(mood) = mood {
                        entry = entry.mood(mood);
                    }
                    let request = entry.into_request(date.unwrap_or_else(today))?;
                    client
                        .log_vape(&request)
                        .await
                        .context("Failed to log vape session")?;

                    println!(
                        "Logged {} puffs on {} ({:.1} mg nicotine)",
                        request.puffs, request.date, request.nicotine_amount
                    );
                }
            }
        }

        Commands::Health {
            product,
            month,
            year,
        } => {
            let client = connect(&config, true)?;
            let selector = match (month, year) {
                (Some(month), Some(year)) => {
                    if !(1..=12).contains(&month) {
                        bail!("Month must be between 1 and 12");
                    }
                    Some(MonthSelector { month, year })
                }
                _ => None,
            };
            let summary = client.summary(selector).await.context("Failed to load summary")?;
            let reading = match product {
                ProductLine::Smoking => summary.smoking_reading(),
                ProductLine::Vape => summary.vape_reading(),
            };

            #[derive(Serialize)]
            struct HealthView {
                report: HealthReport,
                daily_zone: Option<DailyZone>,
            }

            let view = HealthView {
                report: HealthReport::assess(product, reading),
                daily_zone: (product == ProductLine::Smoking)
                    .then(|| DailyZone::from_sticks(summary.cigarettes_today())),
            };
            output(format, &view, |v| {
                println!("{}", v.report);
                if let Some(zone) = v.daily_zone {
                    println!();
                    println!(
                        "Today: {} cigarettes, {}",
                        summary.cigarettes_today(),
                        zone.label()
                    );
                }
            })?;
        }

        Commands::Stats { period } => {
            let client = connect(&config, true)?;
            let points = match period {
                Period::Daily => client.daily_stats().await,
                Period::Weekly => client.weekly_stats(None).await,
                Period::Monthly => client.monthly_stats().await,
            }
            .context("Failed to load intake series")?;
            let moods = mood_distribution(&client.mood_stats().await.context("Failed to load moods")?);

            #[derive(Serialize)]
            struct StatsView<'a> {
                intake: &'a [nexhale::client::IntakePoint],
                moods: &'a [nexhale::tracking::MoodShare],
            }

            let view = StatsView {
                intake: &points,
                moods: &moods,
            };
            output(format, &view, |v| {
                if v.intake.is_empty() {
                    println!("No intake logged for this period");
                } else {
                    println!("{:<12} {:>10} {:>10} {:>10}", "Period", "Nicotine", "TAR", "CEI");
                    println!("{}", "-".repeat(45));
                    for p in v.intake {
                        println!(
                            "{:<12} {:>10.1} {:>10.1} {:>10.1}",
                            p.name, p.nicotine, p.tar, p.chemical
                        );
                    }
                }
                if !v.moods.is_empty() {
                    println!();
                    println!("Mood triggers:");
                    for share in v.moods {
                        println!("  {}: {}%", share.mood, share.percent);
                    }
                }
            })?;
        }

        Commands::Leaderboard { kind } => {
            let client = connect(&config, true)?;
            let entries = client
                .leaderboard(kind)
                .await
                .context("Failed to load leaderboard")?;
            let me = config.session.current_user();

            output(format, &entries, |entries| {
                println!("{}", kind.title());
                println!("{}", "-".repeat(40));
                if entries.is_empty() {
                    println!("Nobody has logged today yet");
                }
                for entry in entries {
                    let badge = entry
                        .medal()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let marker = match &me {
                        Some(user) if entry.is_current_user(user) => " (you)",
                        _ => "",
                    };
                    println!(
                        "{:<5} {:<20} {:>8.1} {}{}",
                        badge, entry.name, entry.value, entry.unit, marker
                    );
                }
            })?;
        }

        Commands::QuitPlan { set } => {
            let client = connect(&config, true)?;
            if let Some(limit) = set {
                validate_limit(limit)?;
                client
                    .set_quit_plan(limit)
                    .await
                    .context("Failed to save quit plan")?;
                println!("Monthly nicotine limit set to {} mg", limit);
            }

            let plan = client.quit_plan().await.context("Failed to load quit plan")?;
            let limit = plan.nicotine_limit();

            #[derive(Serialize)]
            struct PlanView {
                progress: QuitPlanProgress,
                weeks: Vec<WeekProgress>,
            }

            let view = PlanView {
                progress: QuitPlanProgress::new(limit, plan.total_consumed, today()),
                weeks: plan
                    .weekly_progress
                    .iter()
                    .map(|w| WeekProgress::new(w.week_num, w.week_total, limit))
                    .collect(),
            };
            output(format, &view, |v| {
                let p = &v.progress;
                println!(
                    "Nicotine this month: {:.1} / {:.0} mg ({}%)",
                    p.consumed,
                    effective_limit(limit),
                    p.percent_used
                );
                if p.limit_reached {
                    println!("Monthly limit reached");
                } else {
                    println!(
                        "{:.1} mg left, {} day(s) remaining",
                        p.remaining(),
                        p.days_remaining
                    );
                }
                for week in &v.weeks {
                    println!(
                        "Week {} {} {:.1}/{:.1} mg",
                        week.week_num,
                        week.bar(),
                        week.used,
                        week.limit
                    );
                }
            })?;
        }

        Commands::Profile { action } => {
            let client = connect(&config, true)?;
            match action {
                None => {
                    let profile = client.profile().await.context("Failed to load profile")?;
                    output(format, &profile, |p| {
                        println!("Name:           {}", p.user_name);
                        println!("Email:          {}", p.email);
                        println!("Brand:          {}", p.preferred_brand.as_deref().unwrap_or("-"));
                        println!(
                            "Vape flavor:    {}",
                            p.preferred_vape_flavor.as_deref().unwrap_or("-")
                        );
                        println!(
                            "Vape liquid:    {}",
                            p.preferred_vape_liquid_amount.as_deref().unwrap_or("-")
                        );
                    })?;
                }
                Some(ProfileCommand::Update {
                    username,
                    brand,
                    flavor,
                    liquid,
                }) => {
                    let current = client.profile().await.context("Failed to load profile")?;
                    let mut update = UpdateProfileRequest::from(&current);
                    if let Some(username) = username {
                        update.username = username;
                    }
                    if let Some(brand) = brand {
                        if find_brand(&brand).is_none() {
                            bail!("Unknown brand {:?}. Run `nexhale brands` for the list", brand);
                        }
                        update.preferred_brand = Some(brand);
                    }
                    if flavor.is_some() {
                        update.preferred_vape_flavor = flavor;
                    }
                    if liquid.is_some() {
                        update.preferred_vape_liquid_amount = liquid;
                    }
                    client
                        .update_profile(&update)
                        .await
                        .context("Failed to update profile")?;
                    println!("Profile updated");
                }
                Some(ProfileCommand::ChangeEmail { email, password }) => {
                    LoginForm {
                        email: email.clone(),
                        password: password.clone(),
                    }
                    .validate()?;
                    client
                        .change_email(&email, &password)
                        .await
                        .context("Failed to change email")?;
                    println!("Email changed to {}", email);
                }
            }
        }

        Commands::Config { output: path } => {
            let content = generate_default_config();

            match path {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so `--format json` output stays clean
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nexhale={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn connect(config: &Config, require_session: bool) -> Result<NexhaleClient> {
    if require_session && config.session.token.is_none() {
        bail!("Not logged in. Run `nexhale login` first");
    }
    Ok(NexhaleClient::new(config.client_config())?)
}

fn session_path(explicit: &Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.clone()),
        None => Config::default_path().context("No config directory on this platform; pass --config"),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn output<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => table(value),
    }
    Ok(())
}

fn print_tiers(product: ProductLine, table: &TierTable) {
    let month = today();
    println!(
        "{} risk tiers (monthly totals, {} {})",
        product,
        month.format("%B"),
        month.year()
    );
    println!(
        "{:<18} {:<16} {:<14}",
        "Tier",
        format!("{} (mg)", product.chemical_label()),
        "Nicotine (mg)"
    );
    println!("{}", "-".repeat(50));
    for def in table.iter() {
        println!(
            "{:<18} {:<16} {:<14}",
            def.label,
            def.chemical_range.to_string(),
            def.nicotine_range.to_string()
        );
    }
}
