//! Career matcher: RIASEC assessment and career matching tool

use anyhow::Context;
use career_matcher::assessment::questions::QUESTIONS;
use career_matcher::cli::{self, CareerAction, Cli, Commands, ConfigAction};
use career_matcher::config::{Config, OutputFormat};
use career_matcher::input::InputManager;
use career_matcher::output::{save_report_to_file, MatchReport, ReportGenerator, ReportMetadata};
use career_matcher::processing::{CareerCatalog, CareerMatcher};
use career_matcher::CareerMatcherError;
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const INPUT_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Could not read configuration from {}", path.display())),
        None => Ok(Config::load()?),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Assess { responses, output, detailed } => {
            check_extension(&responses, "Responses file")?;
            let format = resolve_format(output.as_deref(), &config)?;
            let start_time = Instant::now();

            let mut input_manager = InputManager::new();
            let answers = input_manager.load_responses(&responses).await?;

            let matcher = CareerMatcher::with_builtin_catalog(&config)?;
            let profile = matcher.analyze_personality(&answers);
            info!("Primary dimension: {}", profile.primary_dimension);

            let mut metadata = ReportMetadata::new("built-in", matcher.catalog().len());
            metadata.responses_file = Some(responses.display().to_string());
            metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;

            let report = MatchReport {
                visualization: matcher.visualization(Some(&profile.scores), &[]),
                personality: Some(profile),
                matches: Vec::new(),
                weights: config.scoring.weights.normalized(),
                metadata,
            };

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            println!("{}", generator.generate_report(&report, &format)?);
        }

        Commands::Match {
            profile,
            responses,
            catalog,
            top,
            dynamic,
            output,
            save,
            detailed,
        } => {
            info!("Starting career matching");
            check_extension(&profile, "Profile file")?;
            let format = resolve_format(output.as_deref(), &config)?;
            let start_time = Instant::now();

            let mut config = config;
            if dynamic {
                config.scoring.dynamic_weighting = true;
            }
            if let Some(top) = top {
                config.ranking.top_n = top;
            }

            let mut input_manager = InputManager::new();
            let (catalog, catalog_source) = load_catalog(&mut input_manager, catalog.as_deref(), &config).await?;
            let matcher = CareerMatcher::new(&config, catalog)?;

            let mut student = input_manager.load_profile(&profile).await?;
            let mut personality = None;
            if let Some(responses) = &responses {
                check_extension(responses, "Responses file")?;
                let answers = input_manager.load_responses(responses).await?;
                let assessed = matcher.analyze_personality(&answers);
                student = student.with_personality(&assessed.scores);
                personality = Some(assessed);
            }

            let matches = matcher.top_matches(&student, matcher.default_top_n());
            if let Some(best) = matches.first() {
                info!("Best match: {} ({})", best.title, best.explanation);
            }

            let mut metadata = ReportMetadata::new(catalog_source, matcher.catalog().len());
            metadata.profile_file = Some(profile.display().to_string());
            metadata.responses_file = responses.as_ref().map(|p| p.display().to_string());
            metadata.dynamic_weighting = config.scoring.dynamic_weighting;
            metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;

            let report = MatchReport {
                visualization: matcher.visualization(personality.as_ref().map(|p| &p.scores), &matches),
                weights: matcher.effective_weights(&student),
                personality,
                matches,
                metadata,
            };

            let use_colors = config.output.color_output && save.is_none();
            let generator =
                ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true, true);
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Careers { action } => match action {
            CareerAction::List { catalog } => {
                let mut input_manager = InputManager::new();
                let (catalog, source) = load_catalog(&mut input_manager, catalog.as_deref(), &config).await?;

                println!("Career catalog: {} ({} careers)\n", source, catalog.len());
                for record in catalog.records() {
                    println!(
                        "  {:<26} {:<28} {}",
                        record.id,
                        record.title,
                        record.personality_fit.join("")
                    );
                }
            }
            CareerAction::Show { id, catalog } => {
                let mut input_manager = InputManager::new();
                let (catalog, _) = load_catalog(&mut input_manager, catalog.as_deref(), &config).await?;
                let record = catalog
                    .get(&id)
                    .ok_or_else(|| CareerMatcherError::CareerNotFound(id.clone()))?;

                println!("{} ({})", record.title, record.id);
                if let Some(description) = &record.description {
                    println!("{}\n", description);
                }
                println!("Personality fit:  {}", record.personality_fit.join(", "));
                println!("Education:        {}", record.required_education.join(", "));
                println!("Skills:           {}", record.required_skills.join(", "));
                println!("Industries:       {}", record.industries.join(", "));
                println!("Locations:        {}", record.locations.join(", "));
                println!("Salary band:      {}", record.salary_band);
                println!("Market demand:    {}", record.demand);
                println!("Growth prospect:  {}", record.growth);
                if let Some(environment) = &record.work_environment {
                    println!("Work environment: {}", environment);
                }
            }
        },

        Commands::Questions => {
            println!("RIASEC assessment ({} questions)\n", QUESTIONS.len());
            for question in QUESTIONS.iter() {
                println!("  {:<3} [{:?}] {}", question.id, question.question_type, question.text);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let weights = &config.scoring.weights;
                println!("Current Configuration\n");
                println!("Scoring Weights:");
                println!("  Education:   {:.1}%", weights.education * 100.0);
                println!("  Skills:      {:.1}%", weights.skills * 100.0);
                println!("  Personality: {:.1}%", weights.personality * 100.0);
                println!("  Industry:    {:.1}%", weights.industry * 100.0);
                println!("  Salary:      {:.1}%", weights.salary * 100.0);
                println!("  Demand:      {:.1}%", weights.demand * 100.0);
                println!("  Location:    {:.1}%", weights.location * 100.0);
                println!("  Growth:      {:.1}%", weights.growth * 100.0);
                println!(
                    "\nDynamic weighting: {} (skills x{}, personality x{}, education x{})",
                    config.scoring.dynamic_weighting,
                    config.scoring.skill_boost,
                    config.scoring.personality_boost,
                    config.scoring.education_boost
                );
                println!("Top matches: {}", config.ranking.top_n);
                println!("Skill gaps per career: {}", config.ranking.skill_gap_limit);
                match &config.catalog.path {
                    Some(path) => println!("Catalog: {}", path.display()),
                    None => println!("Catalog: built-in"),
                }
                println!("Output format: {:?}", config.output.format);
            }
            Some(ConfigAction::Reset) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                Config::default().save_to(&path)?;
                println!("Configuration reset: {}", path.display());
            }
            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn check_extension(path: &Path, label: &str) -> Result<(), CareerMatcherError> {
    cli::validate_file_extension(path, INPUT_EXTENSIONS)
        .map_err(|e| CareerMatcherError::InvalidInput(format!("{}: {}", label, e)))
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat, CareerMatcherError> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(CareerMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Catalog from the command line, then from configuration, then the built-in one.
async fn load_catalog(
    input_manager: &mut InputManager,
    requested: Option<&Path>,
    config: &Config,
) -> Result<(CareerCatalog, String), CareerMatcherError> {
    match requested.or(config.catalog.path.as_deref()) {
        Some(path) => {
            check_extension(path, "Catalog file")?;
            let catalog = input_manager.load_catalog(path).await?;
            Ok((catalog, path.display().to_string()))
        }
        None => Ok((CareerCatalog::builtin()?, "built-in".to_string())),
    }
}
