//! CLI interface for the career matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-matcher")]
#[command(about = "RIASEC personality assessment and career matching tool")]
#[command(long_about = "Score RIASEC questionnaire responses and rank careers by weighted similarity to a student profile")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score questionnaire responses and describe the personality profile
    Assess {
        /// Path to responses file (JSON, TOML)
        #[arg(short, long)]
        responses: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include work, communication and learning preferences
        #[arg(short, long)]
        detailed: bool,
    },

    /// Rank careers against a student profile
    Match {
        /// Path to student profile file (JSON, TOML)
        #[arg(short, long)]
        profile: PathBuf,

        /// Questionnaire responses used for the personality dimensions
        #[arg(short, long)]
        responses: Option<PathBuf>,

        /// Career catalog file; the built-in catalog is used otherwise
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of careers to show
        #[arg(short, long)]
        top: Option<usize>,

        /// Boost the categories the profile fills in
        #[arg(long)]
        dynamic: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show skill gaps, suggestions and weights
        #[arg(short, long)]
        detailed: bool,
    },

    /// Browse the career catalog
    Careers {
        #[command(subcommand)]
        action: CareerAction,
    },

    /// Print the assessment questions
    Questions,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CareerAction {
    /// List every career in the catalog
    List {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show one career
    Show {
        /// Career id
        id: String,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("a.json"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("a.TOML"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("a.txt"), &["json"]).is_err());
        assert!(validate_file_extension(Path::new("noext"), &["json"]).is_err());
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "career-matcher",
            "match",
            "--profile",
            "p.json",
            "--top",
            "5",
            "--dynamic",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Match { top, dynamic, profile, .. } => {
                assert_eq!(top, Some(5));
                assert!(dynamic);
                assert_eq!(profile, PathBuf::from("p.json"));
            }
            _ => panic!("expected match command"),
        }
    }
}
