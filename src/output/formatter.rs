//! Output formatters for match reports

use crate::assessment::PersonalityProfile;
use crate::config::{CategoryWeights, OutputFormat};
use crate::error::Result;
use crate::output::report::MatchReport;
use crate::processing::ranking::{CareerMatch, ConfidenceTier};
use colored::{Color, Colorize};
use std::path::Path;

const BAR_WIDTH: usize = 20;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_bar(score: f64, max: f64) -> String {
    let filled = ((score / max).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn format_timestamp(report: &MatchReport) -> String {
    chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn weight_rows(weights: &CategoryWeights) -> [(&'static str, f64); 8] {
    [
        ("Education", weights.education),
        ("Skills", weights.skills),
        ("Personality", weights.personality),
        ("Industry", weights.industry),
        ("Salary", weights.salary),
        ("Demand", weights.demand),
        ("Location", weights.location),
        ("Growth", weights.growth),
    ]
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_tier_badge(&self, tier: ConfidenceTier) -> String {
        let color = match tier {
            ConfidenceTier::High => Color::Green,
            ConfidenceTier::Good => Color::BrightGreen,
            ConfidenceTier::Fair => Color::Yellow,
            ConfidenceTier::Low => Color::Red,
        };
        let badge = tier.to_string().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_personality(&self, profile: &PersonalityProfile) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("Personality Profile", 2));
        output.push_str(&format!(
            "Holland code: {} | Primary: {} | Secondary: {}\n\n",
            self.colorize(&profile.holland_code, Color::Cyan),
            profile.primary_dimension,
            profile.secondary_dimension
        ));

        for (dimension, score) in profile.scores.iter() {
            output.push_str(&format!(
                "  {:<14} {} {:.2}\n",
                dimension.name(),
                score_bar(score, 5.0),
                score
            ));
        }
        output.push_str(&format!("\n{}\n", profile.description));

        if !profile.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for strength in &profile.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !profile.career_clusters.is_empty() {
            output.push_str(&self.format_header("Career Clusters", 3));
            output.push_str(&format!("  {}\n", profile.career_clusters.join(", ")));
        }

        if self.detailed {
            output.push_str(&self.format_header("Work Preferences", 3));
            for preference in &profile.work_preferences {
                output.push_str(&format!("  • {}\n", preference));
            }
            output.push_str(&self.format_header("Communication Style", 3));
            for style in &profile.communication_style {
                output.push_str(&format!("  • {}\n", style));
            }
            output.push_str(&self.format_header("Learning Preferences", 3));
            for preference in &profile.learning_preferences {
                output.push_str(&format!("  • {}\n", preference));
            }
        }

        output
    }

    fn format_match(&self, rank: usize, career: &CareerMatch) -> String {
        let mut output = format!(
            "{:>2}. {} {} {:.1}%\n    {}\n",
            rank,
            self.colorize(&career.title, Color::Cyan),
            self.format_tier_badge(career.tier),
            career.percentage,
            career.explanation
        );

        if self.detailed {
            if !career.matched_skills.is_empty() {
                output.push_str(&format!(
                    "    {} {}\n",
                    self.colorize("Matched skills:", Color::Green),
                    career.matched_skills.join(", ")
                ));
            }
            if !career.skill_gaps.is_empty() {
                output.push_str(&format!(
                    "    {} {}\n",
                    self.colorize("Skill gaps:", Color::Yellow),
                    career.skill_gaps.join(", ")
                ));
            }
            for suggestion in &career.improvement_suggestions {
                output.push_str(&format!("      - {}\n", suggestion));
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        let title = if report.is_assessment_only() {
            "RIASEC PERSONALITY ASSESSMENT"
        } else {
            "CAREER MATCH REPORT"
        };
        output.push_str(&self.format_header(title, 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        if let Some(profile) = &report.personality {
            output.push_str(&self.format_personality(profile));
        }

        if !report.matches.is_empty() {
            output.push_str(&self.format_header("Top Career Matches", 2));
            for (i, career) in report.matches.iter().enumerate() {
                output.push_str(&self.format_match(i + 1, career));
            }

            if self.detailed {
                output.push_str(&self.format_header("Category Weights", 3));
                for (name, weight) in weight_rows(&report.weights) {
                    output.push_str(&format!("  {:<12} {:.1}%\n", name, weight * 100.0));
                }
                output.push_str(&format!(
                    "\nCatalog: {} ({} careers) | Dynamic weighting: {}\n",
                    report.metadata.catalog_source,
                    report.metadata.catalog_size,
                    if report.metadata.dynamic_weighting { "on" } else { "off" }
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn format_personality(profile: &PersonalityProfile) -> String {
        let mut output = String::from("## Personality Profile\n\n");
        output.push_str(&format!(
            "**Holland Code:** {} | **Primary:** {} | **Secondary:** {}\n\n",
            profile.holland_code, profile.primary_dimension, profile.secondary_dimension
        ));

        output.push_str("| Dimension | Score |\n");
        output.push_str("|-----------|-------|\n");
        for (dimension, score) in profile.scores.iter() {
            output.push_str(&format!("| {} | {:.2} |\n", dimension.name(), score));
        }
        output.push_str(&format!("\n{}\n\n", profile.description));

        if !profile.strengths.is_empty() {
            output.push_str("### Strengths\n\n");
            for strength in &profile.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !profile.career_clusters.is_empty() {
            output.push_str("### Career Clusters\n\n");
            for cluster in &profile.career_clusters {
                output.push_str(&format!("- {}\n", cluster));
            }
            output.push('\n');
        }

        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::from("# Career Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Catalog:** {} ({} careers)\n\n",
                report.metadata.catalog_source, report.metadata.catalog_size
            ));
        }

        if let Some(profile) = &report.personality {
            output.push_str(&Self::format_personality(profile));
        }

        if !report.matches.is_empty() {
            output.push_str("## Career Matches\n\n");
            output.push_str("| Rank | Career | Match | Tier | Skill Gaps |\n");
            output.push_str("|------|--------|-------|------|------------|\n");
            for (i, career) in report.matches.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | {} | {:.1}% | {} | {} |\n",
                    i + 1,
                    career.title,
                    career.percentage,
                    career.tier.label(),
                    if career.skill_gaps.is_empty() {
                        "-".to_string()
                    } else {
                        career.skill_gaps.join(", ")
                    }
                ));
            }
            output.push('\n');

            output.push_str("## Improvement Suggestions\n\n");
            for career in &report.matches {
                if career.improvement_suggestions.is_empty() {
                    continue;
                }
                output.push_str(&format!("### {}\n\n", career.title));
                for suggestion in &career.improvement_suggestions {
                    output.push_str(&format!("- {}\n", suggestion));
                }
                output.push('\n');
            }

            output.push_str("## Category Weights\n\n");
            output.push_str("| Category | Weight |\n");
            output.push_str("|----------|--------|\n");
            for (name, weight) in weight_rows(&report.weights) {
                output.push_str(&format!("| {} | {:.1}% |\n", name, weight * 100.0));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, profile_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(profile_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_careers{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_careers{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_careers{}.md", base_name, timestamp_suffix),
    }
}
