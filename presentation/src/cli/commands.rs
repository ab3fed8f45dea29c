//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for survey results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Verdict plus every feedback item
    Full,
    /// Verdict and survey id only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for survey_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for survey-assess
#[derive(Parser, Debug)]
#[command(name = "survey-assess")]
#[command(author, version, about = "Wellbeing survey with sentiment verdicts and generated feedback")]
#[command(long_about = r#"
survey-assess collects answers to a fixed set of wellbeing questions and
returns an assessment:

1. Verdict: the free-text response is classified as positive, negative or
   neutral and mapped to a fixed narrative
2. Feedback: every answered question is sent to a completion service in one
   batch, producing one feedback item per answer
3. Record: answers, verdict and feedback are saved and can be viewed later

Configuration files are loaded from (in priority order):
1. SURVEY_* environment variables (e.g. SURVEY_GENERATION__MODEL)
2. --config <path>     Explicit config file
3. ./survey.toml       Project-level config
4. ~/.config/survey-assess/config.toml   Global config

Example:
  survey-assess submit
  survey-assess submit --response "I feel great today" --answer "7 hours" --answer "3"
  survey-assess show 3f2b8c1e-0d4a-4b8e-9a61-2f4c5d6e7f80 --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to daily rolling files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the survey and get an assessment
    Submit(SubmitArgs),

    /// Show a saved survey and its assessment
    Show {
        /// Survey identifier printed by `submit`
        id: String,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// List saved surveys
    List {
        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Print the survey questions
    Questions,
}

/// Answers given on the command line; anything missing is asked for on stdin
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Free-text description of how you are feeling
    #[arg(short, long, value_name = "TEXT")]
    pub response: Option<String>,

    /// Answer to the next question, in order (can be specified multiple times)
    #[arg(short, long, value_name = "TEXT")]
    pub answer: Vec<String>,

    /// JSON file of answers: {"response": "...", "question1": "...", ...}
    #[arg(long, value_name = "PATH")]
    pub answers_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}
