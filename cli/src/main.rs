//! CLI entrypoint for survey-assess
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use survey_application::{
    AssessSurveyUseCase, CompletionGateway, GenerateFeedbackUseCase, NoProgress,
    SubmitSurveyUseCase, SurveyStore, ViewSurveyUseCase,
};
use survey_domain::{AnswerSet, LexiconAnalyzer, OutputFormat, QuestionSet};
use survey_infrastructure::config::FileLoggingConfig;
use survey_infrastructure::{
    ConfigError, ConfigLoader, InMemorySurveyStore, JsonFileSurveyStore,
    OpenAiCompletionGateway, RuntimeConfig, StoreLocation,
};
use survey_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter, SubmitArgs, SurveyForm,
    apply_overrides, load_answers_file,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name prefix of the daily rolling log
const LOG_FILE_NAME: &str = "survey-assess.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(ConfigError::from)?;

    // Guard must live until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, &file_config.logging, cli.log_dir.as_ref())?;
    ConsoleFormatter::set_color_enabled(file_config.output.color);

    info!("Starting survey-assess");

    let runtime = RuntimeConfig::resolve(&file_config)?;
    for issue in &runtime.warnings {
        warn!("{}", issue.message);
    }
    let default_format = file_config.output.format.unwrap_or_default();
    let questions = Arc::new(runtime.questions.clone());

    // === Dependency Injection ===
    let store: Arc<dyn SurveyStore> = match &runtime.store {
        StoreLocation::JsonDir(dir) => Arc::new(
            JsonFileSurveyStore::open(dir)
                .await
                .with_context(|| format!("Cannot open survey store at {}", dir.display()))?,
        ),
        StoreLocation::Memory => Arc::new(InMemorySurveyStore::new()),
    };

    match command {
        Command::Submit(args) => {
            let gateway: Arc<dyn CompletionGateway> = Arc::new(OpenAiCompletionGateway::new(
                &runtime.base_url,
                runtime.api_key.clone(),
                runtime.request_timeout,
            )?);
            let assess = AssessSurveyUseCase::new(
                Arc::new(LexiconAnalyzer),
                GenerateFeedbackUseCase::new(gateway, runtime.feedback.clone()),
                questions.clone(),
            );
            let use_case = SubmitSurveyUseCase::new(assess, store).with_rules(runtime.rules);
            let format = args.output.map(Into::into).unwrap_or(default_format);
            let formatter = ConsoleFormatter::new(format);

            let answers = collect_answers(&args, &questions, &runtime)?;

            // Keep stdout clean for JSON consumers
            let result = if cli.quiet || format == OutputFormat::Json {
                use_case.execute_with_progress(answers, &NoProgress).await
            } else {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(answers, &progress).await
            };

            match result {
                Ok(output) => {
                    println!("{}", formatter.format_submission(&output));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(fail(&e.user_message())),
            }
        }

        Command::Show { id, output } => {
            let formatter = ConsoleFormatter::new(output.map(Into::into).unwrap_or(default_format));
            match ViewSurveyUseCase::new(store).get(&id).await {
                Ok(record) => {
                    println!("{}", formatter.format_record(&record));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(fail(e.user_message())),
            }
        }

        Command::List { output } => {
            let formatter = ConsoleFormatter::new(output.map(Into::into).unwrap_or(default_format));
            match ViewSurveyUseCase::new(store).list().await {
                Ok(records) => {
                    print!("{}", formatter.format_list(&records));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(fail(e.user_message())),
            }
        }

        Command::Questions => {
            print!("{}", ConsoleFormatter::new(default_format).format_questions(&questions));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level and the log destination
fn init_logging(
    verbose: u8,
    config: &FileLoggingConfig,
    log_dir: Option<&PathBuf>,
) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => config.level.as_deref().unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let directory = log_dir
        .cloned()
        .or_else(|| config.directory.clone())
        .filter(|d| !d.as_os_str().is_empty());

    match directory {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Gather a submission from the answers file, flags and, for anything still
/// missing, stdin
fn collect_answers(
    args: &SubmitArgs,
    questions: &QuestionSet,
    runtime: &RuntimeConfig,
) -> Result<AnswerSet> {
    let mut answers = match &args.answers_file {
        Some(path) => load_answers_file(path)?,
        None => AnswerSet::default(),
    };
    apply_overrides(&mut answers, args.response.as_deref(), &args.answer);

    if args.answer.len() > questions.len() {
        bail!(
            "Got {} answers but the survey has {} questions",
            args.answer.len(),
            questions.len()
        );
    }

    let form = SurveyForm::new(questions, runtime.rules);
    if form.needs_input(&answers) {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("{}", "Please answer the following questions.".cyan());
        }
        let mut input = stdin.lock();
        let mut prompts = io::stderr();
        if !form.fill(&mut answers, &mut input, &mut prompts)? {
            info!("Input ended before every field was answered");
        }
    }

    Ok(answers)
}

/// Print a user-facing failure and pick the exit code
fn fail(message: &str) -> ExitCode {
    eprintln!("{} {}", "Error:".red().bold(), message);
    ExitCode::FAILURE
}
