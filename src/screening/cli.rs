//! Command-line interface for the screener.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use super::config::Config;
use super::evaluate::render_report;
use crate::api::Screener;
use crate::category::Category;
use crate::error::{IncompleteInputError, ScreenError};
use crate::locale::Locale;
use crate::questionnaire::{find_question, Answer, QUESTIONS};

#[derive(Debug, Parser)]
#[command(
    name = "moodscan",
    version,
    about = "Depression level screening from a 14-question questionnaire",
    long_about = "moodscan trains a distance-weighted k-nearest-neighbors classifier on a\n\
        dataset of prior questionnaire responses and uses it to screen new answers.\n\n\
        EXAMPLES:\n\
        \n  moodscan train                               Train and report held-out accuracy\n\
        \n  moodscan assess --answers answers.json       Screen answers from a JSON file\n\
        \n  moodscan assess --answer appetite=Often ...  Screen answers given inline\n\
        \n  moodscan levels --locale id                  Show level details in Indonesian",
    after_help = "This tool is not a diagnosis. If you need help, please consult a mental health professional."
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Language for answers and result text (en, id); overrides the config file
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train the classifier and print held-out accuracy
    Train {
        /// Print the training report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Screen one set of questionnaire answers
    Assess(AssessArgs),
    /// Print the depression level details table
    Levels,
    /// Print question ids, prompts and accepted answers
    Questions,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// JSON file mapping question id to answer
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// A single answer; repeat for every question. Overrides --answers.
    #[arg(long = "answer", value_name = "ID=CHOICE", value_parser = parse_answer_pair)]
    pub answer: Vec<(String, String)>,

    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_answer_pair(s: &str) -> Result<(String, String), String> {
    let (id, choice) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=CHOICE, got '{s}'"))?;
    let id = id.trim();
    if find_question(id).is_none() {
        return Err(format!("unknown question id '{id}'"));
    }
    Ok((id.to_string(), choice.trim().to_string()))
}

/// Run a parsed command line. Returns a failing exit code for submissions
/// that need to be completed.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(locale) = cli.locale {
        config.display.locale = locale;
    }
    let locale = config.display.locale;

    match cli.command {
        Command::Train { json } => {
            let screener = Screener::from_config(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(screener.report())?);
            } else {
                println!("\n{}", render_report(screener.report()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Assess(args) => assess(&config, args),
        Command::Levels => {
            print_levels(locale);
            Ok(ExitCode::SUCCESS)
        }
        Command::Questions => {
            print_questions(locale);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn assess(config: &Config, args: AssessArgs) -> Result<ExitCode> {
    let mut responses: HashMap<String, String> = match &args.answers {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("{} is not a JSON object of answers", path.display()))?
        }
        None => HashMap::new(),
    };
    responses.extend(args.answer);

    let screener = Screener::from_config(config)?;
    match screener.assess(&responses) {
        Ok(assessment) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("\n{}", assessment);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(ScreenError::Incomplete(err)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&err)?);
            } else {
                print_incomplete(&err, screener.locale());
            }
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}

fn print_incomplete(err: &IncompleteInputError, locale: Locale) {
    eprintln!("{}\n", locale.incomplete_notice());
    for id in err.questions_to_reprompt() {
        if let Some((_, question)) = find_question(id) {
            eprintln!("  - {} ({})", locale.question_prompt(question), id);
        }
    }
    for (id, answer) in &err.unrecognized {
        eprintln!("  '{}' is not a valid answer for {}", answer, id);
    }
    eprintln!("\nAccepted answers: {}", accepted_answers(locale));
}

fn accepted_answers(locale: Locale) -> String {
    Answer::ALL
        .iter()
        .map(|a| locale.answer_label(*a))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_levels(locale: Locale) {
    println!("+-----------------+----------------------------------------------------------------+");
    for category in Category::ALL {
        println!("| {:<15} | {:<62} |", category.display_name(locale), category.detail(locale));
        println!("| {:<15} | -> {:<59} |", "", category.recommendation(locale));
        println!("+-----------------+----------------------------------------------------------------+");
    }
}

fn print_questions(locale: Locale) {
    for (i, question) in QUESTIONS.iter().enumerate() {
        println!("{:>2}. {:<24} {}", i + 1, question.id, locale.question_prompt(question));
    }
    println!("\nAccepted answers: {}", accepted_answers(locale));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_pair() {
        assert_eq!(
            parse_answer_pair("appetite = Often").unwrap(),
            ("appetite".to_string(), "Often".to_string())
        );
        assert!(parse_answer_pair("appetite").is_err());
        assert!(parse_answer_pair("mood=Often").is_err());
    }

    #[test]
    fn test_cli_parses_assess_flags() {
        let cli = Cli::try_parse_from([
            "moodscan",
            "--locale",
            "id",
            "assess",
            "--answer",
            "appetite=Sering",
            "--answer",
            "aggression=Jarang",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.locale, Some(Locale::Indonesian));
        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.answer.len(), 2);
                assert!(args.json);
                assert!(args.answers.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    fn dataset() -> tempfile::NamedTempFile {
        use crate::questionnaire::QUESTION_COUNT;
        use crate::screening::data::{ID_COLUMN, LABEL_COLUMN};
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut header = vec![ID_COLUMN.to_string()];
        header.extend(QUESTIONS.iter().map(|q| q.column.to_string()));
        header.push(LABEL_COLUMN.to_string());
        writeln!(file, "{}", header.join(",")).unwrap();
        for i in 0..12 {
            let (value, label) = if i % 2 == 0 { ("1", "No depression") } else { ("5", "Severe") };
            let cells = vec![value; QUESTION_COUNT].join(",");
            writeln!(file, "{},{},{}", i + 1, cells, label).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn config_for(file: &tempfile::NamedTempFile) -> Config {
        let mut config = Config::default();
        config.data.csv_path = file.path().to_string_lossy().into_owned();
        config
    }

    #[test]
    fn test_empty_submission_exits_like_any_incomplete_form() {
        let data = dataset();
        let args = AssessArgs {
            answers: None,
            answer: Vec::new(),
            json: true,
        };
        assert_eq!(assess(&config_for(&data), args).unwrap(), ExitCode::from(2));
    }

    #[test]
    fn test_complete_inline_answers_succeed() {
        let data = dataset();
        let args = AssessArgs {
            answers: None,
            answer: QUESTIONS
                .iter()
                .map(|q| (q.id.to_string(), "Always".to_string()))
                .collect(),
            json: true,
        };
        assert_eq!(assess(&config_for(&data), args).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
