use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use log::info;
use services::{Clock, QuizService};
use storage::CsvQuestionSource;
use ui::{App, UiApp, UiConfig, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(value))
}

struct DesktopApp {
    quiz: Arc<QuizService>,
    config: UiConfig,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn ui_config(&self) -> UiConfig {
        self.config.clone()
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    data_path: PathBuf,
    assets_dir: PathBuf,
    image_root: PathBuf,
    skip_start: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <csv>] [--assets <dir>] [--images <dir>] [--skip-start]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data data.csv");
    eprintln!("  --assets assets");
    eprintln!("  --images .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATA_PATH, QUIZ_ASSETS_DIR, QUIZ_IMAGE_ROOT, RUST_LOG");
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let env_path = |key: &str, default: &str| {
            env(key)
                .filter(|value| !value.trim().is_empty())
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };
        let mut parsed = Self {
            data_path: env_path("QUIZ_DATA_PATH", "data.csv"),
            assets_dir: env_path("QUIZ_ASSETS_DIR", "assets"),
            image_root: env_path("QUIZ_IMAGE_ROOT", "."),
            skip_start: false,
            help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => parsed.data_path = require_path(&mut args, "--data")?,
                "--assets" => parsed.assets_dir = require_path(&mut args, "--assets")?,
                "--images" => parsed.image_root = require_path(&mut args, "--images")?,
                "--skip-start" => parsed.skip_start = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn ui_config(&self) -> UiConfig {
        UiConfig {
            assets_dir: self.assets_dir.clone(),
            image_root: self.image_root.clone(),
            skip_start: self.skip_start,
            ..UiConfig::default()
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    // The bank is loaded once, before any window opens; a bad file never shows a UI.
    let source = CsvQuestionSource::new(&parsed.data_path);
    let quiz = QuizService::from_source(&source, Clock::default_clock())?;
    info!(
        "quiz ready: {} questions from {}",
        quiz.total_questions(),
        parsed.data_path.display()
    );

    let config = parsed.ui_config();
    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ))
        .with_resizable(false)
        .with_always_on_top(false);
    let desktop_cfg = DesktopConfig::new().with_window(window);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: Arc::new(quiz),
        config,
    });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let parsed = Args::parse(args(&[]), no_env).unwrap();
        assert_eq!(parsed.data_path, PathBuf::from("data.csv"));
        assert_eq!(parsed.assets_dir, PathBuf::from("assets"));
        assert_eq!(parsed.image_root, PathBuf::from("."));
        assert!(!parsed.skip_start);
        assert!(!parsed.help);
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "QUIZ_DATA_PATH" => Some("env.csv".to_string()),
            "QUIZ_IMAGE_ROOT" => Some("/srv/images".to_string()),
            _ => None,
        };
        let parsed = Args::parse(args(&["--data", "flag.csv", "--skip-start"]), env).unwrap();
        assert_eq!(parsed.data_path, PathBuf::from("flag.csv"));
        assert_eq!(parsed.image_root, PathBuf::from("/srv/images"));
        assert!(parsed.skip_start);

        let config = parsed.ui_config();
        assert!(config.skip_start);
        assert_eq!(config.image_root, PathBuf::from("/srv/images"));
        assert_eq!(config.window_title, "Chumash Vocabulary Quiz");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            Args::parse(args(&["--data"]), no_env),
            Err(ArgsError::MissingValue { flag: "--data" })
        );
        assert_eq!(
            Args::parse(args(&["--assets", " "]), no_env),
            Err(ArgsError::EmptyPath { flag: "--assets" })
        );
        assert_eq!(
            Args::parse(args(&["--fullscreen"]), no_env),
            Err(ArgsError::UnknownArg("--fullscreen".to_string()))
        );
    }
}
