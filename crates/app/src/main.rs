use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ReportService, ResponseService, StudySettings, TaskTimerService};
use storage::StorageConfig;
use tracing_subscriber::EnvFilter;
use ui::app::STUDY_TITLE;
use ui::{App, UiApp, build_app_context};
use usability_core::model::{NamePolicy, SessionId, TaskCatalog};

const DATA_DIR_ENV: &str = "USABILITY_DATA_DIR";
const KEEP_NAMES_ENV: &str = "USABILITY_KEEP_NAMES";
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data-dir value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data-dir <path>] [--keep-names]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data-dir {DEFAULT_DATA_DIR}");
    eprintln!("  participant names are replaced with \"Anonymous\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DATA_DIR_ENV}, {KEEP_NAMES_ENV} (1/true), RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    data_dir: PathBuf,
    name_policy: NamePolicy,
}

impl Args {
    /// Flags win over environment values.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut data_dir = env(DATA_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let mut name_policy = if env(KEEP_NAMES_ENV).is_some_and(|value| is_truthy(&value)) {
            NamePolicy::Keep
        } else {
            NamePolicy::Anonymize
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let value = require_value(&mut args, "--data-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataDir { raw: value });
                    }
                    data_dir = PathBuf::from(value);
                }
                "--keep-names" => name_policy = NamePolicy::Keep,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            data_dir,
            name_policy,
        }))
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

struct DesktopApp {
    session_id: SessionId,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn session_id(&self) -> SessionId {
        self.session_id
    }

    fn task_catalog(&self) -> TaskCatalog {
        self.services.task_catalog().clone()
    }

    fn responses(&self) -> Arc<ResponseService> {
        self.services.responses()
    }

    fn timers(&self) -> Arc<TaskTimerService> {
        self.services.timers()
    }

    fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing();

    let config = StorageConfig::new(args.data_dir);
    let settings = StudySettings::default().with_name_policy(args.name_policy);
    let services = AppServices::new_csv(config.clone(), Clock::default_clock(), settings)?;
    tracing::info!(
        data_dir = %config.data_dir().display(),
        name_policy = ?args.name_policy,
        "starting usability study"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session_id: SessionId::new(),
        services,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(STUDY_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
