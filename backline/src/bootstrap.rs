use backline_application::{LedgerSource, SettlementService, SettlementServiceError};
use backline_domain::TourId;
use backline_infrastructure::{SnapshotError, SnapshotStore};
use backline_presentation::{
    CellValue, CurrencyFormat, ExportSheet, SettlementPresenter, format_service_error,
};
use std::{env, path::PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const SNAPSHOT_VAR: &str = "BACKLINE_SNAPSHOT";
const CURRENCY_VAR: &str = "BACKLINE_CURRENCY_SYMBOL";
const SHEET_FLAG: &str = "--sheet";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: backline [--sheet] <snapshot.toml> [tour-id]")]
    Usage,
    #[error("'{0}' is not a tour id")]
    InvalidTourId(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("{}", format_service_error(.0))]
    Settlement(#[from] SettlementServiceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Sheet,
}

/// Application configuration resolved from argv and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub snapshot: PathBuf,
    pub tour: Option<TourId>,
    pub currency_symbol: String,
    pub output: OutputMode,
}

impl AppConfig {
    pub fn from_args_and_env() -> Result<Self, CliError> {
        let _ = dotenvy::dotenv();
        Self::resolve(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn resolve(
        args: impl IntoIterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let mut output = OutputMode::Text;
        let mut positional = Vec::new();
        for arg in args {
            if arg == SHEET_FLAG {
                output = OutputMode::Sheet;
            } else if arg.starts_with("--") {
                return Err(CliError::UnexpectedArgument(arg));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let snapshot = positional
            .next()
            .or_else(|| lookup(SNAPSHOT_VAR))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(CliError::Usage)?;
        let tour = positional
            .next()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(TourId)
                    .map_err(|_| CliError::InvalidTourId(raw))
            })
            .transpose()?;
        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra));
        }

        let currency_symbol = lookup(CURRENCY_VAR)
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or_else(|| CurrencyFormat::default().symbol().to_string());

        Ok(Self {
            snapshot,
            tour,
            currency_symbol,
            output,
        })
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Settles the configured tour, or every tour in the snapshot, and returns
/// the rendered output.
pub fn execute(config: &AppConfig) -> Result<String, CliError> {
    let store = SnapshotStore::load(&config.snapshot)?;
    let service = SettlementService::new(&store, &store, &store, &store);
    let currency = CurrencyFormat::new(config.currency_symbol.clone());

    let tours = match config.tour {
        Some(tour) => vec![tour],
        None => store.tour_ids(),
    };

    let mut rendered = Vec::with_capacity(tours.len());
    for tour in tours {
        let workspace = store
            .tour_workspace(tour)
            .map_err(SettlementServiceError::from)?;
        let report = service.settle(workspace, tour)?;
        let body = match config.output {
            OutputMode::Text => SettlementPresenter::render_text(&report, &currency),
            OutputMode::Sheet => sheet_to_tsv(&ExportSheet::from_report(&report), &currency),
        };
        let heading = match (store.workspace_name(workspace), store.tour_name(tour)) {
            (Some(workspace_name), Some(tour_name)) => format!("{workspace_name}: {tour_name}\n"),
            (None, Some(tour_name)) => format!("{tour_name}\n"),
            _ => String::new(),
        };
        rendered.push(format!("{heading}{body}"));
    }
    Ok(rendered.join("\n"))
}

fn sheet_to_tsv(sheet: &ExportSheet, currency: &CurrencyFormat) -> String {
    let mut out = format!("# {}\n", sheet.name);
    for row in &sheet.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                CellValue::Empty => String::new(),
                CellValue::Text(text) => text.clone(),
                CellValue::Currency(amount) => currency.format(*amount),
                CellValue::Percent(percent) => format!("{percent}%"),
            })
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

/// Run the application with proper error handling
pub fn run() {
    init_logging();

    let result = AppConfig::from_args_and_env().and_then(|config| {
        tracing::debug!(snapshot = %config.snapshot.display(), tour = ?config.tour, "Starting");
        execute(&config)
    });

    match result {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::error!("Settlement failed: {err:?}");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
