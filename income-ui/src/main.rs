use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info};

use income_core::calculations::{
    BudgetAssessment, BudgetCategory, IncomeClassifier, IncomeComparison, PRESET_ROLES, Person,
    preset_role,
};
use income_core::distribution::NATIONAL_DISTRIBUTION;
use income_ui::csv_loader;
use income_ui::logging;
use income_ui::progress::{Achievement, ProgressTracker, Section};
use income_ui::state::{AppState, UserAnswers};
use income_ui::storage::{FileStore, KeyValueStore, MemoryStore};
use income_ui::utils::{format_percent, format_rupees, parse_income};
use income_ui::views::{
    BudgetView, ComparisonView, DistributionView, ProgressView, ResultsView, Scenario,
    ScenarioView, SourcesView,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Where does your monthly income really sit in India?
///
/// Classifies an income against the national distribution and explores what
/// the numbers mean for people at other points in it.
#[derive(Debug, Parser)]
#[command(name = "real-middle", version)]
struct Cli {
    /// TOML file holding progress and the assessment flag.
    /// Without it nothing is remembered between runs.
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `income_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a monthly income and show where it falls.
    Classify {
        /// Monthly income in rupees, e.g. `25000` or `₹1,00,000`.
        income: String,

        /// The class you consider yourself part of, e.g. "Middle Class".
        #[arg(long, default_value = "")]
        perception: String,

        #[arg(long)]
        savings: Option<String>,

        #[arg(long)]
        disposable_income: Option<String>,

        #[arg(long)]
        expenditure: Option<String>,

        #[arg(long)]
        debt: Option<String>,

        /// Also print the distribution with your bracket marked.
        #[arg(long)]
        chart: bool,
    },

    /// Compare your income with someone else's.
    Compare {
        /// Your monthly income.
        income: String,

        /// Preset role to compare against.
        #[arg(long, default_value = "Domestic Worker")]
        role: String,

        /// Their monthly income; required for roles without a typical income.
        #[arg(long)]
        other_income: Option<String>,

        #[arg(long, default_value = "You")]
        name: String,
    },

    /// Try to fit essential costs into a monthly income.
    Budget {
        #[arg(long, default_value = "9000")]
        income: String,

        /// Allocation as `category=amount`; repeat for each category.
        #[arg(long = "alloc", value_parser = parse_allocation)]
        allocations: Vec<(BudgetCategory, Decimal)>,
    },

    /// Show an illustrative cost or mobility scenario.
    Scenario {
        #[arg(value_enum)]
        scenario: Scenario,
    },

    /// Print the national income distribution.
    Distribution {
        /// Mark the bracket containing this income.
        #[arg(long)]
        income: Option<String>,
    },

    /// Where the figures come from.
    Sources,

    /// Classify every row of a `monthly_income,perception` CSV file.
    Batch { file: PathBuf },

    /// Show sections explored and achievements earned.
    Progress,
}

fn parse_allocation(s: &str) -> Result<(BudgetCategory, Decimal), String> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected category=amount, got '{s}'"))?;
    let category =
        BudgetCategory::parse(name).ok_or_else(|| format!("unknown budget category '{name}'"))?;
    let amount = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    if amount.is_sign_negative() {
        return Err(format!("amount for {category} cannot be negative"));
    }
    Ok((category, amount))
}

fn section_for(scenario: Scenario) -> Section {
    match scenario {
        Scenario::Healthcare => Section::Healthcare,
        Scenario::Education => Section::Education,
        Scenario::RuralUrban => Section::RuralUrban,
        Scenario::PovertyTrap => Section::PovertyTrap,
    }
}

fn announce(unlocked: &[Achievement]) {
    for achievement in unlocked {
        println!(
            "Achievement unlocked: {} - {}",
            achievement.title(),
            achievement.description()
        );
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging("warn");
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let mut store: Box<dyn KeyValueStore> = match &cli.state {
        Some(path) => Box::new(
            FileStore::open(path)
                .with_context(|| format!("failed to open state file {}", path.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };

    let progress = ProgressTracker::load(store.as_ref()).context("failed to load progress")?;
    let mut state = AppState::new(progress);
    let classifier = IncomeClassifier::national();

    debug!(command = ?cli.command, "running");

    match cli.command {
        Command::Classify {
            income,
            perception,
            savings,
            disposable_income,
            expenditure,
            debt,
            chart,
        } => {
            state.begin();
            state.answers = UserAnswers {
                monthly_income: income,
                savings: savings.unwrap_or_default(),
                disposable_income: disposable_income.unwrap_or_default(),
                expenditure: expenditure.unwrap_or_default(),
                debt: debt.unwrap_or_default(),
                perception,
            };

            let unlocked_before = state.progress.achievements().len();
            let result = state.submit(&classifier, store.as_mut())?;
            print!("{}", ResultsView(result));

            if chart {
                println!();
                print!(
                    "{}",
                    DistributionView {
                        brackets: &NATIONAL_DISTRIBUTION,
                        highlight: Some(&result.bracket),
                    }
                );
            }
            if state.is_revelation() {
                println!();
                println!("Surprise! Most Indians would not call this income middle class.");
            }
            announce(&state.progress.achievements()[unlocked_before..]);
        }

        Command::Compare {
            income,
            role,
            other_income,
            name,
        } => {
            let yours = parse_income(&income).context("invalid value for your income")?;
            let theirs = match other_income {
                Some(other) => parse_income(&other).context("invalid value for --other-income")?,
                None => match preset_role(&role).and_then(|preset| preset.typical_income) {
                    Some(typical) => typical,
                    None => {
                        let known: Vec<&str> = PRESET_ROLES
                            .iter()
                            .filter(|preset| preset.typical_income.is_some())
                            .map(|preset| preset.role)
                            .collect();
                        bail!(
                            "no typical income for role '{role}'; pass --other-income or use one of: {}",
                            known.join(", ")
                        )
                    }
                },
            };

            let comparison =
                IncomeComparison::new(Person::new(name, yours), Person::new(role, theirs))?;
            print!("{}", ComparisonView(&comparison));
            announce(&state.open_section(Section::Comparison, store.as_mut())?);
        }

        Command::Budget {
            income,
            allocations,
        } => {
            let income = parse_income(&income).context("invalid value for --income")?;
            let allocations: BTreeMap<BudgetCategory, Decimal> = allocations.into_iter().collect();
            let assessment = BudgetAssessment::new(income, &allocations);

            print!(
                "{}",
                BudgetView {
                    assessment: &assessment,
                    allocations: &allocations,
                }
            );
            announce(&state.open_section(Section::Budget, store.as_mut())?);
        }

        Command::Scenario { scenario } => {
            print!("{}", ScenarioView(scenario));
            announce(&state.open_section(section_for(scenario), store.as_mut())?);
        }

        Command::Distribution { income } => {
            let highlight = income
                .as_deref()
                .map(parse_income)
                .transpose()
                .context("invalid value for --income")?
                .and_then(|income| classifier.bracket_for(income));

            print!(
                "{}",
                DistributionView {
                    brackets: classifier.brackets(),
                    highlight,
                }
            );
            announce(&state.open_section(Section::Overview, store.as_mut())?);
        }

        Command::Sources => {
            print!("{}", SourcesView);
            announce(&state.open_section(Section::Sources, store.as_mut())?);
        }

        Command::Batch { file } => {
            let responses = csv_loader::load_from_file(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            let results = csv_loader::classify_all(&responses, &classifier)?;
            info!(rows = results.len(), "classified batch");

            for (response, result) in responses.iter().zip(&results) {
                println!(
                    "row {:>3}: {:>12}  {:>6}  {}",
                    response.row,
                    format_rupees(result.income),
                    format_percent(result.percentile),
                    result.class_label
                );
            }
        }

        Command::Progress => {
            print!("{}", ProgressView(&state.progress));
        }
    }

    Ok(())
}
