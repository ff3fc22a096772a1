//! Plain-text renderings of each screen.
//!
//! Every view borrows the data it shows and implements `Display`, so callers
//! decide where the text goes.

mod budget;
mod comparison;
mod distribution;
mod progress;
mod results;
mod scenarios;
mod sources;

pub use budget::BudgetView;
pub use comparison::ComparisonView;
pub use distribution::DistributionView;
pub use progress::ProgressView;
pub use results::ResultsView;
pub use scenarios::{Scenario, ScenarioView};
pub use sources::SourcesView;
