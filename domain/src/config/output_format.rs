//! Output format value object

use serde::{Deserialize, Serialize};

/// How assessment results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Verdict plus every feedback item (default)
    #[default]
    Full,
    /// Verdict and survey id only
    Summary,
    /// JSON document
    Json,
}
