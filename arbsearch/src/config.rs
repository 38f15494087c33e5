//! Search configuration
//!
//! A [`SearchConfig`] is usually read from a small TOML file:
//!
//! ```toml
//! matching = "value"        # or "structural"
//! ordering = "exact"        # or "approximate"
//!
//! [arithmetic]
//! overflow = "checked"      # or "wrap"
//! initial_capacity = 8
//! ```
//!
//! Every key is optional and falls back to [`SearchConfig::default`].
use std::path::Path;

use arbnum::config::ArithmeticConfig;
use serde::{Deserialize, Serialize};

use crate::{
    qap::CostOrdering,
    subset::MatchMode,
    utils::{error::SearchResult, parse_toml, read_toml},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub arithmetic: ArithmeticConfig,
    /// How subset sums are compared against their target.
    pub matching: MatchMode,
    /// How assignment costs are ranked.
    pub ordering: CostOrdering,
}

impl SearchConfig {
    pub fn from_toml_str(source: &str) -> SearchResult<Self> {
        parse_toml(source, "<inline>")
    }

    pub fn from_path(path: impl AsRef<Path>) -> SearchResult<Self> {
        read_toml(path)
    }
}
