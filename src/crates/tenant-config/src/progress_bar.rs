//! Route-change progress bar styling

use crate::error::Result;
use crate::tree::ConfigTree;
use serde::Serialize;
use std::collections::BTreeMap;

const SHADOW_BLUR: u32 = 5;

/// Colors keyed by gradient stop, plus the glow radius
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBarConfig {
    pub bar_colors: BTreeMap<u32, String>,
    pub shadow_blur: u32,
}

impl ProgressBarConfig {
    /// Single stop at `0` using `theme.progressBarColor`
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        let color = tree.require_str("theme.progressBarColor")?;
        Ok(Self {
            bar_colors: BTreeMap::from([(0, color.to_string())]),
            shadow_blur: SHADOW_BLUR,
        })
    }
}
