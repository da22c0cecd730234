use crate::catalog::Catalog;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::{fmt, fmt::Display};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Mode {
    /// Alice and Bob learn two recipes each
    #[default]
    Classic,
    /// Cooks are entered on stdin, learn three recipes each and get a
    /// complexity summary
    Interactive,
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Classic => "classic",
                Mode::Interactive => "interactive",
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub target_recipes: usize,
    pub complexity_report: bool,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Classic => Self {
                mode,
                target_recipes: 2,
                complexity_report: false,
                seed: None,
            },
            Mode::Interactive => Self {
                mode,
                target_recipes: 3,
                complexity_report: true,
                seed: None,
            },
        }
    }
    pub fn with_target(mut self, target_recipes: usize) -> Self {
        self.target_recipes = target_recipes;
        self
    }
    pub fn with_complexity_report(mut self) -> Self {
        self.complexity_report = true;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cooks only learn distinct recipes, so a target above the catalog
    /// size would never be reached.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.target_recipes == 0 {
            bail!("recipe target must be at least 1");
        }
        if self.target_recipes > catalog.len() {
            bail!(
                "recipe target {} exceeds the {} recipes in the catalog",
                self.target_recipes,
                catalog.len()
            );
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}
