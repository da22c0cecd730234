use crate::{catalog::Catalog, cook::Cook, settings::Settings};
use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;
use tracing::{debug, info};

/// The two cooks of a classic run.
pub fn classic_cooks() -> Vec<Cook> {
    vec![
        Cook::new("Alice"),
        Cook::expert("Bob", "Gordan Ramsay's Boot Camp"),
    ]
}

pub struct Kitchen<W: Write> {
    catalog: Catalog,
    cooks: Vec<Cook>,
    settings: Settings,
    rng: StdRng,
    out: W,
}

impl<W: Write> Kitchen<W> {
    pub fn new(cooks: Vec<Cook>, settings: Settings, out: W) -> Self {
        Self::with_catalog(Catalog::standard(), cooks, settings, out)
    }
    pub fn with_catalog(catalog: Catalog, cooks: Vec<Cook>, settings: Settings, out: W) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            cooks,
            settings,
            rng,
            out,
        }
    }
    #[cfg(test)]
    pub fn cooks(&self) -> &[Cook] {
        &self.cooks
    }
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<()> {
        self.settings.validate(&self.catalog)?;
        info!(
            "{} run: {} cook(s) learning {} recipe(s) each",
            self.settings.mode,
            self.cooks.len(),
            self.settings.target_recipes
        );
        self.teach_recipes()?;
        self.report()?;
        self.out.flush().context("failed to flush report")?;
        Ok(())
    }

    /// Random draws until every cook knows the target number of distinct
    /// recipes. Repeat draws are turned away by the cook.
    fn teach_recipes(&mut self) -> Result<()> {
        for cook in &mut self.cooks {
            let mut draws = 0usize;
            while cook.recipes().len() < self.settings.target_recipes {
                let Some(recipe) = self.catalog.choose(&mut self.rng) else {
                    bail!("catalog has no recipes to teach");
                };
                cook.learn_recipe(recipe, &mut self.out)?;
                draws += 1;
            }
            debug!("{} needed {} draw(s)", cook.name, draws);
        }
        Ok(())
    }

    fn report(&mut self) -> Result<()> {
        for cook in &self.cooks {
            cook.display_recipes(&mut self.out)?;
            writeln!(self.out)?;
            if self.settings.complexity_report {
                cook.display_recipe_complexity(&mut self.out)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}
