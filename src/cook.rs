use crate::recipe::{format_minutes, Complexity, Recipe};
use std::{
    fmt,
    io::{self, Write},
    rc::Rc,
};
use tracing::{debug, info};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CookKind {
    Normal,
    Expert { training_location: String },
}

/// A cook and the recipes they have learned. Experts report their prep
/// times at half speed; everything else is shared.
#[derive(Debug)]
pub struct Cook {
    pub name: String,
    pub kind: CookKind,
    recipes: Vec<Rc<Recipe>>,
}

impl fmt::Display for Cook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CookKind::Normal => write!(f, "{} (normal cook)", self.name),
            CookKind::Expert { training_location } => {
                write!(f, "{} (expert cook, trained at {})", self.name, training_location)
            }
        }
    }
}

impl Cook {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, CookKind::Normal)
    }
    pub fn expert(name: impl Into<String>, training_location: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            CookKind::Expert {
                training_location: training_location.into(),
            },
        )
    }
    pub fn with_kind(name: impl Into<String>, kind: CookKind) -> Self {
        Self {
            name: name.into(),
            kind,
            recipes: vec![],
        }
    }
    pub fn is_expert(&self) -> bool {
        matches!(self.kind, CookKind::Expert { .. })
    }

    /// Learned recipes in the order they were learned.
    pub fn recipes(&self) -> &[Rc<Recipe>] {
        &self.recipes
    }

    /// Adds `recipe` unless this exact catalog entry is already known, in
    /// which case a notice is written and nothing changes. Returns whether
    /// the recipe was new.
    pub fn learn_recipe(&mut self, recipe: Rc<Recipe>, out: &mut impl Write) -> io::Result<bool> {
        if self.recipes.iter().any(|known| Rc::ptr_eq(known, &recipe)) {
            debug!("{} drew {} again", self.name, recipe.name);
            writeln!(out, "You already know how to cook {}!", recipe.name)?;
            return Ok(false);
        }
        info!(
            "{} learned {} ({})",
            self.name,
            recipe.name,
            recipe.complexity()
        );
        self.recipes.push(recipe);
        Ok(true)
    }

    pub fn display_recipes(&self, out: &mut impl Write) -> io::Result<()> {
        if self.recipes.is_empty() {
            return writeln!(out, "{} knows no recipes.", self.name);
        }
        match &self.kind {
            CookKind::Normal => writeln!(out, "{}'s Recipes:", self.name)?,
            CookKind::Expert { training_location } => writeln!(
                out,
                "{}'s Recipes (trained at {}):",
                self.name, training_location
            )?,
        }
        for recipe in &self.recipes {
            writeln!(out, "{}:", recipe.name)?;
            writeln!(out, "\t{}", recipe.ingredient_line())?;
            if self.is_expert() {
                let prep = f64::from(recipe.prep_time_minutes) / 2.0;
                let total = prep + f64::from(recipe.cook_time_minutes);
                writeln!(out, "\tPrep Time: {} (Expert Speed)", format_minutes(prep))?;
                writeln!(out, "\tCook Time: {}", recipe.cook_time_minutes)?;
                writeln!(out, "\tTotal Time: {}", format_minutes(total))?;
            } else {
                writeln!(out, "\tPrep Time: {}", recipe.prep_time_minutes)?;
                writeln!(out, "\tCook Time: {}", recipe.cook_time_minutes)?;
                writeln!(out, "\tTotal Time: {}", recipe.total_time_minutes())?;
            }
        }
        Ok(())
    }

    /// Counts of (simple, complex) learned recipes.
    pub fn complexity_counts(&self) -> (usize, usize) {
        self.recipes
            .iter()
            .fold((0, 0), |(simple, complex), recipe| match recipe.complexity() {
                Complexity::Simple => (simple + 1, complex),
                Complexity::Complex => (simple, complex + 1),
            })
    }

    pub fn display_recipe_complexity(&self, out: &mut impl Write) -> io::Result<()> {
        let (simple, complex) = self.complexity_counts();
        writeln!(
            out,
            "{} knows {} simple recipe(s) and {} complex recipe(s)",
            self.name, simple, complex
        )
    }
}
