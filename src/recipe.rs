use std::{fmt, fmt::Display};

/// Recipes with more ingredients than this are complex.
pub const SIMPLE_INGREDIENT_LIMIT: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Complexity {
    Simple,
    Complex,
}

impl Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Complexity::Simple => "simple",
                Complexity::Complex => "complex",
            }
        )
    }
}

#[derive(Debug)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: &[&str],
        prep_time_minutes: u32,
        cook_time_minutes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            prep_time_minutes,
            cook_time_minutes,
        }
    }
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes + self.cook_time_minutes
    }
    pub fn complexity(&self) -> Complexity {
        if self.ingredients.len() <= SIMPLE_INGREDIENT_LIMIT {
            Complexity::Simple
        } else {
            Complexity::Complex
        }
    }
    /// Ingredients on one line, separated by single spaces.
    pub fn ingredient_line(&self) -> String {
        self.ingredients.join(" ")
    }
}

/// Formats fractional minutes the way the expert report shows them: whole
/// values keep one decimal place (`10.0`), others print as-is (`7.5`).
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{:.1}", minutes)
    } else {
        format!("{}", minutes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn total_time_adds_prep_and_cook() {
        let stew = Recipe::new("Beef Stew", &["beef", "potatoes"], 15, 105);
        assert_eq!(stew.total_time_minutes(), 120);
        assert_eq!(stew.prep_time_minutes, 15);
    }

    #[test]
    fn four_ingredients_is_still_simple() {
        let salad = Recipe::new(
            "Salad",
            &["lettuce", "tomato", "cucumber", "salad dressing"],
            10,
            0,
        );
        assert_eq!(salad.complexity(), Complexity::Simple);
        assert_eq!(salad.complexity().to_string(), "simple");

        let pancakes = Recipe::new(
            "Pancakes",
            &["flour", "eggs", "milk", "sugar", "baking powder"],
            5,
            15,
        );
        assert_eq!(pancakes.complexity(), Complexity::Complex);
        assert_eq!(pancakes.complexity().to_string(), "complex");
    }

    #[test]
    fn duplicate_ingredients_are_kept_in_order() {
        let toast = Recipe::new("Toast", &["bread", "butter", "bread"], 1, 2);
        assert_eq!(toast.ingredient_line(), "bread butter bread");
    }

    #[test]
    fn halved_minutes_keep_a_decimal() {
        assert_eq!(format_minutes(10.0), "10.0");
        assert_eq!(format_minutes(7.5), "7.5");
        assert_eq!(format_minutes(2.5 + 15.0), "17.5");
        assert_eq!(format_minutes(0.0), "0.0");
    }
}
