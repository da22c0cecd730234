use crate::recipe::Recipe;
use rand::{seq::IndexedRandom, Rng};
use std::rc::Rc;

/// The fixed set of recipes cooks can learn. Built once, never extended.
pub struct Catalog {
    recipes: Vec<Rc<Recipe>>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self::with_recipes(vec![
            Recipe::new("Spaghetti", &["pasta", "tomato sauce", "meatballs"], 20, 10),
            Recipe::new(
                "Salad",
                &["lettuce", "tomato", "cucumber", "salad dressing"],
                10,
                0,
            ),
            Recipe::new(
                "Pizza",
                &["pizza dough", "tomato sauce", "cheese", "pepperoni"],
                15,
                15,
            ),
            Recipe::new(
                "Chicken Curry",
                &["chicken", "curry powder", "coconut milk", "rice"],
                20,
                25,
            ),
            Recipe::new(
                "Pancakes",
                &["flour", "eggs", "milk", "sugar", "baking powder"],
                5,
                15,
            ),
            Recipe::new(
                "Chocolate Cake",
                &["flour", "cocoa powder", "eggs", "sugar", "butter"],
                20,
                30,
            ),
            Recipe::new(
                "Beef Stew",
                &["beef", "potatoes", "carrots", "onions", "beef broth"],
                15,
                105,
            ),
        ])
    }
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(Rc::new).collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.recipes.len()
    }
    #[cfg(test)]
    pub fn recipes(&self) -> &[Rc<Recipe>] {
        &self.recipes
    }
    #[cfg(test)]
    pub fn find(&self, name: &str) -> Option<Rc<Recipe>> {
        self.recipes.iter().find(|r| r.name == name).cloned()
    }
    /// Uniform draw with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rc<Recipe>> {
        self.recipes.choose(rng).cloned()
    }
}
