use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::domain::recipe::{
    entities::Recipe,
    value_objects::{RecipeQuery, SortOrder},
};

/// Keep the recipes whose name or ingredient names contain `text`,
/// ignoring case. An empty query keeps everything.
pub fn filter_recipes(recipes: &[Recipe], text: &str) -> Vec<Recipe> {
    let needle = text.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| recipe.matches(&needle))
        .cloned()
        .collect()
}

/// Stable sort. Recipes without `saved_at` count as saved at epoch zero.
pub fn sort_recipes(recipes: &mut [Recipe], order: SortOrder) {
    match order {
        SortOrder::Date => {
            recipes.sort_by(|a, b| b.saved_at.unwrap_or(0).cmp(&a.saved_at.unwrap_or(0)))
        }
        SortOrder::Name => recipes.sort_by(|a, b| compare_names(&a.recipe_name, &b.recipe_name)),
    }
}

/// Collation for recipe names, close to the root locale order.
///
/// Letters compare ignoring accents and case first. Accents break ties next
/// (unaccented first), then case (lowercase first).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| compare_case(a, b))
}

fn primary_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or(Ordering::Equal)
}

pub fn query_recipes(recipes: &[Recipe], query: &RecipeQuery) -> Vec<Recipe> {
    let mut matching = filter_recipes(recipes, &query.text);
    sort_recipes(&mut matching, query.order);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::Ingredient;

    fn recipe(name: &str, ingredients: &[&str], saved_at: Option<i64>) -> Recipe {
        let mut recipe = Recipe::new(
            name.to_string(),
            format!("{name} description"),
            ingredients
                .iter()
                .map(|i| Ingredient {
                    name: i.to_string(),
                    quantity: "1".to_string(),
                })
                .collect(),
            vec!["Cook.".to_string()],
        );
        recipe.saved_at = saved_at;
        recipe
    }

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.recipe_name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date_descending() {
        let mut recipes = vec![
            recipe("A", &[], Some(100)),
            recipe("B", &[], Some(300)),
            recipe("C", &[], Some(200)),
        ];

        sort_recipes(&mut recipes, SortOrder::Date);

        let saved: Vec<_> = recipes.iter().map(|r| r.saved_at).collect();
        assert_eq!(saved, vec![Some(300), Some(200), Some(100)]);
    }

    #[test]
    fn test_sort_by_date_treats_missing_as_oldest() {
        let mut recipes = vec![recipe("Old", &[], None), recipe("New", &[], Some(5))];

        sort_recipes(&mut recipes, SortOrder::Date);

        assert_eq!(names(&recipes), vec!["New", "Old"]);
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let mut recipes = vec![
            recipe("Banana Bread", &[], None),
            recipe("Apple Pie", &[], None),
        ];

        sort_recipes(&mut recipes, SortOrder::Name);

        assert_eq!(names(&recipes), vec!["Apple Pie", "Banana Bread"]);
    }

    #[test]
    fn test_compare_names_ignores_case_first() {
        assert_eq!(compare_names("banana", "Cherry"), Ordering::Less);
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Zucchini", "zucchini"), Ordering::Greater);
        assert_eq!(compare_names("Soup", "Soup"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_name_folds_accents() {
        let mut recipes = vec![
            recipe("Zucchini Fritters", &[], None),
            recipe("Crepes Suzette", &[], None),
            recipe("Crème Brûlée", &[], None),
            recipe("Éclairs", &[], None),
        ];

        sort_recipes(&mut recipes, SortOrder::Name);

        assert_eq!(
            names(&recipes),
            vec![
                "Crème Brûlée",
                "Crepes Suzette",
                "Éclairs",
                "Zucchini Fritters"
            ]
        );
    }

    #[test]
    fn test_compare_names_accent_breaks_ties_before_case() {
        assert_eq!(compare_names("cote", "coté"), Ordering::Less);
        assert_eq!(compare_names("Cote", "coté"), Ordering::Less);
        assert_eq!(compare_names("Pâté", "pate"), Ordering::Greater);
        // precomposed and decomposed forms are the same name
        assert_eq!(compare_names("Cr\u{e8}me", "Cre\u{300}me"), Ordering::Equal);
    }

    #[test]
    fn test_filter_by_ingredient_name() {
        let recipes = vec![
            recipe("Risotto", &["Arborio Rice", "stock"], Some(1)),
            recipe("Burrito", &["tortilla", "brown rice"], Some(2)),
            recipe("Omelette", &["eggs"], Some(3)),
        ];

        let found = filter_recipes(&recipes, "RICE");

        assert_eq!(names(&found), vec!["Risotto", "Burrito"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let recipes = vec![recipe("A", &[], None), recipe("B", &[], None)];

        assert_eq!(filter_recipes(&recipes, "").len(), 2);
    }

    #[test]
    fn test_query_filters_then_sorts() {
        let recipes = vec![
            recipe("Lemon Tart", &["lemon"], Some(10)),
            recipe("Lemon Chicken", &["chicken", "lemon"], Some(30)),
            recipe("Pasta", &["penne"], Some(20)),
        ];

        let by_date = query_recipes(
            &recipes,
            &RecipeQuery {
                text: "lemon".to_string(),
                order: SortOrder::Date,
            },
        );
        let by_name = query_recipes(
            &recipes,
            &RecipeQuery {
                text: "lemon".to_string(),
                order: SortOrder::Name,
            },
        );

        assert_eq!(names(&by_date), vec!["Lemon Chicken", "Lemon Tart"]);
        assert_eq!(names(&by_name), vec!["Lemon Chicken", "Lemon Tart"]);
    }
}
