//! Client-side category name filtering.

use crate::entities::Category;

/// Case-insensitive substring match on the term as typed. An empty term
/// matches everything; whitespace is not trimmed.
#[must_use]
pub fn matches_term(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Filter categories by name, preserving order.
pub fn filter_by_name<'a, I>(categories: I, term: &str) -> Vec<&'a Category>
where
    I: IntoIterator<Item = &'a Category>,
{
    categories
        .into_iter()
        .filter(|category| matches_term(&category.name, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            item_count: 1,
            image: String::new(),
        }
    }

    #[test]
    fn match_ignores_case() {
        assert!(matches_term("Summer Clothes", "summer"));
        assert!(matches_term("Summer Clothes", "CLOTH"));
        assert!(!matches_term("Hats", "clothes"));
    }

    #[test]
    fn empty_term_matches_all() {
        assert!(matches_term("Hats", ""));
    }

    #[test]
    fn whitespace_term_is_matched_literally() {
        assert!(matches_term("Men Clothes", " "));
        assert!(!matches_term("Hats", " "));
        assert!(!matches_term("Men Clothes", "   "));
    }

    #[test]
    fn filter_preserves_order() {
        let all = vec![
            category("1", "Men Clothes"),
            category("2", "Hats"),
            category("3", "Women Clothes"),
        ];
        let found = filter_by_name(&all, "clothes");
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
