/// Sentinel category that disables filtering.
pub const ALL: &str = "All";

pub trait Categorized {
    fn category(&self) -> &str;
}

/// Items whose category equals `selected`, in their original order.
/// Selecting [`ALL`] returns every item.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected == ALL || item.category() == selected)
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<&str> {
    let mut seen = Vec::new();
    for item in items {
        let category = item.category();
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, PROJECT_CATEGORIES, SKILLS};

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    const ITEMS: [Item; 2] = [
        Item {
            id: 1,
            category: "Web App",
        },
        Item {
            id: 2,
            category: "Mobile",
        },
    ];

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_filter_single_category() {
        let mobile = filter_by_category(&ITEMS, "Mobile");
        assert_eq!(ids(&mobile), vec![2]);
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let all = filter_by_category(&ITEMS, ALL);
        assert_eq!(ids(&all), vec![1, 2]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_by_category(&ITEMS, "Design").is_empty());
        // case sensitive
        assert!(filter_by_category(&ITEMS, "mobile").is_empty());
    }

    #[test]
    fn test_project_filters() {
        let total = PROJECTS.len();
        for category in PROJECT_CATEGORIES {
            let filtered = filter_by_category(&PROJECTS, category);
            assert!(filtered.len() <= total);
            if category == ALL {
                assert_eq!(filtered.len(), total);
            } else {
                assert!(filtered.iter().all(|p| p.category == category));
                let expected = PROJECTS.iter().filter(|p| p.category == category).count();
                assert_eq!(filtered.len(), expected);
            }
        }
        let mobile = filter_by_category(&PROJECTS, "Mobile")
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(mobile, vec![3, 6]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(&SKILLS),
            vec!["Frontend", "Backend", "Tools & Design"]
        );
        assert_eq!(categories(&ITEMS), vec!["Web App", "Mobile"]);
        assert!(categories::<Item>(&[]).is_empty());
    }
}
