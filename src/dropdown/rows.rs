//! Row model built from dropdown props, independent of painting

use super::highlight::Highlight;
use crate::types::SearchItem;

/// Separator placed between an entry's title and its description
pub const TITLE_SEPARATOR: &str = " · ";

/// What the dropdown shows for a given set of props
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownView<'a> {
    Loading,
    List(Vec<Row<'a>>),
}

impl<'a> DropdownView<'a> {
    pub fn build(items: &'a [SearchItem], search_substring: &str, loading: bool) -> Self {
        if loading {
            return Self::Loading;
        }

        Self::List(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| Row::new(index, item, search_substring))
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Row<'a>] {
        match self {
            Self::Loading => &[],
            Self::List(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    /// Position of the item in the caller's sequence
    pub index: usize,
    pub item: &'a SearchItem,
    pub description: Highlight<'a>,
}

impl<'a> Row<'a> {
    pub fn new(index: usize, item: &'a SearchItem, search_substring: &str) -> Self {
        Self {
            index,
            item,
            description: Highlight::new(item.desc.as_deref(), search_substring),
        }
    }

    pub fn is_header(&self) -> bool {
        self.item.is_header()
    }

    pub fn is_clickable(&self) -> bool {
        !self.is_header()
    }

    /// Leading label text: the bare title for headers, `title · ` for entries
    pub fn title_label(&self) -> Option<String> {
        let title = self.item.title.as_deref().filter(|t| !t.is_empty())?;
        if self.is_header() {
            Some(title.to_string())
        } else {
            Some(format!("{title}{TITLE_SEPARATOR}"))
        }
    }

    pub fn example(&self) -> Option<&'a str> {
        if self.is_header() {
            return None;
        }
        self.item.example.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<SearchItem> {
        vec![
            SearchItem::header("Tags").with_icon("icon-tag"),
            SearchItem::entry("browser:")
                .with_title("browser")
                .with_desc("Browser name"),
            SearchItem::entry("release:").with_desc("Release version"),
            SearchItem::header("Status").with_desc("Issue status"),
            SearchItem::entry("is:unresolved")
                .with_desc("Unresolved issues")
                .with_example("is:unresolved"),
        ]
    }

    #[test]
    fn test_loading_hides_items() {
        let items = sample_items();
        let view = DropdownView::build(&items, "br", true);
        assert_eq!(view, DropdownView::Loading);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_loading_with_no_items() {
        assert_eq!(DropdownView::build(&[], "", true), DropdownView::Loading);
        assert_eq!(DropdownView::build(&[], "", false), DropdownView::List(Vec::new()));
    }

    #[test]
    fn test_one_row_per_item_partitioned_by_type() {
        let items = sample_items();
        let view = DropdownView::build(&items, "", false);
        let rows = view.rows();
        assert_eq!(rows.len(), items.len());
        assert_eq!(rows.iter().filter(|r| r.is_header()).count(), 2);
        assert_eq!(rows.iter().filter(|r| r.is_clickable()).count(), 3);
    }

    #[test]
    fn test_row_order_matches_input() {
        let items = sample_items();
        let view = DropdownView::build(&items, "", false);
        let indices: Vec<usize> = view.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        for row in view.rows() {
            assert!(std::ptr::eq(row.item, &items[row.index]));
        }
    }

    #[test]
    fn test_build_is_stable() {
        let items = sample_items();
        assert_eq!(
            DropdownView::build(&items, "re", false),
            DropdownView::build(&items, "re", false)
        );
    }

    #[test]
    fn test_descriptions_are_highlighted() {
        let items = sample_items();
        let view = DropdownView::build(&items, "VERSION", false);
        assert_eq!(
            view.rows()[2].description,
            Highlight::Split {
                before: "Release ",
                matched: "version",
                after: "",
            }
        );
        assert_eq!(view.rows()[1].description, Highlight::Plain("Browser name"));
        assert!(view.rows()[0].description.is_absent());
    }

    #[test]
    fn test_title_labels() {
        let items = sample_items();
        let view = DropdownView::build(&items, "", false);
        let rows = view.rows();
        assert_eq!(rows[0].title_label().as_deref(), Some("Tags"));
        assert_eq!(rows[1].title_label().as_deref(), Some("browser · "));
        assert_eq!(rows[2].title_label(), None);
    }

    #[test]
    fn test_example_only_on_entries() {
        let mut items = sample_items();
        items[0].example = Some("ignored".into());
        let view = DropdownView::build(&items, "", false);
        assert_eq!(view.rows()[0].example(), None);
        assert_eq!(view.rows()[1].example(), None);
        assert_eq!(view.rows()[4].example(), Some("is:unresolved"));
    }
}
