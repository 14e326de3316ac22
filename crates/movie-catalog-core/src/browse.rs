use movie_catalog_models::ListCategory;

/// Current browse selection: category rail or free-text search, plus the
/// page cursor. Encodes the list-view rules: a new query or category resets
/// to page 1, switching category clears the query, and the reported total
/// page count is clamped to the catalog's hard cap.
#[derive(Debug, Clone)]
pub struct BrowseSelection {
    query: String,
    category: ListCategory,
    page: u32,
    total_pages: u32,
    page_cap: u32,
}

impl BrowseSelection {
    pub fn new(category: ListCategory, page_cap: u32) -> Self {
        Self {
            query: String::new(),
            category,
            page: 1,
            total_pages: 1,
            page_cap: page_cap.max(1),
        }
    }

    /// Trimmed search query; None when browsing a category rail.
    pub fn query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn is_searching(&self) -> bool {
        self.query().is_some()
    }

    pub fn category(&self) -> ListCategory {
        self.category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// A settled search term replaces the previous one and restarts
    /// pagination.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.page = 1;
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Switching rails abandons the search and restarts pagination.
    pub fn set_category(&mut self, category: ListCategory) {
        if category == self.category && self.query.is_empty() {
            return;
        }
        self.category = category;
        self.query.clear();
        self.page = 1;
    }

    /// Record the page count reported by the catalog, clamped to the cap the
    /// catalog actually serves.
    pub fn apply_total_pages(&mut self, total: u32) {
        self.total_pages = total.max(1).min(self.page_cap);
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages);
        if clamped == self.page {
            return false;
        }
        self.page = clamped;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> BrowseSelection {
        BrowseSelection::new(ListCategory::Popular, 500)
    }

    #[test]
    fn starts_on_page_one_of_the_default_rail() {
        let sel = selection();
        assert_eq!(sel.page(), 1);
        assert_eq!(sel.category(), ListCategory::Popular);
        assert!(!sel.is_searching());
    }

    #[test]
    fn new_query_resets_pagination() {
        let mut sel = selection();
        sel.apply_total_pages(20);
        sel.set_page(5);
        sel.set_query("matrix");
        assert_eq!(sel.page(), 1);
        assert_eq!(sel.query(), Some("matrix"));
    }

    #[test]
    fn repeating_the_same_query_keeps_the_page() {
        let mut sel = selection();
        sel.set_query("matrix");
        sel.apply_total_pages(20);
        sel.set_page(3);
        sel.set_query("matrix");
        assert_eq!(sel.page(), 3);
    }

    #[test]
    fn category_change_clears_query_and_resets_page() {
        let mut sel = selection();
        sel.set_query("matrix");
        sel.apply_total_pages(20);
        sel.set_page(4);
        sel.set_category(ListCategory::TopRated);
        assert_eq!(sel.category(), ListCategory::TopRated);
        assert_eq!(sel.query(), None);
        assert_eq!(sel.page(), 1);
    }

    #[test]
    fn whitespace_query_is_not_a_search() {
        let mut sel = selection();
        sel.set_query("   ");
        assert!(!sel.is_searching());
        assert_eq!(sel.query(), None);
    }

    #[test]
    fn total_pages_clamps_to_the_catalog_cap() {
        let mut sel = selection();
        sel.apply_total_pages(9817);
        assert_eq!(sel.total_pages(), 500);

        sel.apply_total_pages(0);
        assert_eq!(sel.total_pages(), 1);
    }

    #[test]
    fn page_cursor_clamps_into_bounds() {
        let mut sel = selection();
        sel.apply_total_pages(3);

        assert!(!sel.prev_page());
        assert!(sel.next_page());
        assert!(sel.next_page());
        assert_eq!(sel.page(), 3);
        assert!(!sel.next_page());

        assert!(sel.set_page(1));
        assert!(!sel.set_page(0));
        assert_eq!(sel.page(), 1);
        assert!(sel.set_page(99));
        assert_eq!(sel.page(), 3);
    }

    #[test]
    fn shrinking_total_pages_pulls_the_cursor_back() {
        let mut sel = selection();
        sel.apply_total_pages(10);
        sel.set_page(10);
        sel.apply_total_pages(4);
        assert_eq!(sel.page(), 4);
    }
}
