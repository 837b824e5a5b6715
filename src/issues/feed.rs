use super::models::{Issue, IssueList};
use super::query::IssueQuery;

#[derive(Debug, Clone)]
pub struct IssueFeed {
    query: IssueQuery,
    page_size: usize,
    page: usize,
    // Pages appended below `page` by load more.
    extra_pages: usize,
}

impl IssueFeed {
    pub fn new(query: &str, page_size: usize) -> Self {
        Self {
            query: IssueQuery::parse(query),
            page_size: page_size.max(1),
            page: 0,
            extra_pages: 0,
        }
    }

    pub fn query(&self) -> &IssueQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = IssueQuery::parse(query);
        self.page = 0;
        self.extra_pages = 0;
    }

    pub fn matching<'a>(&'a self, issue_list: &'a IssueList) -> impl Iterator<Item = &'a Issue> + 'a {
        issue_list.issues.iter().filter(move |issue| self.query.matches(issue))
    }

    pub fn matching_count(&self, issue_list: &IssueList) -> usize {
        self.matching(issue_list).count()
    }

    pub fn page_count(&self, issue_list: &IssueList) -> usize {
        self.matching_count(issue_list).div_ceil(self.page_size).max(1)
    }

    pub fn visible_issues<'a>(&'a self, issue_list: &'a IssueList) -> Vec<&'a Issue> {
        self.matching(issue_list)
            .skip(self.page * self.page_size)
            .take((1 + self.extra_pages) * self.page_size)
            .collect()
    }

    pub fn visible_ids(&self, issue_list: &IssueList) -> Vec<String> {
        self.visible_issues(issue_list)
            .into_iter()
            .map(|issue| issue.id.clone())
            .collect()
    }

    pub fn has_more(&self, issue_list: &IssueList) -> bool {
        (self.page + 1 + self.extra_pages) * self.page_size < self.matching_count(issue_list)
    }

    pub fn next_page(&mut self, issue_list: &IssueList) -> bool {
        if !self.has_more(issue_list) {
            return false;
        }
        self.page += 1 + self.extra_pages;
        self.extra_pages = 0;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page == 0 && self.extra_pages == 0 {
            return false;
        }
        self.page = self.page.saturating_sub(1);
        self.extra_pages = 0;
        true
    }

    pub fn load_more(&mut self, issue_list: &IssueList) -> bool {
        if !self.has_more(issue_list) {
            return false;
        }
        self.extra_pages += 1;
        true
    }

    pub fn clamp(&mut self, issue_list: &IssueList) {
        let last_page = self.page_count(issue_list) - 1;
        if self.page > last_page {
            self.page = last_page;
            self.extra_pages = 0;
        }
    }
}
