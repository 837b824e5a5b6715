use crate::issues::models::IssueList;
use crate::issues::query::IssueQuery;

pub struct SearchState {
    pub search_mode: bool,
    pub search_query: String,
    pub match_count: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            search_mode: false,
            search_query: String::new(),
            match_count: 0,
        }
    }

    pub fn enter_search_mode(&mut self, current_query: &str, issue_list: &IssueList) {
        self.search_mode = true;
        self.search_query = current_query.to_string();
        self.update_match_count(issue_list);
    }

    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
        self.match_count = 0;
    }

    pub fn confirm_search(&mut self) -> String {
        self.search_mode = false;
        self.match_count = 0;
        std::mem::take(&mut self.search_query)
    }

    pub fn insert_char(&mut self, c: char, issue_list: &IssueList) {
        self.search_query.push(c);
        self.update_match_count(issue_list);
    }

    pub fn backspace(&mut self, issue_list: &IssueList) {
        if self.search_query.pop().is_some() {
            self.update_match_count(issue_list);
        }
    }

    fn update_match_count(&mut self, issue_list: &IssueList) {
        let query = IssueQuery::parse(&self.search_query);
        self.match_count = issue_list
            .issues
            .iter()
            .filter(|issue| query.matches(issue))
            .count();
    }
}
