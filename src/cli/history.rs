/// Stack of successful search terms, shown most recent first.
///
/// Terms are never popped. When a limit is set the oldest term is dropped to
/// make room for a new one.
#[derive(Debug, Default, Clone)]
pub struct SearchHistory {
    terms: Vec<String>,
    limit: Option<usize>,
}

impl SearchHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            terms: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, term: &str) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit
            && self.terms.len() >= limit
        {
            self.terms.remove(0);
        }
        self.terms.push(term.to_string());
    }

    pub fn most_recent_first(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().rev().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
