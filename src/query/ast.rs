use serde::{Deserialize, Serialize};

/// Boolean query over indexed tokens.
///
/// Terms are matched verbatim against the dictionary, which holds the
/// tokenizer's lowercased output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Word(String),                 // Postings of one token
    And(Box<Query>, Box<Query>),  // Intersection
    Or(Box<Query>, Box<Query>),   // Union
    Not(Box<Query>),              // Complement over all assigned ids
    Exact(Vec<String>),           // Documents containing every token
}

impl Query {
    pub fn word(token: impl Into<String>) -> Self {
        Query::Word(token.into())
    }

    pub fn and(left: Query, right: Query) -> Self {
        Query::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Query, right: Query) -> Self {
        Query::Or(Box::new(left), Box::new(right))
    }

    pub fn not(query: Query) -> Self {
        Query::Not(Box::new(query))
    }

    pub fn exact<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Query::Exact(tokens.into_iter().map(Into::into).collect())
    }

    /// Rewrite `Exact` as a left fold of `And` over `Word` nodes.
    /// `None` for an empty token list.
    pub fn conjunction(tokens: &[String]) -> Option<Query> {
        tokens
            .iter()
            .map(|token| Query::word(token.as_str()))
            .reduce(Query::and)
    }
}
