use roaring::RoaringBitmap;
use crate::index::dictionary::WordDictionary;
use crate::query::ast::Query;

/// Evaluates a `Query` against the dictionary's current state.
///
/// `universe` is the number of assigned document ids; `Not` complements
/// against `0..universe`. Evaluation never mutates the dictionary.
pub struct QueryExecutor<'a> {
    words: &'a WordDictionary,
    universe: u32,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(words: &'a WordDictionary, universe: u32) -> Self {
        QueryExecutor { words, universe }
    }

    pub fn execute(&self, query: &Query) -> RoaringBitmap {
        match query {
            Query::Word(token) => self
                .words
                .get(token)
                .map(|word| word.postings())
                .unwrap_or_default(),
            Query::And(left, right) => {
                let mut ids = self.execute(left);
                if ids.is_empty() {
                    return ids;
                }
                ids &= self.execute(right);
                ids
            }
            Query::Or(left, right) => {
                let mut ids = self.execute(left);
                ids |= self.execute(right);
                ids
            }
            Query::Not(inner) => {
                let excluded = self.execute(inner);
                let mut ids = self.all_ids();
                ids -= excluded;
                ids
            }
            Query::Exact(tokens) => match Query::conjunction(tokens) {
                Some(conjunction) => self.execute(&conjunction),
                None => RoaringBitmap::new(),
            },
        }
    }

    fn all_ids(&self) -> RoaringBitmap {
        let mut ids = RoaringBitmap::new();
        ids.insert_range(0..self.universe);
        ids
    }
}
