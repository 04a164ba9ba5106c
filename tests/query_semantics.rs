use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use bitdex::{Config, Document, Index, NullStore, Query};
use bitdex::analysis::tokenizer::tokenize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VOCABULARY: [&str; 8] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];

fn external_ids(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.external_id.as_str()).collect()
}

fn ids(index: &Index, query: &Query) -> BTreeSet<u32> {
    index.query_ids(query).iter().collect()
}

/// Sequential id assignment so results are comparable to submission order.
fn ordered_index() -> Index {
    Index::new(Config::default().with_tokenize_workers(1), Arc::new(NullStore)).unwrap()
}

fn random_corpus(index: &Index, seed: u64, docs: usize) -> HashMap<String, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut corpus = HashMap::new();
    for i in 0..docs {
        let len = rng.gen_range(0..6);
        let content: Vec<&str> = (0..len).map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())]).collect();
        let content = content.join(" ");
        index.add_document(i.to_string(), content.clone()).unwrap();
        corpus.insert(i.to_string(), content);
    }
    index.wait_for_indexing();
    corpus
}

#[test]
fn word_query_scenario() {
    let index = ordered_index();
    index.add_document("1", "titi toto tutu").unwrap();
    index.add_document("2", "hello world").unwrap();
    index.add_document("3", "hello toto").unwrap();
    index.wait_for_indexing();

    assert_eq!(external_ids(&index.query(&Query::word("hello"))), vec!["2", "3"]);
    assert_eq!(index.query(&Query::or(Query::word("hello"), Query::word("titi"))).len(), 3);
    assert_eq!(
        external_ids(&index.query(&Query::and(Query::word("hello"), Query::word("world")))),
        vec!["2"]
    );
}

#[test]
fn word_query_matches_tokenizer_output() {
    let index = Index::new(Config::default(), Arc::new(NullStore)).unwrap();
    let corpus = random_corpus(&index, 7, 200);

    for token in VOCABULARY {
        let mut expected: Vec<String> = corpus
            .iter()
            .filter(|(_, content)| tokenize(content).iter().any(|t| t == token))
            .map(|(id, _)| id.clone())
            .collect();
        expected.sort();

        let mut got: Vec<String> = index
            .query(&Query::word(token))
            .into_iter()
            .map(|d| d.external_id)
            .collect();
        got.sort();

        assert_eq!(got, expected, "token {}", token);
    }
}

#[test]
fn and_or_are_set_operations() {
    let index = Index::new(Config::default(), Arc::new(NullStore)).unwrap();
    random_corpus(&index, 11, 150);

    let a = Query::word("alpha");
    let b = Query::word("beta");
    let c = Query::word("gamma");
    let (sa, sb) = (ids(&index, &a), ids(&index, &b));

    let and = ids(&index, &Query::and(a.clone(), b.clone()));
    let or = ids(&index, &Query::or(a.clone(), b.clone()));
    assert_eq!(and, sa.intersection(&sb).copied().collect::<BTreeSet<u32>>());
    assert_eq!(or, sa.union(&sb).copied().collect::<BTreeSet<u32>>());

    // commutative
    assert_eq!(and, ids(&index, &Query::and(b.clone(), a.clone())));
    assert_eq!(or, ids(&index, &Query::or(b.clone(), a.clone())));

    // associative
    assert_eq!(
        ids(&index, &Query::and(Query::and(a.clone(), b.clone()), c.clone())),
        ids(&index, &Query::and(a.clone(), Query::and(b.clone(), c.clone())))
    );
    assert_eq!(
        ids(&index, &Query::or(Query::or(a.clone(), b.clone()), c.clone())),
        ids(&index, &Query::or(a, Query::or(b, c)))
    );
}

#[test]
fn double_negation_is_identity() {
    let index = Index::new(Config::default(), Arc::new(NullStore)).unwrap();
    random_corpus(&index, 3, 100);

    for token in ["alpha", "theta", "not-a-word"] {
        let word = Query::word(token);
        assert_eq!(ids(&index, &Query::not(Query::not(word.clone()))), ids(&index, &word));
    }
}

#[test]
fn not_covers_documents_without_any_word() {
    let index = ordered_index();
    index.add_document("a", "one").unwrap();
    index.add_document("b", "...").unwrap();
    index.add_document("c", "").unwrap();
    index.wait_for_indexing();

    // 1 word in the dictionary, 3 documents: every doc but "a" is in the complement.
    assert_eq!(index.stats().word_count, 1);
    assert_eq!(external_ids(&index.query(&Query::not(Query::word("one")))), vec!["b", "c"]);
}

#[test]
fn exact_query_is_conjunction() {
    let index = ordered_index();
    index.add_document("1", "the quick brown fox").unwrap();
    index.add_document("2", "the quick red fox").unwrap();
    index.add_document("3", "the slow brown dog").unwrap();
    index.wait_for_indexing();

    assert_eq!(external_ids(&index.query(&Query::exact(["quick", "brown", "fox"]))), vec!["1"]);
    assert_eq!(external_ids(&index.query(&Query::exact(["the", "brown"]))), vec!["1", "3"]);
    assert!(index.query(&Query::exact(["the", "quick", "dog"])).is_empty());
}

#[test]
fn documents_by_ids_is_ascending_and_within_input() {
    let index = Index::new(Config::default(), Arc::new(NullStore)).unwrap();
    random_corpus(&index, 5, 50);

    let input: roaring::RoaringBitmap = [40u32, 3, 17, 3, 999].into_iter().collect();
    let docs = index.documents_by_ids(&input);
    let got: Vec<u32> = docs.iter().map(|d| d.id.value()).collect();

    assert_eq!(got, vec![3, 17, 40]);
    assert!(got.windows(2).all(|w| w[0] < w[1]));
}
