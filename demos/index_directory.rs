/// Index every file under a directory, then run a query.
///
/// Usage: cargo run --example index_directory -- <dir> [word...]
///
/// Each file becomes one document whose external id is its path. Words given
/// on the command line are combined with AND; without any, the demo prints
/// stats only.

use bitdex::{Config, Index, NullStore, Query};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

const MAX_DOCUMENTS: usize = 50_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let root = PathBuf::from(args.next().unwrap_or_else(|| "./data".to_string()));
    let words: Vec<String> = args.map(|w| w.to_lowercase()).collect();

    let index = Index::new(Config::default(), Arc::new(NullStore))?;

    let start = Instant::now();
    let mut submitted = 0;
    walk(&root, &mut |path| {
        if submitted >= MAX_DOCUMENTS {
            return Ok(());
        }
        // Non-UTF-8 files are indexed lossily rather than skipped.
        let content = String::from_utf8_lossy(&fs::read(path)?).into_owned();
        index.add_document(path.display().to_string(), content)?;
        submitted += 1;
        Ok(())
    })?;
    index.wait_for_indexing();

    let stats = index.stats();
    println!("Indexed {} files in {:?}", submitted, start.elapsed());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    if !words.is_empty() {
        let query = Query::exact(words);
        let results = index.query(&query);
        println!("Results Count: {}", results.len());
        for doc in results.iter().take(20) {
            println!("  [{}] {}", doc.id.value(), doc.external_id);
        }
    }

    index.shutdown();
    Ok(())
}

fn walk(
    dir: &Path,
    visit: &mut dyn FnMut(&Path) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, visit)?;
        } else {
            visit(&path)?;
        }
    }
    Ok(())
}
