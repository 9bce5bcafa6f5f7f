// tests/importer.rs
//
// Bulk import: index walking, coupler mapping, placeholder filtering,
// duplicate tolerance. Offline against fixture pages.
//
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use slf_bot::core::net::Fetch;
use slf_bot::error::{Error, Result};
use slf_bot::importer::{ImportReport, import_all};
use slf_bot::store::AnswerStore;

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("slf_importer_{}_{}.csv", std::process::id(), name));
    let _ = fs::remove_file(&p);
    p
}

struct FixtureFetcher {
    pages: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(p, d)| (p.to_string(), d.to_string()))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, path: &str) -> Result<String> {
        self.calls.borrow_mut().push(path.to_string());
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| Error::RemoteFetch(format!("no fixture for {path}")))
    }
}

const INDEX: &str = r#"<html><body>
<h3><a href="/staedte">Städte von A bis Z</a></h3>
<h3><a href="https://www.stadt-land-fluss-online.de/laender">Länder von A bis Z</a></h3>
<h3><a href="/fluesse">Flüsse von A bis Z</a></h3>
<h3><a href="/namen">Namen von A bis Z</a></h3>
</body></html>"#;

const STAEDTE: &str = r#"<html><body>
<ul>
<li>Städte mit B: Berlin</li>
<li>Städte mit C: Es gibt keine Städte mit C</li>
<li>Städte mit D: Dortmund</li>
</ul>
</body></html>"#;

const LAENDER: &str = r#"<html><body>
<ul>
<li>Länder mit B: Brasilien</li>
</ul>
</body></html>"#;

const FLUESSE: &str = r#"<html><body>
<ul>
<li>Flüsse mit D: Donau</li>
</ul>
</body></html>"#;

fn fixtures() -> FixtureFetcher {
    FixtureFetcher::new(&[
        ("/", INDEX),
        ("/staedte", STAEDTE),
        ("/laender", LAENDER),
        ("/fluesse", FLUESSE),
    ])
}

#[test]
fn imports_all_coupled_categories() {
    let mut store = AnswerStore::load(tmp("all")).unwrap();
    let fetcher = fixtures();

    let report = import_all(&mut store, &fetcher).unwrap();
    assert_eq!(report, ImportReport { imported: 4, skipped: 0 });

    assert!(store.has_answer("Stadt", 'B', "Berlin"));
    assert!(store.has_answer("Stadt", 'D', "Dortmund"));
    assert!(store.has_answer("Land", 'B', "Brasilien"));
    assert!(store.has_answer("Fluss", 'D', "Donau"));

    // only the first three index sections are listing pages
    assert!(!fetcher.calls.borrow().iter().any(|p| p == "/namen"));
}

#[test]
fn skips_the_no_entries_placeholder() {
    let mut store = AnswerStore::load(tmp("placeholder")).unwrap();
    import_all(&mut store, &fixtures()).unwrap();

    assert!(!store.has_letter("Stadt", 'C'));
}

#[test]
fn duplicates_are_counted_not_fatal() {
    let mut store = AnswerStore::load(tmp("dups")).unwrap();
    store.add_answer("Stadt", 'B', "Berlin").unwrap();

    let report = import_all(&mut store, &fixtures()).unwrap();
    assert_eq!(report, ImportReport { imported: 3, skipped: 1 });
    assert_eq!(store.get_answers("Stadt", 'B').unwrap(), ["Berlin"]);
}

#[test]
fn import_does_not_save_on_its_own() {
    let path = tmp("nosave");
    let mut store = AnswerStore::load(&path).unwrap();
    import_all(&mut store, &fixtures()).unwrap();

    let on_disk = AnswerStore::load(&path).unwrap();
    assert!(on_disk.is_empty(), "import must leave saving to the caller");

    store.save().unwrap();
    let on_disk = AnswerStore::load(&path).unwrap();
    assert_eq!(on_disk.len(), 4);
}

#[test]
fn a_failing_listing_fetch_aborts_the_import() {
    let mut store = AnswerStore::load(tmp("abort")).unwrap();
    // index promises /staedte but the page is unreachable
    let fetcher = FixtureFetcher::new(&[("/", INDEX)]);

    assert!(matches!(
        import_all(&mut store, &fetcher).unwrap_err(),
        Error::RemoteFetch(_)
    ));
}
