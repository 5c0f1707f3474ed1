/*!
Shared test fixtures. Only compiled under `#[cfg(test)]`; not part of the
public API.
*/

#![cfg(test)]

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static FIXTURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A temporary on-disk XML file, removed when dropped. `load`'s contract is
/// a filename, so exercising it end to end needs a real path.
pub struct TempXml {
    path: PathBuf,
}

impl TempXml {
    pub fn new(contents: &str) -> Self {
        let nonce = FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let mut path = std::env::temp_dir();
        path.push(format!("xquery-core-test-{millis}-{nonce}.xml"));
        fs::write(&path, contents).unwrap();
        Self { path }
    }

    pub fn file_ref(&self) -> &str {
        self.path.to_str().unwrap()
    }
}

impl Drop for TempXml {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// The `books.xml` fixture used throughout the end-to-end scenarios: a
/// `<library>` with two `<book>` children, each titled `"A"`, with distinct
/// `id` attributes.
pub fn books_fixture() -> TempXml {
    TempXml::new(
        r#"<library>
            <book id="1"><title>A</title></book>
            <book id="2"><title>A</title></book>
        </library>"#,
    )
}
