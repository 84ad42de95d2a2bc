use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::{
    fs::File,
    io::{AsyncBufRead, AsyncBufReadExt, BufReader, Split},
    time::Instant,
};
use tracing::{debug, info, warn};

use crate::trie::Trie;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Could not open dictionary {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading dictionary: {}", .0)]
    Read(#[from] std::io::Error),
}

/// A lazy sequence of dictionary words.
#[async_trait::async_trait]
pub trait WordSource {
    /// Returns the next word, or `None` once the source is exhausted.
    async fn next_word(&mut self) -> Result<Option<String>, DictionaryError>;
}

/// Yields one lowercased word per line of the underlying reader.
///
/// Lines are passed through as they are apart from case folding and the line
/// terminator: no trimming, no deduplication. Bytes that are not valid UTF-8
/// become U+FFFD, which the trie rejects like any other non-letter.
#[derive(Debug)]
pub struct LineSource<R> {
    lines: Split<R>,
}

impl<R: AsyncBufRead + Unpin> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
        }
    }
}

impl LineSource<BufReader<File>> {
    pub async fn open(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path)
            .await
            .map_err(|source| DictionaryError::Open {
                path: path.to_owned(),
                source,
            })?;
        debug!("Opened dictionary {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> WordSource for LineSource<R> {
    async fn next_word(&mut self) -> Result<Option<String>, DictionaryError> {
        let Some(mut line) = self.lines.next_segment().await? else {
            return Ok(None);
        };
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(String::from_utf8_lossy(&line).to_lowercase()))
    }
}

/// Builds a trie from every word `source` produces.
pub async fn load<S>(source: &mut S) -> Result<Trie, DictionaryError>
where
    S: WordSource + Send + ?Sized,
{
    let start = Instant::now();
    let mut trie = Trie::new();
    let mut lines = 0usize;
    while let Some(word) = source.next_word().await? {
        trie.insert(&word);
        lines += 1;
    }

    let words = trie.word_count();
    if words == 0 {
        warn!("Dictionary produced no usable words from {} lines", lines);
    }
    info!(
        "Loaded {} words ({} nodes) from {} lines in {} ms",
        words,
        trie.node_count(),
        lines,
        start.elapsed().as_millis()
    );
    Ok(trie)
}

/// Opens the dictionary at `path` and builds a trie from it.
pub async fn load_path(path: &Path) -> Result<Trie, DictionaryError> {
    let mut source = LineSource::open(path).await?;
    load(&mut source).await
}
