use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::{self, AsyncBufReadExt, AsyncRead};
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

/// Where paste content is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    /// Nothing to read; the content is left empty.
    None,
}

impl InputSource {
    /// New pastes read the given file, or stdin when there is none.
    pub fn for_create(file: Option<&Path>) -> Self {
        match file {
            Some(path) => InputSource::File(path.to_owned()),
            None => InputSource::Stdin,
        }
    }

    /// Updates read a file or piped stdin, but never both. Any other
    /// combination selects no source so the content stays untouched.
    pub fn for_update(file: Option<&Path>, piped: bool) -> Self {
        match (file, piped) {
            (Some(path), false) => InputSource::File(path.to_owned()),
            (None, true) => InputSource::Stdin,
            (Some(path), true) => {
                warn!(
                    "both --file '{}' and piped input given, leaving content unchanged",
                    path.display()
                );
                InputSource::None
            }
            (None, false) => InputSource::None,
        }
    }

    pub async fn read_lines(&self) -> ClientResult<Vec<String>> {
        match self {
            InputSource::File(path) => {
                if !fs::try_exists(path).await? {
                    return Err(ClientError::InputNotFound { path: path.clone() });
                }
                let file = fs::File::open(path).await?;
                let lines = read_lines_from(file).await?;
                debug!("read {} lines from {}", lines.len(), path.display());
                Ok(lines)
            }
            InputSource::Stdin => {
                let lines = read_lines_from(io::stdin()).await?;
                debug!("read {} lines from stdin", lines.len());
                Ok(lines)
            }
            InputSource::None => Ok(Vec::new()),
        }
    }
}

/// Whether stdin is a pipe or file rather than an interactive terminal.
pub fn stdin_is_piped() -> bool {
    !std::io::stdin().is_terminal()
}

/// Split a reader into lines, stripping `\n` and `\r\n` terminators.
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
pub async fn read_lines_from<R>(reader: R) -> io::Result<Vec<String>>
where
    R: AsyncRead + Unpin,
{
    let segments: Vec<Vec<u8>> = SplitStream::new(io::BufReader::new(reader).split(b'\n'))
        .collect::<io::Result<Vec<Vec<u8>>>>()
        .await?;

    Ok(segments
        .into_iter()
        .map(|mut line| {
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            String::from_utf8_lossy(&line).into_owned()
        })
        .collect())
}
