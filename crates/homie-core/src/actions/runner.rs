//! Subprocess execution with a timeout and bounded output capture.

use std::{collections::VecDeque, io, process::Stdio, time::Duration};

use thiserror::Error;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::Command,
};

/// Bytes of stdout/stderr an action run keeps per stream.
pub const OUTPUT_LIMIT: usize = 4000;

const READ_CHUNK: usize = 8192;

/// What a finished child left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `-1` when terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Executable not found: {program}")]
    NotFound { program: String },
    /// The timeout elapsed; the child has been killed
    #[error("Command timed out")]
    Timeout,
    #[error("Command execution error: {0}")]
    Io(#[from] io::Error),
}

/// Runs `argv` directly (no shell), waits up to `timeout`, and keeps the
/// last `output_limit` bytes of each stream.
///
/// Both pipes are drained while the child runs, so memory stays bounded by
/// `output_limit` no matter how much the child writes.
///
/// # Errors
///
/// Returns [`CommandError::NotFound`] when the program does not exist,
/// [`CommandError::Timeout`] when the deadline passes, and
/// [`CommandError::Io`] for any other spawn or wait failure.
pub async fn run_command(
    argv: &[String],
    timeout: Duration,
    output_limit: usize,
) -> Result<CommandOutput, CommandError> {
    let (program, args) = argv.split_first().ok_or(CommandError::Empty)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound {
                program: program.clone(),
            },
            _ => CommandError::Io(e),
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let collect = async {
        tokio::try_join!(
            child.wait(),
            read_tail(stdout, output_limit),
            read_tail(stderr, output_limit),
        )
    };

    // On timeout the child is dropped with this frame, which kills it.
    let (status, stdout, stderr) = tokio::time::timeout(timeout, collect)
        .await
        .map_err(|_| CommandError::Timeout)??;

    Ok(CommandOutput {
        exit_code: status.code().unwrap_or(-1),
        stdout: tail(&stdout, output_limit),
        stderr: tail(&stderr, output_limit),
    })
}

/// Drains `reader`, keeping only its last `limit` bytes.
async fn read_tail<R: AsyncRead + Unpin>(reader: Option<R>, limit: usize) -> io::Result<Vec<u8>> {
    let Some(mut reader) = reader else {
        return Ok(Vec::new());
    };
    let mut kept = VecDeque::with_capacity(limit.min(READ_CHUNK));
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        kept.extend(&chunk[..n]);
        let excess = kept.len().saturating_sub(limit);
        kept.drain(..excess);
    }
    Ok(kept.into())
}

/// Last `limit` bytes as text, starting on a UTF-8 boundary.
pub fn tail(bytes: &[u8], limit: usize) -> String {
    let mut start = bytes.len().saturating_sub(limit);
    while start < bytes.len() && (bytes[start] & 0xC0) == 0x80 {
        start += 1;
    }
    String::from_utf8_lossy(&bytes[start..]).into_owned()
}
