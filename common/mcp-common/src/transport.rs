//! Line-delimited JSON transport
//!
//! Reads one request per line, writes one response per line. A line that
//! cannot be parsed is logged and dropped without a response; only end of
//! input (or a broken output stream) ends the loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::Request;
use crate::server::{handle_request, ToolServer};

/// Counters reported when the loop ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    /// Non-blank lines received
    pub lines_read: u64,
    pub responses_written: u64,
    /// Lines that produced no response
    pub lines_dropped: u64,
}

/// Serve requests from `reader` until end of input
///
/// Requests are handled one at a time; each is answered and flushed before
/// the next line is read.
pub async fn serve_lines<S, R, W>(
    server: &S,
    mut reader: R,
    mut writer: W,
) -> std::io::Result<ServeStats>
where
    S: ToolServer + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = ServeStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.lines_read += 1;

        match respond_to_line(server, line) {
            Some(response) => {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
                stats.responses_written += 1;
            }
            None => stats.lines_dropped += 1,
        }
    }

    Ok(stats)
}

/// Handle a single request line, returning the serialized response
///
/// Returns `None` when the line is not a dispatchable request; the reason is
/// logged.
pub fn respond_to_line<S: ToolServer + ?Sized>(server: &S, line: &str) -> Option<String> {
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Dropping request line");
            return None;
        }
    };

    let response = handle_request(server, request);
    match serde_json::to_string(&response) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            None
        }
    }
}
