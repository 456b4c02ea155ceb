//! Server-sent-event framing for `streamGenerateContent?alt=sse`.
//!
//! Each event is a block of `data: …` lines terminated by a blank line.
//! Network reads do not respect event boundaries, so [`SseDecoder`] buffers
//! bytes until a full event is available.  [`decode_events`] lifts the
//! decoder over a byte stream and yields one `data` payload per event.

use std::collections::VecDeque;

use futures::{stream, Stream, StreamExt};

// ---------------------------------------------------------------------------
// SseDecoder
// ---------------------------------------------------------------------------

/// Incremental SSE frame decoder.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
    /// Prefix of `buf` already searched for a terminator.
    scanned: usize,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes; returns the `data` payload of every event completed by
    /// this read.  Events without `data:` lines (comments, keep-alives) are
    /// dropped.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buf
            .extend(bytes.iter().copied().filter(|b| *b != b'\r'));

        let mut events = Vec::new();
        loop {
            // Back up one byte: the terminator may straddle two reads.
            let from = self.scanned.saturating_sub(1);
            let Some(offset) = find_event_end(&self.buf[from..]) else {
                self.scanned = self.buf.len();
                break;
            };
            let end = from + offset;
            let raw: Vec<u8> = self.buf.drain(..end + 2).collect();
            self.scanned = 0;
            if let Some(data) = event_data(&raw[..end]) {
                events.push(data);
            }
        }
        events
    }

    /// Flush a trailing event that was not terminated by a blank line.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buf);
        self.scanned = 0;
        event_data(&rest)
    }
}

fn find_event_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\n\n")
}

fn event_data(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let lines: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.strip_prefix(' ').unwrap_or(data))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// decode_events
// ---------------------------------------------------------------------------

struct DecodeState<S> {
    inner: S,
    decoder: SseDecoder,
    pending: VecDeque<String>,
    done: bool,
}

/// Turn a stream of byte chunks into a stream of SSE `data` payloads.
///
/// A transport error is yielded once and ends the stream.
pub fn decode_events<S, B, E>(inner: S) -> impl Stream<Item = Result<String, E>>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
{
    let state = DecodeState {
        inner,
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        done: false,
    };

    stream::unfold(state, |mut st| async move {
        loop {
            if let Some(data) = st.pending.pop_front() {
                return Some((Ok(data), st));
            }
            if st.done {
                return None;
            }
            match st.inner.next().await {
                Some(Ok(bytes)) => {
                    let events = st.decoder.push(bytes.as_ref());
                    st.pending.extend(events);
                }
                Some(Err(e)) => {
                    st.done = true;
                    return Some((Err(e), st));
                }
                None => {
                    st.done = true;
                    st.pending.extend(st.decoder.finish());
                }
            }
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
