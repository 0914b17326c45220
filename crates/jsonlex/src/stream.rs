//! Push-model token stream: the lexer runs on a worker thread.
//!
//! Tokens are handed over through a zero-capacity rendezvous channel, so the
//! worker is never more than one token ahead of the consumer. The input is
//! moved into shared storage and every [`StreamToken`] keeps a handle to it;
//! token values remain views into the original bytes.
//!
//! A consumer that stops early does not leak the worker: cancelling or
//! dropping the stream raises a stop flag and disconnects the channel, which
//! wakes a worker blocked in `send`. The worker is joined on drop.

use std::fmt;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use jsonlex_core::{Lexer, LexerOptions, Span, TokenKind};
use tracing::{debug, trace};

use crate::{Error, Result};

/// Token delivered by a [`TokenStream`].
#[derive(Clone)]
pub struct StreamToken {
    pub kind: TokenKind,
    pub span: Span,
    source: Arc<[u8]>,
}

impl StreamToken {
    /// The token's bytes, borrowed from the stream's input buffer.
    pub fn value(&self) -> &[u8] {
        &self.source[self.span.to_range()]
    }
}

impl PartialEq for StreamToken {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.span == other.span && self.value() == other.value()
    }
}

impl Eq for StreamToken {}

impl fmt::Debug for StreamToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}",
            self.kind,
            String::from_utf8_lossy(self.value()),
            self.span
        )
    }
}

/// Lexer running on a worker thread, consumed as an iterator.
pub struct TokenStream {
    receiver: Option<Receiver<StreamToken>>,
    cancelled: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// Start lexing `input` on a new worker thread.
    pub fn spawn(input: impl Into<Arc<[u8]>>, options: LexerOptions) -> Result<Self> {
        let source: Arc<[u8]> = input.into();
        let (sender, receiver) = channel::bounded(0);
        let cancelled = Arc::new(AtomicBool::new(false));

        let worker = thread::Builder::new()
            .name("jsonlex-worker".to_string())
            .spawn({
                let cancelled = Arc::clone(&cancelled);
                move || produce(&source, options, &sender, &cancelled)
            })
            .map_err(Error::Spawn)?;

        Ok(Self {
            receiver: Some(receiver),
            cancelled,
            worker: Some(worker),
        })
    }

    /// Read `reader` to the end, then stream its bytes.
    pub fn from_reader<R: Read>(mut reader: R, options: LexerOptions) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::spawn(buf, options)
    }

    /// Stop the worker. No further tokens are delivered.
    pub fn cancel(&mut self) {
        if self.receiver.is_some() {
            debug!("token stream cancelled");
        }
        self.cancelled.store(true, Ordering::Release);
        // Disconnecting wakes a worker blocked in `send`.
        self.receiver = None;
    }

    /// Drain every remaining token and wait for the worker to exit.
    pub fn collect_tokens(mut self) -> Result<Vec<StreamToken>> {
        let tokens: Vec<_> = self.by_ref().collect();
        self.join()?;
        Ok(tokens)
    }

    fn join(&mut self) -> Result<()> {
        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| Error::WorkerPanicked),
            None => Ok(()),
        }
    }
}

impl Iterator for TokenStream {
    type Item = StreamToken;

    fn next(&mut self) -> Option<StreamToken> {
        let token = self.receiver.as_ref()?.recv().ok();
        if token.is_none() {
            // Worker finished and dropped its sender.
            self.receiver = None;
        }
        token
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.cancel();
        if self.join().is_err() {
            debug!("lexer worker panicked before drop");
        }
    }
}

/// Worker body: lex `source` and hand each token to the consumer.
fn produce(
    source: &Arc<[u8]>,
    options: LexerOptions,
    sender: &Sender<StreamToken>,
    cancelled: &AtomicBool,
) {
    debug!(len = source.len(), "lexer worker started");
    let mut sent = 0usize;
    for token in Lexer::with_options(&source[..], options) {
        if cancelled.load(Ordering::Acquire) {
            debug!(sent, "lexer worker stopped by cancel");
            return;
        }
        let item = StreamToken {
            kind: token.kind,
            span: token.span,
            source: Arc::clone(source),
        };
        if sender.send(item).is_err() {
            debug!(sent, "consumer disconnected");
            return;
        }
        sent += 1;
        trace!(sent, "token delivered");
    }
    debug!(sent, "lexer worker finished");
}

#[cfg(test)]
mod tests;
