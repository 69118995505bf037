//! # Cache Layer
//!
//! [`QuoteCache`] is the working set every repository operation runs
//! against: the full collection, hydrated from the durable store once per
//! cache instance and treated as the source of truth afterwards. The store
//! is never re-consulted after hydration, so an external change to the blob
//! is not observed until a new cache is built.
//!
//! Mutations update the collection synchronously and *schedule* a durable
//! write instead of performing one: a snapshot of the collection is handed
//! to a background writer thread, keeping the caller's thread free of disk
//! work. The writer collapses a backlog to the most recent snapshot before
//! serializing, so a burst of mutations costs one write of the newest
//! state. The price is a window where a hard crash loses the latest
//! mutation; the previous snapshot on disk stays valid because the store's
//! write is atomic.
//!
//! Write failures never reach the caller. They are logged, and a flush
//! observer supplied at construction can watch outcomes. [`QuoteCache::wait_idle`]
//! blocks until the writer has drained, which is what tests and orderly
//! shutdown want; dropping the cache drains pending writes as well.

use crate::error::{QuotzError, Result};
use crate::model::Quote;
use crate::store::DurableStore;
use log::warn;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

/// Callback invoked by the writer after each flush attempt.
pub type FlushObserver = Box<dyn Fn(std::result::Result<(), &QuotzError>) + Send + Sync>;

/// Whether mutations hand the write to the background writer or perform it
/// inline before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushMode {
    #[default]
    Deferred,
    Eager,
}

enum WriterMsg {
    Flush(Vec<Quote>),
    Shutdown,
}

/// Tracks in-flight flushes so `wait_idle` has something to wait on.
#[derive(Default)]
struct FlushTracker {
    pending: Mutex<usize>,
    idle: Condvar,
}

impl FlushTracker {
    fn enqueued(&self) {
        *self.pending.lock().expect("flush tracker") += 1;
    }

    fn settled(&self, count: usize) {
        let mut pending = self.pending.lock().expect("flush tracker");
        *pending = pending.saturating_sub(count);
        if *pending == 0 {
            self.idle.notify_all();
        }
    }

    fn wait_idle(&self) {
        let mut pending = self.pending.lock().expect("flush tracker");
        while *pending > 0 {
            pending = self.idle.wait(pending).expect("flush tracker");
        }
    }
}

struct Writer {
    tx: Sender<WriterMsg>,
    tracker: Arc<FlushTracker>,
    handle: Option<JoinHandle<()>>,
}

pub struct QuoteCache<S: DurableStore + Send + 'static> {
    store: Arc<Mutex<S>>,
    quotes: Option<Vec<Quote>>,
    writer: Option<Writer>,
    observer: Option<Arc<FlushObserver>>,
}

impl<S: DurableStore + Send + 'static> QuoteCache<S> {
    pub fn new(store: S) -> Self {
        Self::build(store, FlushMode::Deferred, None)
    }

    pub fn with_mode(store: S, mode: FlushMode) -> Self {
        Self::build(store, mode, None)
    }

    pub fn with_flush_observer(store: S, mode: FlushMode, observer: FlushObserver) -> Self {
        Self::build(store, mode, Some(Arc::new(observer)))
    }

    fn build(store: S, mode: FlushMode, observer: Option<Arc<FlushObserver>>) -> Self {
        let store = Arc::new(Mutex::new(store));
        let writer = match mode {
            FlushMode::Deferred => Some(spawn_writer(Arc::clone(&store), observer.clone())),
            FlushMode::Eager => None,
        };
        Self {
            store,
            quotes: None,
            writer,
            observer,
        }
    }

    /// The live collection, hydrating it from the store on first access.
    ///
    /// A read failure or a malformed blob degrades to an empty collection;
    /// neither is surfaced to the caller.
    pub fn ensure(&mut self) -> &mut Vec<Quote> {
        let store = &self.store;
        self.quotes.get_or_insert_with(|| hydrate(store))
    }

    /// Swap in a new collection (delete rebuilds rather than mutating in
    /// place) and schedule a write of it.
    pub fn replace(&mut self, quotes: Vec<Quote>) {
        self.quotes = Some(quotes);
        self.schedule_flush();
    }

    /// Schedule a durable write of the current collection.
    ///
    /// In eager mode the write happens before this returns.
    pub fn schedule_flush(&mut self) {
        let Some(snapshot) = self.quotes.clone() else {
            return;
        };
        match self.writer {
            Some(ref writer) => {
                writer.tracker.enqueued();
                if writer.tx.send(WriterMsg::Flush(snapshot)).is_err() {
                    writer.tracker.settled(1);
                    warn!("writer thread is gone; quote collection not persisted");
                }
            }
            None => {
                let outcome = write_snapshot(&self.store, &snapshot);
                report(&outcome, self.observer.as_deref());
            }
        }
    }

    /// Block until every scheduled write has been attempted.
    pub fn wait_idle(&self) {
        if let Some(ref writer) = self.writer {
            writer.tracker.wait_idle();
        }
    }
}

impl<S: DurableStore + Send + 'static> Drop for QuoteCache<S> {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.tx.send(WriterMsg::Shutdown);
            if let Some(handle) = writer.handle.take() {
                let _ = handle.join();
            }
        }
    }
}

fn hydrate<S: DurableStore>(store: &Arc<Mutex<S>>) -> Vec<Quote> {
    let payload = match store.lock() {
        Ok(guard) => guard.read(),
        Err(_) => Err(QuotzError::Store("store lock poisoned".to_string())),
    };
    match payload {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("stored quote collection is malformed, starting empty: {e}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("could not read stored quote collection, starting empty: {e}");
            Vec::new()
        }
    }
}

fn spawn_writer<S: DurableStore + Send + 'static>(
    store: Arc<Mutex<S>>,
    observer: Option<Arc<FlushObserver>>,
) -> Writer {
    let (tx, rx) = mpsc::channel();
    let tracker = Arc::new(FlushTracker::default());
    let worker_tracker = Arc::clone(&tracker);
    let handle = std::thread::spawn(move || {
        writer_loop(rx, store, worker_tracker, observer);
    });
    Writer {
        tx,
        tracker,
        handle: Some(handle),
    }
}

fn writer_loop<S: DurableStore>(
    rx: Receiver<WriterMsg>,
    store: Arc<Mutex<S>>,
    tracker: Arc<FlushTracker>,
    observer: Option<Arc<FlushObserver>>,
) {
    while let Ok(msg) = rx.recv() {
        let mut snapshot = match msg {
            WriterMsg::Flush(s) => s,
            WriterMsg::Shutdown => break,
        };

        // Collapse whatever queued up behind this message: only the newest
        // snapshot needs to reach the store.
        let mut drained = 1;
        let mut shutdown = false;
        while let Ok(next) = rx.try_recv() {
            match next {
                WriterMsg::Flush(s) => {
                    snapshot = s;
                    drained += 1;
                }
                WriterMsg::Shutdown => {
                    shutdown = true;
                    break;
                }
            }
        }

        let outcome = write_snapshot(&store, &snapshot);
        report(&outcome, observer.as_deref());
        tracker.settled(drained);

        if shutdown {
            break;
        }
    }
}

fn write_snapshot<S: DurableStore>(store: &Arc<Mutex<S>>, quotes: &[Quote]) -> Result<()> {
    let payload = serde_json::to_string(quotes)?;
    let mut guard = store
        .lock()
        .map_err(|_| QuotzError::Store("store lock poisoned".to_string()))?;
    guard.write(&payload)
}

fn report(outcome: &Result<()>, observer: Option<&FlushObserver>) {
    if let Err(e) = outcome {
        warn!("quote collection write failed: {e}");
    }
    if let Some(obs) = observer {
        obs(outcome.as_ref().map(|_| ()));
    }
}
