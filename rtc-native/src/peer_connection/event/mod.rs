use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use arc_swap::ArcSwapOption;

use crate::native::observer::ObserverMessage;
use crate::native::PeerObserver;
use crate::peer_connection::transport::ice::candidate::RTCIceCandidateInit;
use shared::error::{Error, Result};

/// Handler for locally gathered ICE candidates. `None` marks the end of
/// gathering.
pub type OnIceCandidateHdlrFn = Box<dyn FnMut(Option<RTCIceCandidateInit>) + Send + 'static>;

type HandlerSlot = Arc<ArcSwapOption<Mutex<OnIceCandidateHdlrFn>>>;

/// IceCandidateDispatcher moves native candidate callbacks onto a thread
/// owned by the peer connection.
///
/// The native engine only ever enqueues through a [`PeerObserver`]. The
/// dispatcher thread drains the queue in order and calls whichever handler
/// is registered at delivery time.
pub(crate) struct IceCandidateDispatcher {
    handler: HandlerSlot,
    tx: Sender<ObserverMessage>,
    worker: Option<JoinHandle<()>>,
}

impl IceCandidateDispatcher {
    pub(crate) fn start() -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let handler: HandlerSlot = Arc::new(ArcSwapOption::empty());

        let worker_handler = Arc::clone(&handler);
        let worker = thread::Builder::new()
            .name("rtc-ice-candidates".to_owned())
            .spawn(move || dispatch(rx, worker_handler))
            .map_err(|err| Error::Other(format!("spawn ice candidate dispatcher: {err}")))?;

        Ok(IceCandidateDispatcher {
            handler,
            tx,
            worker: Some(worker),
        })
    }

    pub(crate) fn observer(&self) -> PeerObserver {
        PeerObserver::new(self.tx.clone())
    }

    /// set_handler replaces the current handler. Candidates already being
    /// delivered finish on the old one.
    pub(crate) fn set_handler(&self, f: OnIceCandidateHdlrFn) {
        self.handler.store(Some(Arc::new(Mutex::new(f))));
    }

    /// stop lets queued candidates drain, then ends the dispatcher thread.
    pub(crate) fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        if self.tx.send(ObserverMessage::Shutdown).is_err() {
            log::trace!("ice candidate dispatcher already exited");
        }

        // A handler that closes its own connection runs on the worker.
        if worker.thread().id() == thread::current().id() {
            return;
        }
        if worker.join().is_err() {
            log::error!("ice candidate dispatcher panicked");
        }
    }
}

impl Drop for IceCandidateDispatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn dispatch(rx: Receiver<ObserverMessage>, handler: HandlerSlot) {
    for message in rx {
        let candidate = match message {
            ObserverMessage::IceCandidate(candidate) => candidate,
            ObserverMessage::Shutdown => break,
        };

        let Some(current) = handler.load_full() else {
            log::trace!("no ice candidate handler, dropping {candidate:?}");
            continue;
        };
        let guard = current.lock();
        match guard {
            Ok(mut f) => {
                log::debug!("delivering ice candidate {candidate:?}");
                f(candidate);
            }
            Err(err) => log::error!("ice candidate handler unusable: {err}"),
        };
    }
    log::trace!("ice candidate dispatcher stopped");
}
