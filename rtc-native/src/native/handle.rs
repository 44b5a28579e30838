use std::sync::Arc;

use shared::error::{Error, Result};

use super::{NativeEngine, NativeHandle, PeerObserver};

/// PeerHandle exclusively owns one native peer.
///
/// The peer is released exactly once: by [`PeerHandle::release`] or, failing
/// that, when the handle is dropped. Once released the raw handle is gone and
/// every accessor reports [`Error::ErrConnectionClosed`].
pub(crate) struct PeerHandle {
    engine: Arc<dyn NativeEngine>,
    raw: Option<NativeHandle>,
}

impl PeerHandle {
    /// allocate asks the engine for a new peer. A null peer means nothing
    /// was allocated and nothing needs releasing.
    pub(crate) fn allocate(engine: Arc<dyn NativeEngine>, observer: PeerObserver) -> Result<Self> {
        let raw = engine
            .initialize_peer(observer)
            .ok_or(Error::ErrInitializationFailed)?;
        log::trace!("allocated native peer {raw}");

        Ok(PeerHandle {
            engine,
            raw: Some(raw),
        })
    }

    pub(crate) fn engine(&self) -> &dyn NativeEngine {
        self.engine.as_ref()
    }

    pub(crate) fn raw(&self) -> Result<NativeHandle> {
        self.raw.ok_or(Error::ErrConnectionClosed)
    }

    pub(crate) fn is_released(&self) -> bool {
        self.raw.is_none()
    }

    /// release gives the peer back to the engine. Returns false when it was
    /// already released.
    pub(crate) fn release(&mut self) -> bool {
        match self.raw.take() {
            Some(raw) => {
                log::trace!("releasing native peer {raw}");
                self.engine.release_peer(raw);
                true
            }
            None => false,
        }
    }
}

impl Drop for PeerHandle {
    fn drop(&mut self) {
        self.release();
    }
}
