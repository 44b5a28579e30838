//! A scripted in-process engine for exercising RTCPeerConnection without a
//! real native library.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use rtc_native::data_channel::init::RTCDataChannelInit;
use rtc_native::native::{
    sys, NativeConfiguration, NativeEngine, NativeHandle, PeerObserver, StatusCode,
};
use rtc_native::peer_connection::transport::RTCIceCandidateInit;

pub const OFFER_SDP: &str = "v=0\r\n\
o=- 4596489990601351948 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
a=group:BUNDLE 0\r\n\
m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n\
c=IN IP4 0.0.0.0\r\n\
a=ice-ufrag:offr\r\n\
a=ice-pwd:offerpasswordofferpassword\r\n\
a=ice-options:trickle\r\n\
a=mid:0\r\n";

pub const ANSWER_SDP: &str = "v=0\r\n\
o=- 8203476215387321871 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
a=group:BUNDLE 0\r\n\
m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n\
c=IN IP4 0.0.0.0\r\n\
a=ice-ufrag:answ\r\n\
a=ice-pwd:answerpasswordanswerpasswd\r\n\
a=mid:0\r\n";

pub fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// What the engine answers to each call. Every field defaults to success.
#[derive(Debug, Clone)]
pub struct Script {
    pub initialize: bool,
    pub config_status: StatusCode,
    pub offer: bool,
    pub answer: bool,
    pub local_status: StatusCode,
    pub remote_status: StatusCode,
    pub deserialize: bool,
    pub data_channel: bool,
    pub offer_sdp: String,
    pub answer_sdp: String,
}

impl Default for Script {
    fn default() -> Self {
        Script {
            initialize: true,
            config_status: sys::STATUS_OK,
            offer: true,
            answer: true,
            local_status: sys::STATUS_OK,
            remote_status: sys::STATUS_OK,
            deserialize: true,
            data_channel: true,
            offer_sdp: OFFER_SDP.to_owned(),
            answer_sdp: ANSWER_SDP.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetLocal(NativeHandle, NativeHandle),
    SetRemote(NativeHandle, NativeHandle),
    Deserialize(String, String),
    DataChannel(NativeHandle, String, RTCDataChannelInit),
}

#[derive(Default)]
pub struct FakeEngine {
    script: Mutex<Script>,
    next: AtomicU64,
    observers: Mutex<HashMap<NativeHandle, PeerObserver>>,
    sdps: Mutex<HashMap<NativeHandle, String>>,
    initialized: Mutex<Vec<NativeHandle>>,
    released: Mutex<Vec<NativeHandle>>,
    configs: Mutex<Vec<NativeConfiguration>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(FakeEngine {
            script: Mutex::new(Script::default()),
            ..Default::default()
        })
    }

    pub fn with_script(script: Script) -> Arc<Self> {
        Arc::new(FakeEngine {
            script: Mutex::new(script),
            ..Default::default()
        })
    }

    pub fn script(&self, f: impl FnOnce(&mut Script)) {
        f(&mut self.script.lock().unwrap());
    }

    pub fn initialized(&self) -> Vec<NativeHandle> {
        self.initialized.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<NativeHandle> {
        self.released.lock().unwrap().clone()
    }

    pub fn configs(&self) -> Vec<NativeConfiguration> {
        self.configs.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_peer(&self) -> NativeHandle {
        *self.initialized.lock().unwrap().last().unwrap()
    }

    /// gather reports `candidates` and then the end of gathering for `peer`
    /// from an engine-owned thread. Does nothing once the peer is released.
    pub fn gather(&self, peer: NativeHandle, candidates: Vec<RTCIceCandidateInit>) -> JoinHandle<()> {
        let observer = self.observers.lock().unwrap().get(&peer).cloned();
        thread::Builder::new()
            .name("fake-engine-signaling".to_owned())
            .spawn(move || {
                let Some(observer) = observer else {
                    return;
                };
                for candidate in candidates {
                    observer.on_ice_candidate(candidate);
                }
                observer.on_ice_gathering_complete();
            })
            .unwrap()
    }

    fn allocate(&self) -> NativeHandle {
        NativeHandle::from_raw(self.next.fetch_add(1, Ordering::SeqCst) + 0x1000).unwrap()
    }

    fn store_sdp(&self, sdp: String) -> NativeHandle {
        let handle = self.allocate();
        self.sdps.lock().unwrap().insert(handle, sdp);
        handle
    }

    fn assert_live(&self, peer: NativeHandle) {
        assert!(
            !self.released.lock().unwrap().contains(&peer),
            "native peer {peer} used after release"
        );
    }
}

impl NativeEngine for FakeEngine {
    fn initialize_peer(&self, observer: PeerObserver) -> Option<NativeHandle> {
        if !self.script.lock().unwrap().initialize {
            return None;
        }
        let peer = self.allocate();
        self.observers.lock().unwrap().insert(peer, observer);
        self.initialized.lock().unwrap().push(peer);
        Some(peer)
    }

    fn create_peer_connection(&self, peer: NativeHandle, config: &NativeConfiguration) -> StatusCode {
        self.assert_live(peer);
        self.configs.lock().unwrap().push(config.clone());
        self.script.lock().unwrap().config_status
    }

    fn create_offer(&self, peer: NativeHandle) -> Option<NativeHandle> {
        self.assert_live(peer);
        let script = self.script.lock().unwrap().clone();
        script.offer.then(|| self.store_sdp(script.offer_sdp))
    }

    fn create_answer(&self, peer: NativeHandle) -> Option<NativeHandle> {
        self.assert_live(peer);
        let script = self.script.lock().unwrap().clone();
        script.answer.then(|| self.store_sdp(script.answer_sdp))
    }

    fn set_local_description(&self, peer: NativeHandle, sdp: NativeHandle) -> StatusCode {
        self.assert_live(peer);
        self.calls.lock().unwrap().push(Call::SetLocal(peer, sdp));
        self.script.lock().unwrap().local_status
    }

    fn set_remote_description(&self, peer: NativeHandle, sdp: NativeHandle) -> StatusCode {
        self.assert_live(peer);
        self.calls.lock().unwrap().push(Call::SetRemote(peer, sdp));
        self.script.lock().unwrap().remote_status
    }

    fn serialize_sdp(&self, sdp: NativeHandle) -> String {
        self.sdps
            .lock()
            .unwrap()
            .get(&sdp)
            .cloned()
            .unwrap_or_default()
    }

    fn deserialize_sdp(&self, sdp_type: &str, sdp: &str) -> Option<NativeHandle> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Deserialize(sdp_type.to_owned(), sdp.to_owned()));
        if !self.script.lock().unwrap().deserialize {
            return None;
        }
        Some(self.store_sdp(sdp.to_owned()))
    }

    fn create_data_channel(
        &self,
        peer: NativeHandle,
        label: &str,
        init: &RTCDataChannelInit,
    ) -> Option<NativeHandle> {
        self.assert_live(peer);
        self.calls
            .lock()
            .unwrap()
            .push(Call::DataChannel(peer, label.to_owned(), init.clone()));
        if !self.script.lock().unwrap().data_channel {
            return None;
        }
        Some(self.allocate())
    }

    fn release_peer(&self, peer: NativeHandle) {
        self.assert_live(peer);
        self.observers.lock().unwrap().remove(&peer);
        self.released.lock().unwrap().push(peer);
    }
}

pub fn host_candidate(port: u16) -> RTCIceCandidateInit {
    RTCIceCandidateInit {
        candidate: format!("candidate:{port} 1 udp 2130706431 192.168.1.100 {port} typ host"),
        sdp_mid: Some("0".to_owned()),
        sdp_mline_index: Some(0),
        username_fragment: Some("offr".to_owned()),
    }
}
