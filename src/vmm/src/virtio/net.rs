// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Virtio network back-end.
//!
//! TX (queue 1) gathers each chain into one frame, strips the legacy
//! header and hands the payload to the backend on the worker pool. RX
//! (queue 0) is a dedicated reader thread blocking on the backend;
//! frames that fit no posted buffer are dropped and counted.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use log::{debug, warn};

use super::queue::{gather, scatter};
use super::{Activation, Result, VirtioDevice, VIRTIO_ID_NET};
use crate::worker::WorkerPool;

const QUEUE_SIZES: [u16; 2] = [256, 256];
const RX_QUEUE: usize = 0;
const TX_QUEUE: u16 = 1;

/// Legacy, non-mergeable-RX header: 12 zero bytes on this path.
pub const VIRTIO_NET_HDR_LEN: usize = 12;

/// Largest frame we accept from the backend.
const MAX_FRAME: usize = 65550;

/// Device has a MAC address in its config space.
const VIRTIO_NET_F_MAC: u32 = 5;

/// The host side of the NIC: a TAP device in production, a loopback in
/// tests. `recv` blocks until a frame arrives.
pub trait NetBackend: Send + Sync + 'static {
    fn recv(&self, buf: &mut [u8]) -> io::Result<usize>;
    fn send(&self, buf: &[u8]) -> io::Result<usize>;
}

pub struct Net<B: NetBackend> {
    backend: Arc<B>,
    mac: [u8; 6],
    pool: Arc<WorkerPool>,
    active: Option<Activation>,
    rx_stop: Arc<AtomicBool>,
    rx_dropped: Arc<AtomicU64>,
}

impl<B: NetBackend> Net<B> {
    pub fn new(backend: B, mac: [u8; 6], pool: Arc<WorkerPool>) -> Self {
        Net {
            backend: Arc::new(backend),
            mac,
            pool,
            active: None,
            rx_stop: Arc::new(AtomicBool::new(false)),
            rx_dropped: Arc::new(AtomicU64::new(0)),
        }
    }

    fn process_tx(activation: &Activation, backend: &B) {
        let mut signal = false;
        loop {
            if activation.failed() {
                return;
            }
            let popped = activation.queues[usize::from(TX_QUEUE)]
                .lock()
                .unwrap()
                .pop(&activation.mem);
            let chain = match popped {
                Ok(Some(chain)) => chain,
                Ok(None) => break,
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            };
            match gather(&activation.mem, &chain.out) {
                Ok(frame) => {
                    if frame.len() > VIRTIO_NET_HDR_LEN {
                        if let Err(e) = backend.send(&frame[VIRTIO_NET_HDR_LEN..]) {
                            warn!("tx frame dropped: {}", e);
                        }
                    }
                }
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            }
            signal |= activation.retire(usize::from(TX_QUEUE), chain.head, 0);
        }
        if signal {
            activation.interrupt.signal_queue();
        }
    }
}

/// Blocking receive loop; one thread per device, started at activation.
fn rx_loop<B: NetBackend>(
    activation: Activation,
    backend: Arc<B>,
    stop: Arc<AtomicBool>,
    dropped: Arc<AtomicU64>,
) {
    let mut frame = vec![0u8; MAX_FRAME];
    loop {
        let len = match backend.recv(&mut frame) {
            Ok(0) => return,
            Ok(len) => len,
            // Short reads from TAP re-loop.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("net rx loop terminating: {}", e);
                return;
            }
        };
        if stop.load(Ordering::Acquire) || activation.failed() {
            return;
        }
        deliver_frame(&activation, &frame[..len], &dropped);
    }
}

fn deliver_frame(activation: &Activation, frame: &[u8], dropped: &AtomicU64) {
    let popped = activation.queues[RX_QUEUE].lock().unwrap().pop(&activation.mem);
    let chain = match popped {
        Ok(Some(chain)) => chain,
        Ok(None) => {
            let total = dropped.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("rx frame dropped, no buffers ({} so far)", total);
            return;
        }
        Err(e) => {
            activation.fail(&e);
            return;
        }
    };

    let needed = (frame.len() + VIRTIO_NET_HDR_LEN) as u64;
    if chain.in_len() < needed {
        // Frame fits no posted buffer: drop it, hand the buffer back
        // untouched.
        let total = dropped.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("rx frame of {} bytes too large ({} dropped)", frame.len(), total);
        if activation.retire(RX_QUEUE, chain.head, 0) {
            activation.interrupt.signal_queue();
        }
        return;
    }

    let mut packet = vec![0u8; VIRTIO_NET_HDR_LEN + frame.len()];
    packet[VIRTIO_NET_HDR_LEN..].copy_from_slice(frame);
    let written = match scatter(&activation.mem, &chain.input, &packet) {
        Ok(written) => written,
        Err(e) => {
            activation.fail(&e);
            return;
        }
    };
    if activation.retire(RX_QUEUE, chain.head, written) {
        activation.interrupt.signal_queue();
    }
}

impl<B: NetBackend> VirtioDevice for Net<B> {
    fn device_type(&self) -> u32 {
        VIRTIO_ID_NET
    }

    fn queue_sizes(&self) -> &[u16] {
        &QUEUE_SIZES
    }

    fn device_features(&self) -> u32 {
        1 << VIRTIO_NET_F_MAC
    }

    /// Config space: the 6-byte MAC, then a zero status word.
    fn read_config(&self, offset: u64, data: &mut [u8]) {
        for (i, b) in data.iter_mut().enumerate() {
            *b = *self.mac.get(offset as usize + i).unwrap_or(&0);
        }
    }

    fn activate(&mut self, activation: Activation) -> Result<()> {
        self.rx_stop = Arc::new(AtomicBool::new(false));
        let rx_activation = activation.clone();
        let backend = Arc::clone(&self.backend);
        let stop = Arc::clone(&self.rx_stop);
        let dropped = Arc::clone(&self.rx_dropped);
        thread::Builder::new()
            .name("virtio-net-rx".to_string())
            .spawn(move || rx_loop(rx_activation, backend, stop, dropped))?;
        self.active = Some(activation);
        Ok(())
    }

    fn queue_notify(&mut self, queue: u16) {
        match queue {
            // The reader thread owns RX; a kick means new buffers were
            // posted, which it will pick up on the next frame.
            0 => {}
            TX_QUEUE => {
                if let Some(activation) = &self.active {
                    let activation = activation.clone();
                    let backend = Arc::clone(&self.backend);
                    self.pool.spawn(move || {
                        Net::process_tx(&activation, &*backend);
                    });
                }
            }
            other => warn!("net doorbell on unknown queue {}", other),
        }
    }

    fn reset(&mut self) {
        self.rx_stop.store(true, Ordering::Release);
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::queue::testing::{ready_queue_at, test_mem, TestRing};
    use super::super::queue::{VIRTQ_DESC_F_NEXT, VIRTQ_DESC_F_WRITE};
    use super::super::test_utils::TestIrq;
    use super::super::VirtioInterrupt;
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicU8;
    use std::sync::{Condvar, Mutex};
    use std::time::{Duration, Instant};
    use vm_memory::{Bytes, GuestAddress};

    const RX_PFN: u32 = 0x100;
    const TX_PFN: u32 = 0x110;

    /// Frames sent come back on the receive side.
    struct Loopback {
        frames: Mutex<VecDeque<Vec<u8>>>,
        cond: Condvar,
    }

    impl Loopback {
        fn new() -> Self {
            Loopback {
                frames: Mutex::new(VecDeque::new()),
                cond: Condvar::new(),
            }
        }
    }

    impl NetBackend for Loopback {
        fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
            let mut frames = self.frames.lock().unwrap();
            loop {
                if let Some(frame) = frames.pop_front() {
                    let len = frame.len().min(buf.len());
                    buf[..len].copy_from_slice(&frame[..len]);
                    return Ok(len);
                }
                let (guard, timed_out) = self
                    .cond
                    .wait_timeout(frames, Duration::from_secs(10))
                    .unwrap();
                frames = guard;
                if timed_out.timed_out() {
                    return Ok(0);
                }
            }
        }

        fn send(&self, buf: &[u8]) -> io::Result<usize> {
            self.frames.lock().unwrap().push_back(buf.to_vec());
            self.cond.notify_one();
            Ok(buf.len())
        }
    }

    fn setup(mem: &vm_memory::GuestMemoryMmap) -> (Net<Loopback>, Activation) {
        let pool = Arc::new(crate::worker::WorkerPool::new(1));
        let net = Net::new(Loopback::new(), [0x02, 0, 0, 0, 0, 1], pool);
        let activation = Activation {
            mem: Arc::new(mem.clone()),
            interrupt: Arc::new(VirtioInterrupt::new(TestIrq::new())),
            status: Arc::new(AtomicU8::new(0)),
            queues: vec![
                Arc::new(Mutex::new(ready_queue_at(mem, 8, RX_PFN))),
                Arc::new(Mutex::new(ready_queue_at(mem, 8, TX_PFN))),
            ],
        };
        (net, activation)
    }

    fn wait_used(ring: &TestRing, want: u16) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while ring.used_idx() < want {
            assert!(Instant::now() < deadline, "used index never reached {}", want);
            thread::sleep(Duration::from_millis(1));
        }
    }

    /// A transmitted frame loops back into a posted receive buffer: the
    /// payload round-trips intact behind a fresh zeroed header.
    #[test]
    fn test_loopback_round_trip() {
        let mem = test_mem();
        let mut rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let mut tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (mut net, activation) = setup(&mem);

        // One 1600-byte receive buffer.
        rx.write_desc(0, 0x20000, 1600, VIRTQ_DESC_F_WRITE, 0);
        rx.push(0);

        net.activate(activation).unwrap();

        // Guest transmits a 1500-byte frame behind a 12-byte header.
        let frame: Vec<u8> = (0..1500u32).map(|i| i as u8).collect();
        mem.write_slice(&[0u8; VIRTIO_NET_HDR_LEN], GuestAddress(0x8000))
            .unwrap();
        mem.write_slice(&frame, GuestAddress(0x9000)).unwrap();
        tx.write_desc(0, 0x8000, VIRTIO_NET_HDR_LEN as u32, VIRTQ_DESC_F_NEXT, 1);
        tx.write_desc(1, 0x9000, 1500, 0, 0);
        tx.push(0);
        net.queue_notify(1);

        wait_used(&tx, 1);
        wait_used(&rx, 1);

        // Header (12 zero bytes) + payload, nothing past the frame.
        assert_eq!(rx.used_elem(0), (0, 1512));
        let mut delivered = vec![0u8; 1512];
        mem.read_slice(&mut delivered, GuestAddress(0x20000)).unwrap();
        assert_eq!(&delivered[..VIRTIO_NET_HDR_LEN], &[0u8; VIRTIO_NET_HDR_LEN]);
        assert_eq!(&delivered[VIRTIO_NET_HDR_LEN..], &frame[..]);

        net.reset();
    }

    #[test]
    fn test_oversized_frame_dropped_buffer_returned() {
        let mem = test_mem();
        let mut rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let _tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (net, activation) = setup(&mem);

        // Buffer too small for frame + header.
        rx.write_desc(0, 0x20000, 64, VIRTQ_DESC_F_WRITE, 0);
        rx.push(0);

        deliver_frame(&activation, &[0u8; 100], &net.rx_dropped);

        assert_eq!(rx.used_idx(), 1);
        assert_eq!(rx.used_elem(0), (0, 0));
        assert_eq!(net.rx_dropped.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_no_buffers_counts_drop() {
        let mem = test_mem();
        let _rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let _tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (net, activation) = setup(&mem);

        deliver_frame(&activation, &[0u8; 100], &net.rx_dropped);
        assert_eq!(net.rx_dropped.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_mac_in_config_space() {
        let mem = test_mem();
        let (net, _activation) = setup(&mem);
        let mut mac = [0u8; 6];
        net.read_config(0, &mut mac);
        assert_eq!(mac, [0x02, 0, 0, 0, 0, 1]);
        assert_ne!(net.device_features() & (1 << VIRTIO_NET_F_MAC), 0);
    }
}
