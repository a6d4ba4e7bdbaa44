// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Periodic wall-clock tick.
//!
//! A dedicated thread fires at ~10 Hz and pokes the consoles: the 8250
//! retries input its FIFO rejected, the virtio console flushes parked
//! receive data. Running this on a plain thread instead of a signal
//! handler keeps the work out of async-signal context; the devices take
//! their own locks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::devices::serial::SerialConsole;
use crate::virtio::console::Console;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct TickThread {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickThread {
    pub fn start(
        serial: Arc<Mutex<SerialConsole>>,
        console: Option<Arc<Mutex<Console>>>,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = Arc::clone(&running);

        let handle = thread::Builder::new()
            .name("tick".to_string())
            .spawn(move || {
                while thread_running.load(Ordering::Acquire) {
                    thread::sleep(TICK_INTERVAL);
                    serial.lock().unwrap().tick();
                    if let Some(console) = &console {
                        console.lock().unwrap().tick();
                    }
                }
            })
            .expect("failed to spawn tick thread");

        TickThread {
            running,
            handle: Some(handle),
        }
    }

    /// Stop ticking; returns once the thread is gone so no interrupt is
    /// raised after teardown begins.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickThread {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_thread_stops() {
        let serial = Arc::new(Mutex::new(SerialConsole::new().unwrap()));
        let mut tick = TickThread::start(serial, None);
        thread::sleep(Duration::from_millis(50));
        tick.stop();
        // Stopping twice is fine.
        tick.stop();
    }
}
