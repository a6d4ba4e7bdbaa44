// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Fixed-size worker pool servicing device jobs.
//!
//! Doorbell handlers run on vCPU threads and must not block on host I/O,
//! so they package the work as a job and hand it off here. Jobs are
//! independent closures executed in FIFO order; the queue depth is bounded
//! in practice by the guest's ring sizes.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use log::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

struct State {
    jobs: VecDeque<Job>,
    stop: bool,
}

struct Shared {
    state: Mutex<State>,
    cond: Condvar,
}

pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Spawn `threads` workers (at least one).
    pub fn new(threads: usize) -> Self {
        let threads = threads.max(1);
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                jobs: VecDeque::new(),
                stop: false,
            }),
            cond: Condvar::new(),
        });

        let workers = (0..threads)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::Builder::new()
                    .name(format!("worker{}", i))
                    .spawn(move || worker_loop(&shared))
                    .expect("failed to spawn worker thread")
            })
            .collect();

        debug!("worker pool started with {} threads", threads);
        WorkerPool {
            shared,
            workers: Mutex::new(workers),
        }
    }

    /// Sized to the number of online host CPUs.
    pub fn new_for_host() -> Self {
        let threads = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(threads)
    }

    /// Queue a job. Never blocks the caller.
    pub fn spawn<F: FnOnce() + Send + 'static>(&self, job: F) {
        let mut state = self.shared.state.lock().unwrap();
        if state.stop {
            // Submissions racing with teardown are discarded; the guest
            // is gone by then.
            return;
        }
        state.jobs.push_back(Box::new(job));
        drop(state);
        self.shared.cond.notify_one();
    }

    /// Stop the workers and join them. Queued jobs that have not started
    /// are discarded.
    pub fn shutdown(&self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            if state.stop {
                return;
            }
            state.stop = true;
            let dropped = state.jobs.len();
            state.jobs.clear();
            if dropped > 0 {
                debug!("worker pool dropped {} queued jobs at shutdown", dropped);
            }
        }
        self.shared.cond.notify_all();
        for handle in self.workers.lock().unwrap().drain(..) {
            let _ = handle.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let job = {
            let mut state = shared.state.lock().unwrap();
            loop {
                if let Some(job) = state.jobs.pop_front() {
                    break job;
                }
                if state.stop {
                    return;
                }
                state = shared.cond.wait(state).unwrap();
            }
        };
        job();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_jobs_all_run() {
        let pool = WorkerPool::new(4);
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..100 {
            let counter = Arc::clone(&counter);
            pool.spawn(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while counter.load(Ordering::SeqCst) != 100 {
            assert!(std::time::Instant::now() < deadline, "jobs did not finish");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_shutdown_joins_workers() {
        let pool = WorkerPool::new(2);
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            pool.spawn(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        pool.shutdown();
        // A second shutdown is a no-op.
        pool.shutdown();
        // Submissions after stop are discarded without panicking.
        pool.spawn(|| panic!("must not run"));
        thread::sleep(Duration::from_millis(20));
    }

    #[test]
    fn test_fifo_order_single_worker() {
        let pool = WorkerPool::new(1);
        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..16 {
            let order = Arc::clone(&order);
            pool.spawn(move || {
                order.lock().unwrap().push(i);
            });
        }
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while order.lock().unwrap().len() != 16 {
            assert!(std::time::Instant::now() < deadline);
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(*order.lock().unwrap(), (0..16).collect::<Vec<_>>());
    }
}
