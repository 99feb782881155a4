use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress of a probe run, shared by every worker.
///
/// The completed counter is atomic so workers can report concurrently
/// without a lock.
#[derive(Debug)]
pub struct ProgressTracker {
    total_requests: usize,
    completed_requests: AtomicUsize,
}

impl ProgressTracker {
    pub fn new(total_requests: usize) -> Self {
        Self {
            total_requests,
            completed_requests: AtomicUsize::new(0),
        }
    }

    /// Record one finished probe and return the new completed count
    pub fn request_completed(&self) -> usize {
        self.completed_requests.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn total_requests(&self) -> usize {
        self.total_requests
    }

    pub fn completed_requests(&self) -> usize {
        self.completed_requests.load(Ordering::Acquire)
    }
}

/// Alias for progress callback to reduce type complexity lint
pub type ProgressCallback = dyn Fn(&ProgressTracker) + Send + Sync;
