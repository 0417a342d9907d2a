//! Off-thread analysis worker
//!
//! One dedicated thread owns each request's buffer for the duration of the
//! computation and answers with a single message. There is no cancellation:
//! a caller that loses interest drops its receiver and the eventual result
//! goes nowhere.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::analyze;
use crate::models::{AnalysisConfig, AnalysisResult};

/// An owned analysis request. The buffer moves into the worker.
#[derive(Debug)]
pub struct AnalysisRequest {
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub config: AnalysisConfig,
}

struct Job {
    request: AnalysisRequest,
    reply: Sender<Option<AnalysisResult>>,
}

/// Handle to a running analysis worker thread.
#[derive(Debug)]
pub struct AnalysisWorker {
    jobs: Sender<Job>,
    handle: JoinHandle<()>,
}

impl AnalysisWorker {
    /// Start the worker thread.
    pub fn spawn() -> Self {
        let (jobs, inbox) = channel::<Job>();
        let handle = thread::spawn(move || {
            while let Ok(job) = inbox.recv() {
                let AnalysisRequest { buffer, width, height, config } = job.request;
                let result = analyze::analyze_pixels(&buffer, width, height, &config);
                // A dropped receiver means the caller moved on; the result
                // is discarded
                let _ = job.reply.send(result);
            }
        });
        Self { jobs, handle }
    }

    /// Queue a request. The returned receiver yields exactly one message.
    pub fn submit(&self, request: AnalysisRequest) -> Receiver<Option<AnalysisResult>> {
        let (reply, response) = channel();
        // The worker loop only exits once every job sender is gone, so a
        // send on a live worker cannot fail
        let _ = self.jobs.send(Job { request, reply });
        response
    }

    /// Finish queued work and join the thread.
    pub fn shutdown(self) {
        let AnalysisWorker { jobs, handle } = self;
        drop(jobs);
        let _ = handle.join();
    }
}
