//! Per-challenge download fan-out with message-passing progress.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;

use super::{download, DownloadError, TransferObserver};
use crate::http::HttpClient;

/// One attached file to fetch.
#[derive(Debug, Clone)]
pub struct FileJob {
    pub url: url::Url,
    pub headers: HashMap<String, String>,
    pub destination: PathBuf,
    /// Short name shown on the progress bar.
    pub label: String,
}

/// Progress of job `index` (position in the slice given to [`download_all`]).
#[derive(Debug)]
pub enum DownloadEvent {
    Started { index: usize, total: Option<u64> },
    Progress { index: usize, bytes: u64 },
    Finished { index: usize, destination: PathBuf, bytes: u64 },
    Failed { index: usize, error: DownloadError },
}

/// Turns observer callbacks into events.
struct EventObserver<'a> {
    index: usize,
    emit: &'a mut dyn FnMut(DownloadEvent),
}

impl TransferObserver for EventObserver<'_> {
    fn on_length(&mut self, total: Option<u64>) {
        (self.emit)(DownloadEvent::Started {
            index: self.index,
            total,
        });
    }

    fn on_chunk(&mut self, bytes: u64) {
        (self.emit)(DownloadEvent::Progress {
            index: self.index,
            bytes,
        });
    }

    fn on_complete(&mut self, destination: &Path, bytes: u64) {
        (self.emit)(DownloadEvent::Finished {
            index: self.index,
            destination: destination.to_path_buf(),
            bytes,
        });
    }
}

fn run_job(http: &HttpClient, index: usize, job: &FileJob, emit: &mut dyn FnMut(DownloadEvent)) {
    let mut observer = EventObserver { index, emit };
    if let Err(error) = download(http, job.url.as_str(), &job.headers, &job.destination, &mut observer) {
        (observer.emit)(DownloadEvent::Failed { index, error });
    }
}

/// Downloads every job, delivering all events to `on_event` on the calling thread.
///
/// With `max_concurrent <= 1` jobs run inline, in order. Otherwise up to
/// `max_concurrent` worker threads pull jobs from a shared queue and send
/// events over a channel; `on_event` is still only called from this thread.
/// A failed job never stops the others. Destinations must be distinct.
pub fn download_all(
    http: &HttpClient,
    jobs: &[FileJob],
    max_concurrent: usize,
    mut on_event: impl FnMut(DownloadEvent),
) {
    if jobs.is_empty() {
        return;
    }
    if max_concurrent <= 1 || jobs.len() == 1 {
        for (index, job) in jobs.iter().enumerate() {
            run_job(http, index, job, &mut on_event);
        }
        return;
    }

    let work: Mutex<VecDeque<usize>> = Mutex::new((0..jobs.len()).collect());
    let (tx, rx) = mpsc::channel::<DownloadEvent>();
    let num_workers = max_concurrent.min(jobs.len());

    thread::scope(|s| {
        for _ in 0..num_workers {
            let tx = tx.clone();
            let work = &work;
            s.spawn(move || loop {
                let next = match work.lock() {
                    Ok(mut queue) => queue.pop_front(),
                    Err(poisoned) => poisoned.into_inner().pop_front(),
                };
                let Some(index) = next else { break };
                let mut send = |event: DownloadEvent| {
                    let _ = tx.send(event);
                };
                run_job(http, index, &jobs[index], &mut send);
            });
        }
        drop(tx);
        for event in rx {
            on_event(event);
        }
    });
}
