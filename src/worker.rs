//! Message-passing front end to the partitioner.
//!
//! Callers holding a whole buffer post it to a background task and get the
//! parts back as zero-copy slices. The task runs [`plan_parts`], the same
//! function the in-process path uses.

use bytes::Bytes;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::chunk::plan_parts;
use crate::{Result, UploadError};

#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub data: Bytes,
    pub file_name: String,
    pub file_type: String,
    pub max_chunk_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitChunk {
    pub name: String,
    pub data: Bytes,
    pub mime_type: String,
}

struct SplitJob {
    request: SplitRequest,
    reply: oneshot::Sender<Result<Vec<SplitChunk>>>,
}

pub struct SplitWorker {
    jobs: mpsc::Sender<SplitJob>,
    handle: JoinHandle<()>,
}

impl SplitWorker {
    /// Starts the worker on the current tokio runtime.
    pub fn spawn(queue_depth: usize) -> Self {
        let (jobs, mut rx) = mpsc::channel::<SplitJob>(queue_depth.max(1));

        let handle = tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let result = split_buffer(job.request);
                if job.reply.send(result).is_err() {
                    debug!("Split requester went away before the reply");
                }
            }
            debug!("Split worker stopped");
        });

        Self { jobs, handle }
    }

    pub async fn split(&self, request: SplitRequest) -> Result<Vec<SplitChunk>> {
        let (reply, response) = oneshot::channel();
        self.jobs
            .send(SplitJob { request, reply })
            .await
            .map_err(|_| UploadError::Worker("split worker has stopped".to_string()))?;

        response
            .await
            .map_err(|_| UploadError::Worker("split worker dropped the reply".to_string()))?
    }

    /// Stops taking jobs and waits for the queued ones to finish.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.jobs);
        self.handle
            .await
            .map_err(|e| UploadError::Worker(e.to_string()))
    }
}

fn split_buffer(request: SplitRequest) -> Result<Vec<SplitChunk>> {
    let parts = plan_parts(
        &request.file_name,
        &request.file_type,
        request.data.len() as u64,
        request.max_chunk_size,
    )?;

    Ok(parts
        .into_iter()
        .map(|part| SplitChunk {
            data: request.data.slice(part.range.start as usize..part.range.end as usize),
            name: part.name,
            mime_type: part.mime_type,
        })
        .collect())
}
