use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::{ReferenceEngine, ReferenceRequest};
use crate::HybridError;

/// One request plus the slot its answer goes into.
pub struct ReferenceJob {
    pub request: ReferenceRequest,
    pub reply: oneshot::Sender<Result<String, HybridError>>,
}

/// Client half of a reference engine served by a task on the other end of
/// an mpsc channel. One job is in flight per request.
#[derive(Clone)]
pub struct ChannelEngine {
    jobs: mpsc::Sender<ReferenceJob>,
}

impl ChannelEngine {
    /// Returns the client and the receiver the serving task reads jobs from.
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<ReferenceJob>) {
        let (jobs, receiver) = mpsc::channel(buffer.max(1));
        (Self { jobs }, receiver)
    }
}

#[async_trait]
impl ReferenceEngine for ChannelEngine {
    async fn best_move(&self, request: ReferenceRequest) -> Result<String, HybridError> {
        let (reply, answer) = oneshot::channel();

        self.jobs
            .send(ReferenceJob { request, reply })
            .await
            .map_err(|_| HybridError::ReferenceEngineUnavailable("engine task has stopped".into()))?;

        answer.await.map_err(|_| {
            HybridError::ReferenceEngineUnavailable("engine task dropped the request".into())
        })?
    }
}
