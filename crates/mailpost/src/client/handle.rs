//! Handle to a send running in the background.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use super::transport::Response;
use crate::error::{Result, TransportError};

/// In-flight send started by [`MailClient::send_deferred`].
///
/// Await the handle to observe the outcome. Dropping it does not stop the
/// send; the request still completes in the background.
///
/// [`MailClient::send_deferred`]: super::MailClient::send_deferred
#[derive(Debug)]
#[must_use = "the send outcome is only observable through the handle"]
pub struct SendHandle {
    task: JoinHandle<Result<Response>>,
}

impl SendHandle {
    pub(super) const fn new(task: JoinHandle<Result<Response>>) -> Self {
        Self { task }
    }

    /// Returns true once the send has completed, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for SendHandle {
    type Output = Result<Response>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) => Err(TransportError::Join(e.to_string()).into()),
        })
    }
}
