//! Session driver - runs one review interactor on its own task
//!
//! The driver gives a session a single control flow: user intents arrive over
//! a channel and the one enrichment fetch is polled by the same loop, so the
//! interactor (and through it the view) is never touched concurrently.
//!
//! ## Lifetime
//!
//! Closing or dropping the [`ReviewSession`] handle cancels the session. The
//! loop observes cancellation before anything else and drops a fetch that is
//! still in flight, so a late enrichment result never reaches a dead session.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use crate::interactor::{EnrichmentRequest, ReviewInteractor};
use crate::ports::EnrichmentClient;
use crate::presenter::Presenter;
use crate::review::{EnrichedProduct, EnrichmentError, SessionId};
use crate::router::Router;

type EnrichmentFuture =
    Pin<Box<dyn Future<Output = Result<Vec<EnrichedProduct>, EnrichmentError>> + Send>>;

/// User intents delivered to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewIntent {
    /// Screen became visible
    Activate,
    /// Back button
    Back,
    /// Tap on a product, by position in the review's product list
    ProductSelected(isize),
    /// Tap on the video preview
    PlayVideo,
}

/// Handle to a running review session
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct ReviewSession {
    session_id: SessionId,
    intents: mpsc::UnboundedSender<ReviewIntent>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ReviewSession {
    /// Move `interactor` onto a new task and return its handle
    ///
    /// The session is idle until it receives [`ReviewIntent::Activate`].
    pub fn spawn<P, R, E>(interactor: ReviewInteractor<P, R>, client: Arc<E>) -> Self
    where
        P: Presenter + 'static,
        R: Router + 'static,
        E: EnrichmentClient + 'static,
    {
        let session_id = interactor.session_id();
        let (intents, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        info!(session_id = %session_id, "Starting review session");
        let task = tokio::spawn(run(interactor, client, receiver, cancel.clone()));

        Self {
            session_id,
            intents,
            cancel,
            task: Some(task),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Deliver an intent; ignored once the session is closed
    pub fn send(&self, intent: ReviewIntent) {
        if self.intents.send(intent).is_err() {
            trace!(session_id = %self.session_id, ?intent, "Intent sent to closed session");
        }
    }

    pub fn activate(&self) {
        self.send(ReviewIntent::Activate);
    }

    pub fn back(&self) {
        self.send(ReviewIntent::Back);
    }

    pub fn select_product(&self, index: isize) {
        self.send(ReviewIntent::ProductSelected(index));
    }

    pub fn play_video(&self) {
        self.send(ReviewIntent::PlayVideo);
    }

    /// Whether the session has been closed
    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel the session without waiting for its task
    pub fn close(&self) {
        self.cancel.cancel();
    }

    /// Cancel the session and wait until its task has exited
    ///
    /// A panic raised on the session task is resumed on the caller.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            match task.await {
                Ok(()) => {}
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                Err(err) => {
                    error!(session_id = %self.session_id, error = %err, "Session task ended abnormally");
                }
            }
        }
    }
}

impl Drop for ReviewSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run<P, R, E>(
    mut interactor: ReviewInteractor<P, R>,
    client: Arc<E>,
    mut intents: mpsc::UnboundedReceiver<ReviewIntent>,
    cancel: CancellationToken,
) where
    P: Presenter,
    R: Router,
    E: EnrichmentClient + 'static,
{
    let session_id = interactor.session_id();
    let mut enrichment: EnrichmentFuture = Box::pin(std::future::pending());
    let mut enrichment_in_flight = false;

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                if enrichment_in_flight {
                    debug!(session_id = %session_id, "Dropping in-flight enrichment");
                }
                break;
            }

            result = &mut enrichment, if enrichment_in_flight => {
                enrichment_in_flight = false;
                interactor.on_enrichment_resolved(result);
            }

            intent = intents.recv() => {
                let Some(intent) = intent else { break };
                trace!(session_id = %session_id, ?intent, "Handling intent");

                match intent {
                    ReviewIntent::Activate => {
                        // activate() publishes before handing out the request
                        if let Some(request) = interactor.activate() {
                            enrichment = fetch(Arc::clone(&client), request);
                            enrichment_in_flight = true;
                        }
                    }
                    ReviewIntent::Back => interactor.on_back_requested(),
                    ReviewIntent::ProductSelected(index) => interactor.on_product_selected(index),
                    ReviewIntent::PlayVideo => interactor.on_video_play_requested(),
                }
            }
        }
    }

    info!(session_id = %session_id, "Review session closed");
}

fn fetch<E>(client: Arc<E>, request: EnrichmentRequest) -> EnrichmentFuture
where
    E: EnrichmentClient + 'static,
{
    Box::pin(async move { client.fetch_enriched(&request.product_ids).await })
}
