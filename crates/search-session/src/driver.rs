//! # Search Driver
//!
//! Runs a `SearchSession` on the tokio runtime and carries out its effects:
//! - one debounce timer, reset on every keystroke
//! - lookups spawned onto the runtime, each bounded by the lookup timeout
//! - the current `SearchView` published on a watch channel
//! - navigation requests forwarded to whoever owns the router
//!
//! Callers talk to the driver through a cloneable `SearchHandle`. The driver
//! task stops once every handle has been dropped.

use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Sleep};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::session::{Effect, LookupOutcome, LookupTicket, SearchEvent, SearchSession, SearchView};
use review_model::Route;
use search::{Family, SearchBackend, SearchError};

/// Cloneable front end for a running search driver
#[derive(Clone)]
pub struct SearchHandle {
    events: mpsc::UnboundedSender<SearchEvent>,
    view: watch::Receiver<SearchView>,
}

impl SearchHandle {
    /// The input now reads `text`
    pub fn input(&self, text: impl Into<String>) {
        self.send(SearchEvent::Input(text.into()));
    }

    pub fn blur(&self) {
        self.send(SearchEvent::Blur);
    }

    pub fn focus(&self) {
        self.send(SearchEvent::Focus);
    }

    pub fn select(&self, family: Family) {
        self.send(SearchEvent::Select(family));
    }

    pub fn clear(&self) {
        self.send(SearchEvent::Clear);
    }

    pub fn submit(&self) {
        self.send(SearchEvent::Submit);
    }

    /// Snapshot of what the search box currently shows
    pub fn view(&self) -> SearchView {
        self.view.borrow().clone()
    }

    /// Subscribe to view changes
    pub fn watch(&self) -> watch::Receiver<SearchView> {
        self.view.clone()
    }

    fn send(&self, event: SearchEvent) {
        if self.events.send(event).is_err() {
            debug!("Search driver has stopped; dropping event");
        }
    }
}

/// Owns the session and its single debounce timer
pub struct SearchDriver {
    session: SearchSession,
    backend: Arc<dyn SearchBackend>,
    events: mpsc::UnboundedReceiver<SearchEvent>,
    responses_tx: mpsc::UnboundedSender<SearchEvent>,
    responses: mpsc::UnboundedReceiver<SearchEvent>,
    view: watch::Sender<SearchView>,
    routes: mpsc::UnboundedSender<Route>,
    /// Keystroke the armed timer belongs to
    armed: Option<u64>,
}

impl SearchDriver {
    /// Start a driver on the current runtime.
    ///
    /// Returns the handle, the stream of navigation requests, and the task.
    pub fn spawn(
        backend: Arc<dyn SearchBackend>,
        config: SearchConfig,
    ) -> (SearchHandle, mpsc::UnboundedReceiver<Route>, JoinHandle<()>) {
        let session = SearchSession::new(config);
        let (events_tx, events) = mpsc::unbounded_channel();
        let (responses_tx, responses) = mpsc::unbounded_channel();
        let (routes_tx, routes) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(session.view());

        info!("Starting search driver with backend {}", backend.name());
        let driver = Self {
            session,
            backend,
            events,
            responses_tx,
            responses,
            view: view_tx,
            routes: routes_tx,
            armed: None,
        };
        let task = tokio::spawn(driver.run());

        let handle = SearchHandle {
            events: events_tx,
            view: view_rx,
        };
        (handle, routes, task)
    }

    async fn run(mut self) {
        let sleep = time::sleep(self.session.config().debounce());
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => self.dispatch(event, sleep.as_mut()),
                    None => break,
                },
                Some(response) = self.responses.recv() => {
                    self.dispatch(response, sleep.as_mut());
                }
                () = &mut sleep, if self.armed.is_some() => {
                    if let Some(seq) = self.armed.take() {
                        self.dispatch(SearchEvent::QuietPeriodElapsed { seq }, sleep.as_mut());
                    }
                }
            }
        }
        debug!("All search handles dropped; driver exiting");
    }

    fn dispatch(&mut self, event: SearchEvent, mut sleep: Pin<&mut Sleep>) {
        for effect in self.session.handle(event) {
            match effect {
                Effect::ScheduleLookup { delay, seq } => {
                    sleep.as_mut().reset(Instant::now() + delay);
                    self.armed = Some(seq);
                }
                Effect::CancelTimer => self.armed = None,
                Effect::IssueLookup(ticket) => self.issue(ticket),
                Effect::Navigate(route) => {
                    info!("Navigating to {}", route);
                    if self.routes.send(route).is_err() {
                        debug!("Nobody is listening for navigation");
                    }
                }
            }
        }
        self.view.send_replace(self.session.view());
    }

    fn issue(&self, ticket: LookupTicket) {
        let backend = self.backend.clone();
        let responses = self.responses_tx.clone();
        let timeout = self.session.config().lookup_timeout();

        tokio::spawn(async move {
            let outcome = match time::timeout(timeout, backend.lookup(&ticket.query)).await {
                Ok(Ok(results)) => LookupOutcome::Found(results),
                Ok(Err(SearchError::Timeout { .. })) => LookupOutcome::TimedOut,
                Ok(Err(err)) => LookupOutcome::Failed(err),
                Err(_) => LookupOutcome::TimedOut,
            };
            // The driver may already be gone; the answer is moot then
            let _ = responses.send(SearchEvent::ResponseArrived { ticket, outcome });
        });
    }
}
