//! # Search Session
//!
//! The header search box as an explicit state machine. Every input (a
//! keystroke, an elapsed quiet period, an arriving response, a click) is a
//! `SearchEvent`; `SearchSession::handle` applies it and returns the
//! `Effect`s the caller must carry out. Nothing in here sleeps or does I/O,
//! which keeps the transitions testable without a runtime.
//!
//! ## Phases
//! - **Idle**: the query is shorter than the minimum length
//! - **Pending**: a lookup is scheduled for when typing pauses
//! - **Loading**: a lookup for the current query is in flight
//! - **Resolved**: results for the current query are stored
//! - **Dismissed**: the user clicked away; stored results stay hidden
//!
//! ## Race safety
//! Every lookup is tagged with a `LookupTicket` carrying the query it was
//! issued for. A response is applied only if that query equals the live
//! input and no newer response has already been applied.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::SearchConfig;
use review_model::Route;
use search::{is_searchable, Family, SearchError, SearchResultSet};

/// Identifies one outgoing lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTicket {
    /// Position of the keystroke that scheduled the lookup
    pub seq: u64,
    /// Input value the lookup was issued for
    pub query: String,
}

/// How a lookup ended
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(SearchResultSet),
    Failed(SearchError),
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The input now holds this text
    Input(String),
    /// The debounce timer scheduled for keystroke `seq` fired
    QuietPeriodElapsed { seq: u64 },
    ResponseArrived {
        ticket: LookupTicket,
        outcome: LookupOutcome,
    },
    /// Click outside the search surface
    Blur,
    Focus,
    /// A result from this family was chosen
    Select(Family),
    Clear,
    /// Enter pressed in the input
    Submit,
}

/// Work the session asks its driver to do
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// (Re)arm the single debounce timer. Replaces any timer already armed.
    ScheduleLookup { delay: Duration, seq: u64 },
    CancelTimer,
    IssueLookup(LookupTicket),
    Navigate(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Loading,
    Resolved,
    Dismissed,
}

/// What the search box should render
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub input: String,
    pub phase: Phase,
    pub loading: bool,
    /// Whether the results dropdown is visible
    pub open: bool,
    /// Results for the current input, if a lookup has resolved
    pub results: Option<SearchResultSet>,
}

impl SearchView {
    /// Results as displayed: only while the dropdown is open
    pub fn visible_results(&self) -> Option<&SearchResultSet> {
        self.results.as_ref().filter(|_| self.open)
    }
}

pub struct SearchSession {
    config: SearchConfig,
    input: String,
    results: Option<SearchResultSet>,
    open: bool,
    loading: bool,
    dismissed: bool,
    /// Keystroke whose debounce timer is armed
    pending_seq: Option<u64>,
    next_seq: u64,
    /// Ticket seq of the last response applied to `results`
    applied_seq: Option<u64>,
    /// Seq of the most recently issued lookup
    issued_seq: Option<u64>,
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            input: String::new(),
            results: None,
            open: false,
            loading: false,
            dismissed: false,
            pending_seq: None,
            next_seq: 0,
            applied_seq: None,
            issued_seq: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        if !is_searchable(&self.input, self.config.min_query_len) {
            Phase::Idle
        } else if self.pending_seq.is_some() {
            Phase::Pending
        } else if self.dismissed {
            Phase::Dismissed
        } else if self.loading {
            Phase::Loading
        } else if self.results.is_some() {
            Phase::Resolved
        } else {
            Phase::Idle
        }
    }

    pub fn view(&self) -> SearchView {
        SearchView {
            input: self.input.clone(),
            phase: self.phase(),
            loading: self.loading,
            open: self.open,
            results: self.results.clone(),
        }
    }

    /// Apply one event and return the effects it requires, in order.
    pub fn handle(&mut self, event: SearchEvent) -> Vec<Effect> {
        match event {
            SearchEvent::Input(text) => self.on_input(text),
            SearchEvent::QuietPeriodElapsed { seq } => self.on_quiet_period(seq),
            SearchEvent::ResponseArrived { ticket, outcome } => {
                self.on_response(ticket, outcome);
                Vec::new()
            }
            SearchEvent::Blur => {
                // Covers a lookup still waiting on its quiet period too
                if is_searchable(&self.input, self.config.min_query_len) {
                    self.dismissed = true;
                }
                self.open = false;
                Vec::new()
            }
            SearchEvent::Focus => {
                self.dismissed = false;
                self.open = self.has_current_results();
                Vec::new()
            }
            SearchEvent::Select(family) => {
                if !self.open {
                    debug!("Ignoring selection from {:?} with the dropdown closed", family);
                    return Vec::new();
                }
                let route = family.route(&self.input);
                let mut effects = self.reset();
                effects.push(Effect::Navigate(route));
                effects
            }
            SearchEvent::Clear => self.reset(),
            SearchEvent::Submit => {
                if !is_searchable(&self.input, self.config.min_query_len) {
                    return Vec::new();
                }
                let route = Route::reviews_with_query(&self.input);
                let mut effects = self.reset();
                effects.push(Effect::Navigate(route));
                effects
            }
        }
    }

    fn on_input(&mut self, text: String) -> Vec<Effect> {
        if self.results.as_ref().is_some_and(|r| r.query != text) {
            self.results = None;
            self.applied_seq = None;
        }
        self.input = text;
        self.open = false;
        self.loading = false;
        self.dismissed = false;

        if !is_searchable(&self.input, self.config.min_query_len) {
            self.results = None;
            return self.cancel_timer().into_iter().collect();
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.pending_seq = Some(seq);
        vec![Effect::ScheduleLookup {
            delay: self.config.debounce(),
            seq,
        }]
    }

    fn on_quiet_period(&mut self, seq: u64) -> Vec<Effect> {
        if self.pending_seq != Some(seq) {
            debug!("Ignoring superseded timer for keystroke {}", seq);
            return Vec::new();
        }
        self.pending_seq = None;
        self.loading = true;
        self.issued_seq = Some(seq);
        let ticket = LookupTicket {
            seq,
            query: self.input.clone(),
        };
        debug!("Issuing lookup {:?}", ticket);
        vec![Effect::IssueLookup(ticket)]
    }

    fn on_response(&mut self, ticket: LookupTicket, outcome: LookupOutcome) {
        if ticket.query != self.input {
            debug!(
                "Discarding stale response for {:?} (input is now {:?})",
                ticket.query, self.input
            );
            return;
        }
        if self.applied_seq.is_some_and(|applied| ticket.seq < applied) {
            debug!("Discarding response {} older than applied {:?}", ticket.seq, self.applied_seq);
            return;
        }
        // An older ticket for the same text says nothing about the newest one
        if self.issued_seq == Some(ticket.seq) {
            self.loading = false;
        }

        match outcome {
            LookupOutcome::Found(results) => {
                debug!("Lookup {:?} resolved with {} matches", ticket.query, results.total());
                self.applied_seq = Some(ticket.seq);
                self.open = !self.dismissed && results.total() > 0;
                self.results = Some(results);
            }
            LookupOutcome::Failed(err) => {
                warn!("Lookup {:?} failed: {}", ticket.query, err);
                self.applied_seq = Some(ticket.seq);
                self.results = Some(SearchResultSet::empty(ticket.query));
                self.open = false;
            }
            LookupOutcome::TimedOut => {
                debug!("Lookup {:?} timed out", ticket.query);
            }
        }
    }

    /// Clear the input and close everything. An in-flight lookup is left to
    /// finish; its response will no longer match the input.
    fn reset(&mut self) -> Vec<Effect> {
        let effects = self.cancel_timer().into_iter().collect();
        self.input.clear();
        self.results = None;
        self.applied_seq = None;
        self.open = false;
        self.loading = false;
        self.dismissed = false;
        effects
    }

    fn cancel_timer(&mut self) -> Option<Effect> {
        self.pending_seq.take().map(|_| Effect::CancelTimer)
    }

    fn has_current_results(&self) -> bool {
        self.results
            .as_ref()
            .is_some_and(|r| r.query == self.input && r.total() > 0)
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
