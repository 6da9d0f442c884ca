//! Query controller
//!
//! Owns the typed city and the observable query state for an interactive
//! UI. State moves `Idle -> Loading -> Ready | Failed` and each submit is
//! tagged with a generation so a slow, superseded response can never
//! overwrite the result of a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{CityName, WeatherSnapshot};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::WeatherQueryService;
use crate::error::QueryError;

/// Observable state of the weather UI
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// Nothing requested yet, or reset
    Idle,
    /// A request is in flight
    Loading { generation: u64, city: CityName },
    /// The latest request succeeded
    Ready {
        generation: u64,
        snapshot: Arc<WeatherSnapshot>,
    },
    /// The latest request failed; no weather is displayed
    Failed { generation: u64, error: QueryError },
}

impl QueryState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Snapshot to display, if any
    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<WeatherSnapshot>> {
        match self {
            Self::Ready { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// Error to surface, if any
    #[must_use]
    pub const fn error(&self) -> Option<&QueryError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Generation of the request this state belongs to
    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Loading { generation, .. }
            | Self::Ready { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
        }
    }
}

/// Result of a submit that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The response was published
    Applied(Arc<WeatherSnapshot>),
    /// A newer submit (or a reset) happened first; the response was dropped
    Superseded,
}

/// Stateful controller behind an interactive weather UI
pub struct QueryController {
    service: Arc<WeatherQueryService>,
    city: Mutex<String>,
    generation: AtomicU64,
    state: watch::Sender<QueryState>,
}

impl std::fmt::Debug for QueryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryController")
            .field("city", &*self.city.lock())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl QueryController {
    #[must_use]
    pub fn new(service: Arc<WeatherQueryService>) -> Self {
        let (state, _) = watch::channel(QueryState::Idle);
        Self {
            service,
            city: Mutex::new(String::new()),
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Replace the typed city text
    pub fn set_city(&self, city: impl Into<String>) {
        *self.city.lock() = city.into();
    }

    /// Current typed city text
    #[must_use]
    pub fn city(&self) -> String {
        self.city.lock().clone()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    /// Whether a request is in flight
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Set the city text and submit it
    pub async fn submit_city(&self, city: impl Into<String>) -> Result<SubmitOutcome, QueryError> {
        self.set_city(city);
        self.submit().await
    }

    /// Submit the typed city
    ///
    /// Validation failures are returned without touching the displayed state
    /// and without any provider call. Provider failures replace whatever was
    /// displayed with `Failed`.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<SubmitOutcome, QueryError> {
        let raw = self.city();
        let city = CityName::parse(&raw).map_err(QueryError::from)?;

        let generation = self.begin(&city);
        let result = self.service.fetch(&city).await;
        self.settle(generation, result)
    }

    /// Return to `Idle`, discarding any in-flight response
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *state = QueryState::Idle;
        });
    }

    fn begin(&self, city: &CityName) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = QueryState::Loading {
                generation,
                city: city.clone(),
            };
        });
        debug!(generation, city = %city, "Query started");
        generation
    }

    fn settle(
        &self,
        generation: u64,
        result: Result<WeatherSnapshot, QueryError>,
    ) -> Result<SubmitOutcome, QueryError> {
        let (next, outcome) = match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                (
                    QueryState::Ready {
                        generation,
                        snapshot: Arc::clone(&snapshot),
                    },
                    Ok(SubmitOutcome::Applied(snapshot)),
                )
            },
            Err(error) => (
                QueryState::Failed {
                    generation,
                    error: error.clone(),
                },
                Err(error),
            ),
        };

        let published = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        });

        if published {
            outcome
        } else {
            debug!(generation, "Dropping superseded response");
            Ok(SubmitOutcome::Superseded)
        }
    }
}
