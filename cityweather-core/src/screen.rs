//! The search → resolve → present → render pipeline behind the weather screen.
//!
//! Every submitted query gets a generation id. When a lookup finishes, its
//! result is only rendered if no newer query has been submitted meanwhile;
//! otherwise it is dropped as [`SearchOutcome::Superseded`]. Failures of the
//! latest query become a transient notification and leave the previously
//! rendered view in place.

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use tracing::Instrument;

use crate::{
    error::LookupError,
    presenter::{local_hour, present_with_clock},
    provider::WeatherProvider,
    resolver::resolve,
    view::WeatherView,
};

/// Where rendered views and notifications go.
pub trait RenderSink: Send + Sync {
    fn render(&self, view: &WeatherView);

    /// Show a short-lived message, e.g. after a failed request.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Rendered(WeatherView),
    /// Geocoding found nothing; the screen is left untouched.
    NotFound,
    /// A newer query was submitted before this one finished.
    Superseded,
}

pub struct WeatherScreen<S> {
    provider: Arc<dyn WeatherProvider>,
    sink: S,
    clock: fn() -> u32,
    generation: AtomicU64,
    displayed: Mutex<Option<WeatherView>>,
}

impl<S: RenderSink> WeatherScreen<S> {
    pub fn new(provider: Arc<dyn WeatherProvider>, sink: S) -> Self {
        Self {
            provider,
            sink,
            clock: local_hour,
            generation: AtomicU64::new(0),
            displayed: Mutex::new(None),
        }
    }

    /// Override the source of the local hour used for asset selection.
    pub fn with_clock(mut self, clock: fn() -> u32) -> Self {
        self.clock = clock;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The view currently on screen, if any lookup has rendered yet.
    pub fn displayed(&self) -> Option<WeatherView> {
        self.displayed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run one query through the pipeline.
    ///
    /// Errors have already been shown through [`RenderSink::notify`] when
    /// they are returned here.
    pub async fn submit(&self, query: &str) -> Result<SearchOutcome, LookupError> {
        let city = query.trim();
        if city.is_empty() {
            tracing::debug!("ignoring blank query");
            return Ok(SearchOutcome::NotFound);
        }

        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let span = tracing::info_span!("search", id, city);

        match self.lookup(id, city).instrument(span).await {
            Ok(outcome) => Ok(outcome),
            Err(err) if !self.is_latest(id) => {
                tracing::warn!(id, error = %err, "dropping failure of superseded query");
                Ok(SearchOutcome::Superseded)
            }
            Err(err) => {
                tracing::error!(id, "{err}");
                self.sink.notify(&err.notification());
                Err(err)
            }
        }
    }

    async fn lookup(&self, id: u64, city: &str) -> Result<SearchOutcome, LookupError> {
        let provider = self.provider.as_ref();

        let Some(coord) = resolve(provider, city).await? else {
            if !self.is_latest(id) {
                return Ok(SearchOutcome::Superseded);
            }
            return Ok(SearchOutcome::NotFound);
        };

        let presentation = present_with_clock(provider, coord, self.clock).await?;
        tracing::debug!(?presentation, "weather fetched");

        Ok(self.publish(id, WeatherView::new(city, &presentation)))
    }

    fn is_latest(&self, id: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == id
    }

    fn publish(&self, id: u64, mut view: WeatherView) -> SearchOutcome {
        let mut displayed = self
            .displayed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.is_latest(id) {
            tracing::debug!(id, "discarding stale response");
            return SearchOutcome::Superseded;
        }

        // Without a condition code the images on screen stay as they were.
        if let (None, Some(previous)) = (view.foreground, displayed.as_ref()) {
            view.foreground = previous.foreground;
            view.background = previous.background;
        }

        self.sink.render(&view);
        *displayed = Some(view.clone());
        SearchOutcome::Rendered(view)
    }
}
