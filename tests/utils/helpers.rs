/// Test doubles for the trending repository and state sink
use async_trait::async_trait;
use mockall::mock;
use plasma_lib::modules::trending::{
    MediaType, Movie, MovieList, MovieRepository, PageState, StateSink, TimeWindow,
    TrendingResults,
};
use plasma_lib::shared::{AppError, AppResult};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Notify;

// ================================================================================================
// STATE SINK
// ================================================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    State(PageState),
    Results(TrendingResults),
}

/// Sink that keeps every post in order
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn states(&self) -> Vec<PageState> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::State(state) => Some(state),
                SinkEvent::Results(_) => None,
            })
            .collect()
    }

    pub fn results(&self) -> Vec<TrendingResults> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Results(results) => Some(results),
                SinkEvent::State(_) => None,
            })
            .collect()
    }
}

impl StateSink for RecordingSink {
    fn post_page_state(&self, state: PageState) {
        self.events.lock().unwrap().push(SinkEvent::State(state));
    }

    fn post_results(&self, results: TrendingResults) {
        self.events.lock().unwrap().push(SinkEvent::Results(results));
    }
}

// ================================================================================================
// MOCKS
// ================================================================================================

mock! {
    pub MovieRepo {}

    #[async_trait]
    impl MovieRepository for MovieRepo {
        async fn fetch_trending_movies(
            &self,
            page: u32,
            media_type: MediaType,
            time_window: TimeWindow,
        ) -> AppResult<MovieList>;

        async fn add_search_term(&self, term: &str) -> AppResult<()>;
    }
}

// ================================================================================================
// SCRIPTED REPOSITORY
// ================================================================================================

/// What the next trending fetch returns
#[derive(Debug, Clone)]
pub enum Outcome {
    Movies(Vec<Movie>),
    Empty,
    /// A page whose entries are all absent
    Absent(usize),
    Fail,
    /// Never resolves; wakes `fetch_entered` first
    Hang,
}

/// Repository that answers fetches from a script, in call order
///
/// Fetches beyond the script return an empty page.
pub struct FakeRepository {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<(u32, MediaType, TimeWindow)>>,
    terms: Mutex<Vec<String>>,
    fail_terms: bool,
    pub fetch_entered: Notify,
}

impl FakeRepository {
    pub fn scripted(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
            terms: Mutex::new(Vec::new()),
            fail_terms: false,
            fetch_entered: Notify::new(),
        }
    }

    /// Every search term submission fails
    pub fn failing_terms(mut self) -> Self {
        self.fail_terms = true;
        self
    }

    pub fn calls(&self) -> Vec<(u32, MediaType, TimeWindow)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieRepository for FakeRepository {
    async fn fetch_trending_movies(
        &self,
        page: u32,
        media_type: MediaType,
        time_window: TimeWindow,
    ) -> AppResult<MovieList> {
        self.calls
            .lock()
            .unwrap()
            .push((page, media_type, time_window));
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Outcome::Empty);

        match outcome {
            Outcome::Movies(movies) => Ok(MovieList::from_movies(movies)),
            Outcome::Empty => Ok(MovieList::new(Vec::new())),
            Outcome::Absent(count) => Ok(MovieList::new(vec![None; count])),
            Outcome::Fail => Err(AppError::ApiError("HTTP 500: upstream failed".to_string())),
            Outcome::Hang => {
                self.fetch_entered.notify_one();
                futures::future::pending::<AppResult<MovieList>>().await
            }
        }
    }

    async fn add_search_term(&self, term: &str) -> AppResult<()> {
        self.terms.lock().unwrap().push(term.to_string());
        if self.fail_terms {
            Err(AppError::InternalError("search history unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Poll `condition` until it holds or `timeout_ms` elapses
pub async fn wait_until<F>(timeout_ms: u64, condition: F) -> bool
where
    F: Fn() -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
