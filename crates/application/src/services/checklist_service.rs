//! Checklist service - Weather-aware packing list generation
//!
//! Sequences the weather lookup and the recommendation request, maps every
//! failure to a fixed user-facing placeholder list, and never surfaces an
//! error to the caller.

use std::{fmt, panic::AssertUnwindSafe, sync::Arc};

use domain::{PackingList, TripRequest};
use futures::FutureExt;
use tracing::{debug, error, instrument, warn};

use crate::ports::{CompletionPort, WeatherPort, WeatherSnapshot};

/// Published when the weather lookup fails
pub const WEATHER_FAILURE_MESSAGE: &str = "Could not fetch weather data";

/// Published when the recommendation request fails
pub const RECOMMENDATION_FAILURE_MESSAGE: &str = "Could not generate recommendations";

/// Published when the pipeline fails outside the two collaborators
pub const INTERNAL_FAILURE_MESSAGE: &str = "An error occurred while generating the checklist.";

/// Phases of a single generation request
///
/// `Failed` is absorbing and reachable from either fetching phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistPhase {
    /// No request in flight
    Idle,
    /// Awaiting the weather provider
    FetchingWeather,
    /// Awaiting the recommendation provider
    FetchingRecommendations,
    /// A real packing list was published
    Done,
    /// A placeholder was published
    Failed,
}

/// Policy for a completion cut off by the output token budget
///
/// The provider does not say whether the final item was emitted completely,
/// so the choice between keeping and dropping it is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationPolicy {
    /// Keep the trailing item even if it may be cut off mid-word
    #[default]
    KeepPartial,
    /// Drop the trailing item when the provider reported a token-budget stop
    DropPartial,
}

/// Service orchestrating weather lookup and packing recommendations
///
/// The two network calls are strictly sequential: the recommendation prompt
/// embeds the weather result. There is no retry and no coordination between
/// overlapping requests; each call owns its pipeline and the caller decides
/// what to do with competing results.
pub struct ChecklistService {
    weather: Arc<dyn WeatherPort>,
    completion: Arc<dyn CompletionPort>,
    truncation: TruncationPolicy,
}

impl fmt::Debug for ChecklistService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChecklistService")
            .field("truncation", &self.truncation)
            .finish_non_exhaustive()
    }
}

impl ChecklistService {
    /// Create a new checklist service
    pub fn new(weather: Arc<dyn WeatherPort>, completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            weather,
            completion,
            truncation: TruncationPolicy::default(),
        }
    }

    /// Set the policy for token-budget truncated completions
    #[must_use]
    pub const fn with_truncation_policy(mut self, policy: TruncationPolicy) -> Self {
        self.truncation = policy;
        self
    }

    /// Generate a packing checklist for a trip
    ///
    /// Always produces a list: either the provider's items or a one-element
    /// placeholder naming the failed stage. Panics escaping the collaborators
    /// are contained here and mapped to a generic placeholder.
    #[instrument(skip(self), fields(location = %request.location(), days = request.duration_days()))]
    pub async fn generate(&self, request: &TripRequest) -> PackingList {
        match AssertUnwindSafe(self.run_pipeline(request)).catch_unwind().await {
            Ok(list) => list,
            Err(_) => {
                error!("Checklist pipeline panicked");
                PackingList::placeholder(INTERNAL_FAILURE_MESSAGE)
            },
        }
    }

    /// Run the two-stage pipeline, mapping stage failures to placeholders
    async fn run_pipeline(&self, request: &TripRequest) -> PackingList {
        let phase = Self::transition(ChecklistPhase::Idle, ChecklistPhase::FetchingWeather);

        let snapshot = match self.weather.current_conditions(request.location()).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                Self::transition(phase, ChecklistPhase::Failed);
                return PackingList::placeholder(WEATHER_FAILURE_MESSAGE);
            },
        };

        let phase = Self::transition(phase, ChecklistPhase::FetchingRecommendations);

        let prompt = Self::build_prompt(request, &snapshot);
        let completion = match self.completion.complete(&prompt).await {
            Ok(completion) => completion,
            Err(e) => {
                warn!(error = %e, "Recommendation request failed");
                Self::transition(phase, ChecklistPhase::Failed);
                return PackingList::placeholder(RECOMMENDATION_FAILURE_MESSAGE);
            },
        };

        let mut items = Self::split_items(&completion.content);
        if completion.truncated && self.truncation == TruncationPolicy::DropPartial {
            debug!("Dropping trailing item of a truncated completion");
            items.pop();
        }

        Self::transition(phase, ChecklistPhase::Done);
        PackingList::generated(items)
    }

    /// Log a phase transition and return the new phase
    fn transition(from: ChecklistPhase, to: ChecklistPhase) -> ChecklistPhase {
        debug!(?from, ?to, "Checklist phase transition");
        to
    }

    /// Build the recommendation prompt
    ///
    /// Embeds all five parameters verbatim and always requests exactly 15
    /// comma-separated unnumbered items with "Passport" first.
    #[must_use]
    pub fn build_prompt(request: &TripRequest, snapshot: &WeatherSnapshot) -> String {
        format!(
            "Generate a packing list of 15 items for a {location} trip with {weather} and \
             a temperature of {temperature}°C for {trip_type} for {duration} days. \
             Provide a simple list of items without any additional explanation. \
             Separate the items with commas and do not number them. \
             Capitalize first letter for each item. \
             Have passport as the first item in any case",
            location = request.location(),
            weather = snapshot.description,
            temperature = snapshot.temperature_celsius,
            trip_type = request.trip_type(),
            duration = request.duration_days(),
        )
    }

    /// Split a completion into list items
    ///
    /// Trims the surrounding whitespace, then splits on a comma followed by
    /// optional whitespace, or on a newline. This is a best-effort adapter:
    /// it does not verify that 15 items came back, strip numbering the
    /// provider was told not to emit, or re-enforce "Passport" first.
    /// Consumers must tolerate fewer or more items and a missing "Passport".
    #[must_use]
    pub fn split_items(text: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut current = String::new();
        let mut chars = text.trim().chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                ',' => {
                    items.push(std::mem::take(&mut current));
                    while chars.next_if(|c| c.is_whitespace()).is_some() {}
                },
                '\n' => items.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        items.push(current);
        items
    }

    /// Check if the weather provider is reachable
    pub async fn weather_available(&self) -> bool {
        self.weather.is_available().await
    }

    /// Check if the completion provider is reachable
    pub async fn completion_available(&self) -> bool {
        self.completion.is_available().await
    }
}
