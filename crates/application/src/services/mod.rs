//! Application services - Use case implementations

mod checklist_service;

pub use checklist_service::{
    ChecklistPhase, ChecklistService, TruncationPolicy, INTERNAL_FAILURE_MESSAGE,
    RECOMMENDATION_FAILURE_MESSAGE, WEATHER_FAILURE_MESSAGE,
};
