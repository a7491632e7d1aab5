//! Nexhale backend client
//!
//! Components:
//! - **NexhaleClient**: typed async calls to the REST API
//! - **dto**: request and response bodies
//! - **ClientError**: transport, auth and API failures

mod api;
pub mod dto;
mod error;

pub use api::{ClientConfig, NexhaleClient, DEFAULT_BASE_URL};
pub use dto::{
    AuthResponse, HealthStats, IntakePoint, MonthSelector, QuitPlanResponse, RemoteBrand,
    SmokingLogRequest, StatsSummary, UpdateProfileRequest, UserProfile, VapeLogRequest,
};
pub use error::{ClientError, ClientResult};
