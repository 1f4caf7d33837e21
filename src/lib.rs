//! Client for the FlightAware FlightXML2 REST API.
//!
//! This library provides:
//! - Authenticated access to the FlightXML2 JSON endpoint
//! - Typed records for airports, airlines, schedules and weather reports
//! - Unwrapping of the `"<Method>Result"` / `"data"` response envelope
//! - UTC conversion between wire timestamps and `chrono` datetimes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Endpoints  │───▶│   Client    │───▶│  Protocol   │
//! │  (methods)  │    │ (HTTP POST) │    │ (envelope)  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        │                                     │
//!        ▼                                     ▼
//! ┌─────────────┐                       ┌─────────────┐
//! │   Params    │                       │    Types    │
//! │ (form body) │                       │  (records)  │
//! └─────────────┘                       └─────────────┘
//! ```
//!
//! Server-side rejections (an unknown airport code, say) are not errors at
//! the Rust level: they arrive as [`Reply::Error`]. Transport, status and
//! decoding failures are returned as [`ClientError`].
//!
//! # Example
//!
//! ```no_run
//! use flightxml::{ClientConfig, FlightXmlClient, Reply};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FlightXmlClient::new(ClientConfig::new("username", "api_key"))?;
//!
//!     match client.airport_info("KBNA").await? {
//!         Reply::Data(airport) => println!("{} ({})", airport.name, airport.timezone_name()),
//!         Reply::Error(msg) => eprintln!("lookup failed: {}", msg),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod params;
pub mod protocol;
pub mod timestamp;
pub mod types;

pub use client::{ClientConfig, ClientError, FlightXmlClient, DEFAULT_BASE_URL, MAX_RECORD_LENGTH};
pub use params::{Params, ScheduleQuery};
pub use protocol::{unwrap_envelope, Reply};
pub use types::{
    AircraftType, AirlineFlightInfo, AirlineInfo, AirportInfo, AirportOperations,
    EnrouteAirlineCount, FlightSchedule, InsightReport, MetarReport, MetarReports, Method,
    TailOwner, TerminalForecast, TrafficFilter, ZipcodeInfo,
};
