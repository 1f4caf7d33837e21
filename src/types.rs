//! Core data types for the FlightXML2 API.

use crate::client::ClientError;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// FlightXML2 method names, as they appear in the endpoint path and in the
/// `"<Method>Result"` envelope key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    AircraftType,
    AirlineFlightInfo,
    AirlineFlightSchedules,
    AirlineInfo,
    AirlineInsight,
    AirportInfo,
    AllAirlines,
    AllAirports,
    Arrived,
    BlockIdentCheck,
    CountAirportOperations,
    CountAllEnrouteAirlineOperations,
    DecodeFlightRoute,
    DecodeRoute,
    DeleteAlert,
    Departed,
    Enroute,
    FleetArrived,
    FleetScheduled,
    FlightInfo,
    FlightInfoEx,
    GetAlerts,
    GetFlightId,
    GetHistoricalTrack,
    GetLastTrack,
    InFlightInfo,
    InboundFlightInfo,
    LatLongsToDistance,
    LatLongsToHeading,
    MapFlight,
    MapFlightEx,
    Metar,
    MetarEx,
    NTaf,
    RegisterAlertEndpoint,
    RoutesBetweenAirports,
    RoutesBetweenAirportsEx,
    Scheduled,
    Search,
    SearchBirdseyeInFlight,
    SearchBirdseyePositions,
    SearchCount,
    SetAlert,
    SetMaximumResultSize,
    Taf,
    TailOwner,
    ZipcodeInfo,
}

impl Method {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AircraftType => "AircraftType",
            Self::AirlineFlightInfo => "AirlineFlightInfo",
            Self::AirlineFlightSchedules => "AirlineFlightSchedules",
            Self::AirlineInfo => "AirlineInfo",
            Self::AirlineInsight => "AirlineInsight",
            Self::AirportInfo => "AirportInfo",
            Self::AllAirlines => "AllAirlines",
            Self::AllAirports => "AllAirports",
            Self::Arrived => "Arrived",
            Self::BlockIdentCheck => "BlockIdentCheck",
            Self::CountAirportOperations => "CountAirportOperations",
            Self::CountAllEnrouteAirlineOperations => "CountAllEnrouteAirlineOperations",
            Self::DecodeFlightRoute => "DecodeFlightRoute",
            Self::DecodeRoute => "DecodeRoute",
            Self::DeleteAlert => "DeleteAlert",
            Self::Departed => "Departed",
            Self::Enroute => "Enroute",
            Self::FleetArrived => "FleetArrived",
            Self::FleetScheduled => "FleetScheduled",
            Self::FlightInfo => "FlightInfo",
            Self::FlightInfoEx => "FlightInfoEx",
            Self::GetAlerts => "GetAlerts",
            Self::GetFlightId => "GetFlightID",
            Self::GetHistoricalTrack => "GetHistoricalTrack",
            Self::GetLastTrack => "GetLastTrack",
            Self::InFlightInfo => "InFlightInfo",
            Self::InboundFlightInfo => "InboundFlightInfo",
            Self::LatLongsToDistance => "LatLongsToDistance",
            Self::LatLongsToHeading => "LatLongsToHeading",
            Self::MapFlight => "MapFlight",
            Self::MapFlightEx => "MapFlightEx",
            Self::Metar => "Metar",
            Self::MetarEx => "MetarEx",
            Self::NTaf => "NTaf",
            Self::RegisterAlertEndpoint => "RegisterAlertEndpoint",
            Self::RoutesBetweenAirports => "RoutesBetweenAirports",
            Self::RoutesBetweenAirportsEx => "RoutesBetweenAirportsEx",
            Self::Scheduled => "Scheduled",
            Self::Search => "Search",
            Self::SearchBirdseyeInFlight => "SearchBirdseyeInFlight",
            Self::SearchBirdseyePositions => "SearchBirdseyePositions",
            Self::SearchCount => "SearchCount",
            Self::SetAlert => "SetAlert",
            Self::SetMaximumResultSize => "SetMaximumResultSize",
            Self::Taf => "Taf",
            Self::TailOwner => "TailOwner",
            Self::ZipcodeInfo => "ZipcodeInfo",
        }
    }

    /// Key the server wraps this method's payload under.
    pub fn result_key(&self) -> String {
        format!("{}Result", self.as_str())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic filter for airport board queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrafficFilter {
    /// General aviation only.
    Ga,
    /// Airline traffic only.
    Airline,
    /// No filtering; the parameter is left out of the request.
    #[default]
    All,
}

impl TrafficFilter {
    pub const fn as_param(&self) -> Option<&'static str> {
        match self {
            Self::Ga => Some("ga"),
            Self::Airline => Some("airline"),
            Self::All => None,
        }
    }
}

/// Report kinds for `AirlineInsight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum InsightReport {
    /// Alternate route popularity with fares
    AlternateRoutePopularity = 1,
    /// Percentage of scheduled flights that are actually flown
    #[default]
    PercentageScheduledActuallyFlown = 2,
    /// Passenger load factor of flights that are actually flown
    PassengerLoadFactor = 3,
    /// Carriers by most cargo weight
    CarriersByCargoWeight = 4,
}

impl InsightReport {
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for InsightReport {
    type Error = ClientError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Self::AlternateRoutePopularity),
            2 => Ok(Self::PercentageScheduledActuallyFlown),
            3 => Ok(Self::PassengerLoadFactor),
            4 => Ok(Self::CarriersByCargoWeight),
            other => Err(ClientError::InvalidArgument(format!(
                "report type must be 1-4, got {}",
                other
            ))),
        }
    }
}

/// Aircraft type description, e.g. `GALX` -> IAI Gulfstream G200 twin-jet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    pub manufacturer: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Airport details returned by `AirportInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone, usually with a leading colon (`:America/Chicago`).
    pub timezone: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AirportInfo {
    /// Timezone identifier without the leading colon.
    pub fn timezone_name(&self) -> &str {
        self.timezone.trim_start_matches(':')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineInfo {
    pub name: String,
    pub shortname: String,
    pub callsign: String,
    pub location: String,
    pub country: String,
    pub url: String,
    pub phone: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Gate, baggage and meal details for a commercial flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineFlightInfo {
    #[serde(rename = "faFlightID")]
    pub fa_flight_id: String,
    pub ident: String,
    #[serde(rename = "thisAircraftTail")]
    pub tail_number: String,
    pub meal_service: String,
    pub gate_orig: String,
    pub gate_dest: String,
    pub terminal_orig: String,
    pub terminal_dest: String,
    pub bag_claim: String,
    pub seats_cabin_first: i64,
    pub seats_cabin_business: i64,
    pub seats_cabin_coach: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One published airline schedule entry.
///
/// `departuretime` and `arrivaltime` are the raw epoch seconds from the wire;
/// `departure_time` and `arrival_time` are filled in by [`FlightSchedule::decode_times`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSchedule {
    pub ident: String,
    pub actual_ident: String,
    pub departuretime: Option<i64>,
    pub arrivaltime: Option<i64>,
    pub origin: String,
    pub destination: String,
    pub aircrafttype: String,
    pub meal_service: String,
    pub seats_cabin_first: i64,
    pub seats_cabin_business: i64,
    pub seats_cabin_coach: i64,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlightSchedule {
    /// Populate the calendar fields from the raw epoch fields.
    pub fn decode_times(&mut self) -> Result<(), ClientError> {
        self.departure_time = self
            .departuretime
            .map(timestamp::from_epoch_seconds)
            .transpose()?;
        self.arrival_time = self
            .arrivaltime
            .map(timestamp::from_epoch_seconds)
            .transpose()?;
        Ok(())
    }
}

/// Aircraft counts for a single airport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportOperations {
    pub enroute: i64,
    pub departed: i64,
    pub scheduled_departures: i64,
    pub scheduled_arrivals: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrouteAirlineCount {
    pub icao: String,
    pub name: String,
    pub enroute: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailOwner {
    pub owner: String,
    pub location: String,
    pub location2: String,
    pub website: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipcodeInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub county: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed METAR observation. Fields beyond the core ones stay in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetarReport {
    pub airport: String,
    pub time: Option<i64>,
    pub conditions: String,
    pub raw_data: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetarReport {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.time.and_then(|t| timestamp::from_epoch_seconds(t).ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetarReports {
    pub next_offset: i64,
    pub metar: Vec<MetarReport>,
}

/// Extended terminal area forecast (`NTaf`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalForecast {
    pub airport: String,
    #[serde(rename = "timeString")]
    pub time_string: String,
    pub forecast: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_names() {
        assert_eq!(Method::GetFlightId.as_str(), "GetFlightID");
        assert_eq!(Method::NTaf.to_string(), "NTaf");
        assert_eq!(Method::AirportInfo.result_key(), "AirportInfoResult");
    }

    #[test]
    fn test_insight_report_codes() {
        assert_eq!(InsightReport::default().code(), 2);
        for code in 1..=4u8 {
            assert_eq!(InsightReport::try_from(code).unwrap().code(), code);
        }
        assert!(InsightReport::try_from(5).is_err());
    }

    #[test]
    fn test_traffic_filter_param() {
        assert_eq!(TrafficFilter::Ga.as_param(), Some("ga"));
        assert_eq!(TrafficFilter::Airline.as_param(), Some("airline"));
        assert_eq!(TrafficFilter::default().as_param(), None);
    }

    #[test]
    fn test_airport_info_timezone() {
        let info: AirportInfo = serde_json::from_value(json!({
            "name": "Nashville Intl",
            "location": "Nashville, TN",
            "latitude": 36.1244722,
            "longitude": -86.6781944,
            "timezone": ":America/Chicago"
        }))
        .unwrap();
        assert_eq!(info.timezone_name(), "America/Chicago");
        assert!(info.extra.is_empty());
    }

    #[test]
    fn test_aircraft_type_keeps_unknown_fields() {
        let t: AircraftType = serde_json::from_value(json!({
            "manufacturer": "IAI",
            "type": "Gulfstream G200",
            "description": "twin-jet",
            "engines": 2
        }))
        .unwrap();
        assert_eq!(t.type_name, "Gulfstream G200");
        assert_eq!(t.extra.get("engines"), Some(&json!(2)));
    }

    #[test]
    fn test_schedule_decode_times() {
        let mut flight: FlightSchedule = serde_json::from_value(json!({
            "ident": "SWA1234",
            "departuretime": 1709294400,
            "arrivaltime": 1709298000,
            "origin": "KBNA",
            "destination": "KATL"
        }))
        .unwrap();
        assert!(flight.departure_time.is_none());

        flight.decode_times().unwrap();
        assert_eq!(
            flight.departure_time.unwrap().to_rfc3339(),
            "2024-03-01T12:00:00+00:00"
        );
        assert_eq!(
            flight.arrival_time.unwrap().to_rfc3339(),
            "2024-03-01T13:00:00+00:00"
        );
    }

    #[test]
    fn test_schedule_without_raw_times() {
        let mut flight = FlightSchedule::default();
        flight.decode_times().unwrap();
        assert!(flight.departure_time.is_none());
        assert!(flight.arrival_time.is_none());
    }
}
