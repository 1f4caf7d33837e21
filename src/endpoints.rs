//! FlightXML2 operations.
//!
//! Each method maps to exactly one vendor API method and performs a single
//! POST. Methods the client does not support return
//! [`ClientError::NotImplemented`] without touching the network.

use crate::client::{ClientError, FlightXmlClient};
use crate::params::{Params, ScheduleQuery};
use crate::protocol::Reply;
use crate::types::{
    AircraftType, AirlineFlightInfo, AirlineInfo, AirportInfo, AirportOperations,
    EnrouteAirlineCount, FlightSchedule, InsightReport, MetarReports, Method, TailOwner,
    TerminalForecast, TrafficFilter, ZipcodeInfo,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

impl FlightXmlClient {
    /// Manufacturer, type and description for an aircraft type code such as `GALX`.
    pub async fn aircraft_type(&self, type_code: &str) -> Result<Reply<AircraftType>, ClientError> {
        self.call(Method::AircraftType, Params::new().text("type", type_code))
            .await
    }

    /// Gate, baggage and meal information for a flight.
    ///
    /// `fa_flight_id` is a faFlightID (see [`get_flight_id`](Self::get_flight_id))
    /// or `ident@departureTime`.
    pub async fn airline_flight_info(
        &self,
        fa_flight_id: &str,
    ) -> Result<Reply<AirlineFlightInfo>, ClientError> {
        self.call(
            Method::AirlineFlightInfo,
            Params::new().text("faFlightID", fa_flight_id),
        )
        .await
    }

    /// Published airline schedules between `query.start` and `query.end`.
    ///
    /// Each returned record has `departure_time` and `arrival_time` decoded
    /// from the raw epoch fields. A `how_many` outside `1..=15` is rejected
    /// before any request is sent.
    pub async fn airline_flight_schedules(
        &self,
        query: &ScheduleQuery,
    ) -> Result<Reply<Vec<FlightSchedule>>, ClientError> {
        let params = query.to_params()?;
        let reply: Reply<Vec<FlightSchedule>> =
            self.call(Method::AirlineFlightSchedules, params).await?;

        match reply {
            Reply::Data(mut flights) => {
                for flight in &mut flights {
                    flight.decode_times()?;
                }
                tracing::debug!("Decoded {} scheduled flights", flights.len());
                Ok(Reply::Data(flights))
            }
            Reply::Error(msg) => Ok(Reply::Error(msg)),
        }
    }

    /// Carrier details for an ICAO airline code (`COA`, `SWA`, ...).
    pub async fn airline_info(&self, airline_code: &str) -> Result<Reply<AirlineInfo>, ClientError> {
        self.call(
            Method::AirlineInfo,
            Params::new().text("airlineCode", airline_code),
        )
        .await
    }

    /// Historical booking and fare report for a route. The payload layout
    /// depends on `report`, so it is returned as raw JSON.
    pub async fn airline_insight(
        &self,
        origin: &str,
        destination: &str,
        report: InsightReport,
    ) -> Result<Reply<Value>, ClientError> {
        let params = Params::new()
            .text("origin", origin)
            .text("destination", destination)
            .int("reportType", i64::from(report.code()));

        self.call(Method::AirlineInsight, params).await
    }

    /// Name, location, coordinates and timezone for an airport code.
    ///
    /// An unknown code comes back as [`Reply::Error`], not as `Err`.
    pub async fn airport_info(&self, airport_code: &str) -> Result<Reply<AirportInfo>, ClientError> {
        self.call(
            Method::AirportInfo,
            Params::new().text("airportCode", airport_code),
        )
        .await
    }

    /// ICAO codes of every known airline.
    pub async fn all_airlines(&self) -> Result<Reply<Vec<String>>, ClientError> {
        self.call(Method::AllAirlines, Params::new()).await
    }

    /// Codes of every known airport (FAA LID where no ICAO code exists).
    pub async fn all_airports(&self) -> Result<Reply<Vec<String>>, ClientError> {
        self.call(Method::AllAirports, Params::new()).await
    }

    /// Whether the aircraft is blocked from public tracking.
    pub async fn block_ident_check(&self, ident: &str) -> Result<Reply<bool>, ClientError> {
        let reply: Reply<i64> = self
            .call(Method::BlockIdentCheck, Params::new().text("ident", ident))
            .await?;
        Ok(reply.map(|blocked| blocked != 0))
    }

    pub async fn count_airport_operations(
        &self,
        airport: &str,
    ) -> Result<Reply<AirportOperations>, ClientError> {
        self.call(
            Method::CountAirportOperations,
            Params::new().text("airport", airport),
        )
        .await
    }

    /// Airlines with their current number of flights enroute.
    pub async fn count_all_enroute_airline_operations(
        &self,
    ) -> Result<Reply<Vec<EnrouteAirlineCount>>, ClientError> {
        self.call(Method::CountAllEnrouteAirlineOperations, Params::new())
            .await
    }

    /// faFlightID for a flight, given its ident and exact scheduled or actual
    /// departure time.
    pub async fn get_flight_id(
        &self,
        ident: &str,
        departure: &DateTime<Utc>,
    ) -> Result<Reply<String>, ClientError> {
        let params = Params::new()
            .text("ident", ident)
            .timestamp("departureTime", departure);

        self.call(Method::GetFlightId, params).await
    }

    /// Latest raw METAR for an airport.
    pub async fn metar(&self, airport: &str) -> Result<Reply<String>, ClientError> {
        self.call(Method::Metar, Params::new().text("airport", airport))
            .await
    }

    /// Parsed METAR reports for an airport.
    pub async fn metar_ex(&self, airport: &str) -> Result<Reply<MetarReports>, ClientError> {
        self.call(Method::MetarEx, Params::new().text("airport", airport))
            .await
    }

    /// Terminal area forecast as a single text block.
    pub async fn taf(&self, airport: &str) -> Result<Reply<String>, ClientError> {
        self.call(Method::Taf, Params::new().text("airport", airport))
            .await
    }

    /// Terminal area forecast split into lines.
    pub async fn ntaf(&self, airport: &str) -> Result<Reply<TerminalForecast>, ClientError> {
        self.call(Method::NTaf, Params::new().text("airport", airport))
            .await
    }

    /// Registered owner of an aircraft, by tail number or flight ident.
    pub async fn tail_owner(&self, ident: &str) -> Result<Reply<TailOwner>, ClientError> {
        self.call(Method::TailOwner, Params::new().text("ident", ident))
            .await
    }

    /// Location details for a five-digit US zipcode.
    pub async fn zipcode_info(&self, zipcode: &str) -> Result<Reply<ZipcodeInfo>, ClientError> {
        self.call(Method::ZipcodeInfo, Params::new().text("zipcode", zipcode))
            .await
    }

    // Unsupported methods

    pub async fn arrived(
        &self,
        _airport: &str,
        _how_many: u32,
        _filter: TrafficFilter,
        _offset: u32,
    ) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::Arrived)
    }

    pub async fn departed(
        &self,
        _airport: &str,
        _how_many: u32,
        _filter: TrafficFilter,
        _offset: u32,
    ) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::Departed)
    }

    pub async fn flight_info(&self, _ident: &str, _how_many: u32) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::FlightInfo)
    }

    pub async fn decode_flight_route(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::DecodeFlightRoute)
    }

    pub async fn decode_route(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::DecodeRoute)
    }

    pub async fn enroute(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::Enroute)
    }

    pub async fn fleet_arrived(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::FleetArrived)
    }

    pub async fn fleet_scheduled(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::FleetScheduled)
    }

    pub async fn flight_info_ex(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::FlightInfoEx)
    }

    pub async fn get_historical_track(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::GetHistoricalTrack)
    }

    pub async fn get_last_track(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::GetLastTrack)
    }

    pub async fn inbound_flight_info(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::InboundFlightInfo)
    }

    pub async fn in_flight_info(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::InFlightInfo)
    }

    pub async fn lat_lng_to_distance(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::LatLongsToDistance)
    }

    pub async fn lat_lng_to_heading(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::LatLongsToHeading)
    }

    pub async fn map_flight(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::MapFlight)
    }

    pub async fn map_flight_ex(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::MapFlightEx)
    }

    pub async fn routes_between_airports(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::RoutesBetweenAirports)
    }

    pub async fn routes_between_airports_ex(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::RoutesBetweenAirportsEx)
    }

    pub async fn scheduled(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::Scheduled)
    }

    pub async fn search(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::Search)
    }

    pub async fn search_birdseye_in_flight(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::SearchBirdseyeInFlight)
    }

    pub async fn search_birdseye_positions(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::SearchBirdseyePositions)
    }

    pub async fn search_count(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::SearchCount)
    }

    pub async fn set_maximum_result_size(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::SetMaximumResultSize)
    }

    pub async fn get_alerts(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::GetAlerts)
    }

    pub async fn delete_alert(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::DeleteAlert)
    }

    pub async fn set_alert(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::SetAlert)
    }

    pub async fn register_alert_endpoint(&self) -> Result<Reply<Value>, ClientError> {
        self.not_implemented(Method::RegisterAlertEndpoint)
    }
}
