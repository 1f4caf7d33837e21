//! Request parameters sent as the form-encoded POST body.

use crate::client::{ClientError, MAX_RECORD_LENGTH};
use crate::timestamp;
use chrono::{DateTime, Utc};

/// Ordered `name=value` pairs for one request.
///
/// Absent optional values are never stored, so they are left out of the
/// encoded body instead of being sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((name, value.into()));
        self
    }

    pub fn opt_text(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub fn int(self, name: &'static str, value: i64) -> Self {
        self.text(name, value.to_string())
    }

    pub fn timestamp(self, name: &'static str, value: &DateTime<Utc>) -> Self {
        self.int(name, timestamp::to_epoch_seconds(value))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order, ready for `RequestBuilder::form`.
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Reject page sizes the server would refuse.
///
/// `SetMaximumResultSize` is not supported by this client, so the server-side
/// ceiling is always [`MAX_RECORD_LENGTH`].
pub fn check_how_many(how_many: u32) -> Result<u32, ClientError> {
    if how_many == 0 || how_many > MAX_RECORD_LENGTH {
        return Err(ClientError::InvalidArgument(format!(
            "howMany must be between 1 and {}, got {}",
            MAX_RECORD_LENGTH, how_many
        )));
    }
    Ok(how_many)
}

/// Query for `AirlineFlightSchedules`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleQuery {
    /// Earliest departure to return
    pub start: DateTime<Utc>,
    /// Latest departure to return
    pub end: DateTime<Utc>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub how_many: u32,
    pub offset: u32,
}

impl ScheduleQuery {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            origin: None,
            destination: None,
            airline: None,
            flight_number: None,
            how_many: MAX_RECORD_LENGTH,
            offset: 0,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = Some(airline.into());
        self
    }

    pub fn with_flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = Some(flight_number.into());
        self
    }

    pub fn with_how_many(mut self, how_many: u32) -> Self {
        self.how_many = how_many;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn to_params(&self) -> Result<Params, ClientError> {
        let how_many = check_how_many(self.how_many)?;

        Ok(Params::new()
            .timestamp("startDate", &self.start)
            .timestamp("endDate", &self.end)
            .opt_text("origin", self.origin.as_deref())
            .opt_text("destination", self.destination.as_deref())
            .opt_text("airline", self.airline.as_deref())
            .opt_text("flightno", self.flight_number.as_deref())
            .int("howMany", i64::from(how_many))
            .int("offset", i64::from(self.offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_query() -> ScheduleQuery {
        ScheduleQuery::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_params_preserve_order() {
        let params = Params::new().text("ident", "N12345").int("howMany", 3);
        assert_eq!(
            params.as_pairs(),
            &[("ident", "N12345".to_string()), ("howMany", "3".to_string())]
        );
    }

    #[test]
    fn test_absent_values_omitted() {
        let params = Params::new()
            .opt_text("origin", None)
            .opt_text("destination", Some("KATL"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("origin"), None);
        assert_eq!(params.get("destination"), Some("KATL"));
    }

    #[test]
    fn test_schedule_query_params() {
        let params = sample_query()
            .with_origin("KBNA")
            .with_flight_number("1234")
            .with_offset(15)
            .to_params()
            .unwrap();

        assert_eq!(params.get("startDate"), Some("1709294400"));
        assert_eq!(params.get("endDate"), Some("1709380800"));
        assert_eq!(params.get("origin"), Some("KBNA"));
        assert_eq!(params.get("destination"), None);
        assert_eq!(params.get("flightno"), Some("1234"));
        assert_eq!(params.get("howMany"), Some("15"));
        assert_eq!(params.get("offset"), Some("15"));
    }

    #[test]
    fn test_how_many_bounds() {
        assert_eq!(check_how_many(1).unwrap(), 1);
        assert_eq!(check_how_many(15).unwrap(), 15);
        assert!(matches!(check_how_many(0), Err(ClientError::InvalidArgument(_))));
        assert!(matches!(check_how_many(16), Err(ClientError::InvalidArgument(_))));

        let err = sample_query().with_how_many(40).to_params().unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
}
