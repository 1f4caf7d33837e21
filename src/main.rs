//! FlightXML2 command-line client
//!
//! Runs a single API call and prints the result as JSON.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use flightxml::{
    ClientConfig, FlightXmlClient, InsightReport, Reply, ScheduleQuery, DEFAULT_BASE_URL,
    MAX_RECORD_LENGTH,
};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "flightxml")]
#[command(about = "FlightAware FlightXML2 API client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// FlightAware username
    #[arg(short, long, env = "FLIGHTXML_USERNAME")]
    username: String,

    /// FlightXML API key
    #[arg(short = 'k', long, env = "FLIGHTXML_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API endpoint root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe an aircraft type (e.g. GALX)
    AircraftType { type_code: String },

    /// Gate, baggage and meal info for a faFlightID
    AirlineFlightInfo { fa_flight_id: String },

    /// Carrier details for an ICAO airline code
    AirlineInfo { airline: String },

    /// Historical booking report for a route
    AirlineInsight {
        origin: String,
        destination: String,

        /// 1=alternate routes, 2=scheduled actually flown, 3=load factor, 4=cargo weight
        #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=4))]
        report: u8,
    },

    /// Airport name, location and timezone
    AirportInfo { airport: String },

    /// List all airline codes
    AllAirlines,

    /// List all airport codes
    AllAirports,

    /// Check whether an aircraft is blocked from tracking
    BlockIdentCheck { ident: String },

    /// Count flights enroute to, departed from and scheduled at an airport
    CountAirportOperations { airport: String },

    /// Count enroute flights per airline
    CountEnroute,

    /// Look up the faFlightID of a flight
    FlightId {
        ident: String,

        /// Departure time (RFC 3339, e.g. 2024-03-01T12:00:00Z)
        departure: DateTime<Utc>,
    },

    /// Latest raw METAR
    Metar { airport: String },

    /// Parsed METAR reports
    MetarEx { airport: String },

    /// Terminal area forecast
    Taf { airport: String },

    /// Terminal area forecast, one line per entry
    Ntaf { airport: String },

    /// Published airline schedules
    Schedules {
        /// Earliest departure (RFC 3339)
        #[arg(long)]
        start: DateTime<Utc>,

        /// Latest departure (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,

        #[arg(long)]
        origin: Option<String>,

        #[arg(long)]
        destination: Option<String>,

        #[arg(long)]
        airline: Option<String>,

        #[arg(long)]
        flight_number: Option<String>,

        /// Records per page (1-15)
        #[arg(long, default_value_t = MAX_RECORD_LENGTH)]
        how_many: u32,

        #[arg(long, default_value = "0")]
        offset: u32,
    },

    /// Registered owner of an aircraft
    TailOwner { ident: String },

    /// Location details for a US zipcode
    ZipcodeInfo { zipcode: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::new(cli.username, cli.api_key).with_base_url(cli.base_url);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    tracing::debug!("Using endpoint {}", config.base_url);

    let client = FlightXmlClient::new(config)?;

    let succeeded = match cli.command {
        Commands::AircraftType { type_code } => print_reply(client.aircraft_type(&type_code).await?)?,
        Commands::AirlineFlightInfo { fa_flight_id } => {
            print_reply(client.airline_flight_info(&fa_flight_id).await?)?
        }
        Commands::AirlineInfo { airline } => print_reply(client.airline_info(&airline).await?)?,
        Commands::AirlineInsight {
            origin,
            destination,
            report,
        } => {
            let report = InsightReport::try_from(report)?;
            print_reply(client.airline_insight(&origin, &destination, report).await?)?
        }
        Commands::AirportInfo { airport } => print_reply(client.airport_info(&airport).await?)?,
        Commands::AllAirlines => print_reply(client.all_airlines().await?)?,
        Commands::AllAirports => print_reply(client.all_airports().await?)?,
        Commands::BlockIdentCheck { ident } => print_reply(client.block_ident_check(&ident).await?)?,
        Commands::CountAirportOperations { airport } => {
            print_reply(client.count_airport_operations(&airport).await?)?
        }
        Commands::CountEnroute => print_reply(client.count_all_enroute_airline_operations().await?)?,
        Commands::FlightId { ident, departure } => {
            print_reply(client.get_flight_id(&ident, &departure).await?)?
        }
        Commands::Metar { airport } => print_reply(client.metar(&airport).await?)?,
        Commands::MetarEx { airport } => print_reply(client.metar_ex(&airport).await?)?,
        Commands::Taf { airport } => print_reply(client.taf(&airport).await?)?,
        Commands::Ntaf { airport } => print_reply(client.ntaf(&airport).await?)?,
        Commands::Schedules {
            start,
            end,
            origin,
            destination,
            airline,
            flight_number,
            how_many,
            offset,
        } => {
            let query = ScheduleQuery {
                start,
                end,
                origin,
                destination,
                airline,
                flight_number,
                how_many,
                offset,
            };
            print_reply(client.airline_flight_schedules(&query).await?)?
        }
        Commands::TailOwner { ident } => print_reply(client.tail_owner(&ident).await?)?,
        Commands::ZipcodeInfo { zipcode } => print_reply(client.zipcode_info(&zipcode).await?)?,
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Print a reply as pretty JSON. Returns false for a server-side error.
fn print_reply<T: Serialize>(reply: Reply<T>) -> Result<bool, serde_json::Error> {
    match reply {
        Reply::Data(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(true)
        }
        Reply::Error(msg) => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "error": msg }))?);
            Ok(false)
        }
    }
}
