use std::{
    env,
    error::Error,
    fmt,
    io::{self, BufRead, Write},
    process,
};

use ticket_service::{
    services::remote::{ExternalError, LoggingPaymentService, LoggingSeatReservationService},
    ConfigError, InvalidPurchase, PurchaseOrder, PurchaseReceipt, ServiceConfig, TicketService,
};

const CONFIG_ENV: &str = "TICKET_SERVICE_CONFIG";

#[derive(Debug)]
enum GeneralError {
    Invalid(InvalidPurchase),
    External(ExternalError),
    Config(ConfigError),
    Decode(serde_json::Error),
}

impl From<InvalidPurchase> for GeneralError {
    fn from(value: InvalidPurchase) -> Self {
        GeneralError::Invalid(value)
    }
}

impl From<ExternalError> for GeneralError {
    fn from(value: ExternalError) -> Self {
        GeneralError::External(value)
    }
}

impl From<ConfigError> for GeneralError {
    fn from(value: ConfigError) -> Self {
        GeneralError::Config(value)
    }
}

impl From<serde_json::Error> for GeneralError {
    fn from(value: serde_json::Error) -> Self {
        GeneralError::Decode(value)
    }
}

impl fmt::Display for GeneralError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneralError::Invalid(e) => write!(f, "{e}"),
            GeneralError::External(e) => write!(f, "{e}"),
            GeneralError::Config(e) => write!(f, "{e}"),
            GeneralError::Decode(e) => write!(f, "Invalid purchase order: {e}"),
        }
    }
}

impl Error for GeneralError {}

fn load_config() -> Result<ServiceConfig, ConfigError> {
    match env::var(CONFIG_ENV) {
        Ok(path) => {
            log::info!("loading config from {path}");
            ServiceConfig::from_file(path)
        }
        Err(_) => Ok(ServiceConfig::default()),
    }
}

fn process_line<P, S>(
    service: &TicketService<P, S>,
    line: &str,
) -> Result<PurchaseReceipt, GeneralError>
where
    P: ticket_service::PaymentCollaborator<Error = ExternalError>,
    S: ticket_service::SeatCollaborator<Error = ExternalError>,
{
    let order: PurchaseOrder = serde_json::from_str(line)?;
    service.purchase_raw(&order)
}

// one JSON purchase order per line, e.g.
// {"account_id": "1", "tickets": [{"type": "ADULT", "quantity": 2}]}
fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", GeneralError::from(e));
            process::exit(1);
        }
    };
    let service = TicketService::from_config(
        config,
        LoggingPaymentService::default(),
        LoggingSeatReservationService::default(),
    );
    log::debug!("using config {:?}", service.config());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let output = match process_line(&service, &line) {
            Ok(receipt) => serde_json::to_string(&receipt).unwrap_or_else(|e| e.to_string()),
            Err(e) => e.to_string(),
        };
        if writeln!(stdout, "{output}").is_err() {
            break;
        }
    }
}
