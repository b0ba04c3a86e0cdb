pub mod mock;
pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use payloads::{PropertyDetails, PropertyId};
use reqwest::StatusCode;
use rust_decimal::dec;
use std::net::TcpListener;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub use store::PropertyStore;

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ip: "127.0.0.1".into(),
            port: 0,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Read `IP_ADDRESS`, `PORT` and `ALLOWED_ORIGINS`, each optional.
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let port = match var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 5001,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port,
            allowed_origins,
        })
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: PropertyStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
    pub store: PropertyStore,
}

impl TestApp {
    /// Make every subsequent request fail with a 500 until switched off.
    pub fn fail_requests(&self, fail: bool) {
        self.store.set_fail_requests(fail);
    }

    /// Number of API requests the server has handled so far.
    pub fn request_count(&self) -> usize {
        self.store.request_count()
    }

    /// Create the listing used in most tests, checking the echo.
    pub async fn create_test_property(
        &self,
    ) -> anyhow::Result<payloads::Property> {
        let details = property_details_a();
        let created = self.client.create_property(&details).await?;
        assert_eq!(created.name, details.name);
        assert_eq!(created.price, details.price);
        Ok(created)
    }
}

pub async fn spawn_app_on_port(port: u16) -> anyhow::Result<TestApp> {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = PropertyStore::new();
    let mut config = Config {
        port,
        ..Config::default()
    };
    let server = build(&mut config, store.clone())?;
    tokio::spawn(server);

    Ok(TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        store,
    })
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0)
        .await
        .expect("Failed to spawn test app")
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn property_details_a() -> PropertyDetails {
    PropertyDetails {
        name: "Lakeview".into(),
        price: dec!(1200),
        location: "Lakeside".into(),
        bedrooms: 2,
        bathrooms: 1,
        image_url: None,
    }
}

pub fn property_details_b() -> PropertyDetails {
    PropertyDetails {
        name: "Harbor Flat".into(),
        price: dec!(2150.50),
        location: "Pier 4".into(),
        bedrooms: 1,
        bathrooms: 1,
        image_url: Some("https://images.example.com/harbor.jpg".into()),
    }
}

/// Id that no test ever creates.
pub const MISSING_ID: PropertyId = PropertyId(9_999);
