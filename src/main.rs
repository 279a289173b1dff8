#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

use apsystems_ema_rs::api;
use apsystems_ema_rs::model::Api;
use config::Config;
use rocket::{Build, Rocket, State};
use std::sync::Mutex;
use std::time::Instant;

mod metrics;

const BASE_URL: &str = "https://app.api.apsystemsema.com:9223";
const LANGUAGE: &str = "de_DE";
/* The cloud refreshes inverter data roughly every 5 minutes. */
const DEFAULT_INTERVAL: i64 = 300;

#[derive(Clone, serde::Deserialize)]
pub struct EmaConfig {
    base_url: String,
    language: String,
    username: String,
    password: String,
    interval: u64,
}

/// Structure containing state for API handlers.
pub struct StateData {
    api: Api,
    interval: u64,
    /// Timestamp of last successful metric collection via `metrics::collect()`
    timestamp: Mutex<Option<Instant>>,
}

impl StateData {
    /// Updates `timestamp` to `now()`.
    fn touch(&self) {
        if let Ok(mut ts) = self.timestamp.lock() {
            *ts = Some(Instant::now());
        } else {
            log::trace!("Unable to lock timestamp mutex, will refresh again")
        }
    }

    /// Checks whether `interval_secs` elapsed since last `touch()`
    fn interval_elapsed(&self, interval_secs: u64) -> bool {
        let elapsed_opt = self
            .timestamp
            .lock()
            .ok()
            .and_then(|a| a.map(|b| b.elapsed().as_secs()));

        if let Some(elapsed) = elapsed_opt {
            elapsed > interval_secs
        } else {
            /* If there is None timestamp/elapsed, always return true to trigger action */
            true
        }
    }
}

pub fn read_settings() -> EmaConfig {
    let mut settings = Config::default();
    settings
        .merge(config::Environment::with_prefix("EMA"))
        .unwrap()
        .set_default("base_url", BASE_URL)
        .unwrap()
        .set_default("language", LANGUAGE)
        .unwrap()
        .set_default("interval", DEFAULT_INTERVAL)
        .unwrap();

    settings.try_into().expect("Configuration error")
}

#[get("/metrics")]
async fn metrics_route(state: &State<StateData>) -> Result<String, api::Error> {
    if state.interval_elapsed(state.interval) {
        metrics::collect(&state.api).await?;
        state.touch();
    } else {
        log::info!("interval time not yet elapsed since last run; returning cached result")
    }
    metrics::read().await
}

#[get("/inverters")]
async fn inverters_route(state: &State<StateData>) -> Result<String, api::Error> {
    let logged_in_api = api::login(&state.api).await?;
    let inverters = api::list_inverters(&logged_in_api).await?;

    Ok(format!("{:#?}", inverters))
}

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let settings = read_settings();
    let api = api::api(
        settings.base_url,
        settings.language,
        settings.username,
        settings.password,
    );
    let state = StateData {
        api,
        interval: settings.interval,
        timestamp: Mutex::new(None),
    };

    rocket::build()
        .manage(state)
        .mount("/", routes![metrics_route, inverters_route])
}
