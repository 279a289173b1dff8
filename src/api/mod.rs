pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
pub use error::Error;
use response::graph::Graph;
use response::inverter_realtime::InverterRealtime;
use response::inverter_statistics::InverterStatistics;
use response::inverter_status::InverterStatus;
use response::lifetime_graph::LifetimeGraph;
use response::list_inverters::ListInverters;
use response::login::Login;
use response::response_code::ResponseCode;
use serde_json::Value;

use std::collections::HashMap;
use std::time::Duration;

/* Credentials of the vendor's own mobile app, sent alongside every login. */
const APP_ID: &str = "4029817264d4821d0164d4821dd80015";
const APP_SECRET: &str = "EZAd2023";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn api(
    base_url: String,
    language: String,
    username: String,
    password: String,
) -> model::Api {
    model::Api {
        base_url,
        language,
        username,
        password,
    }
}

/// Resume an already-established session from stored tokens instead of logging in
/// again. `user_id` is required because inverter listing is scoped to the account id.
pub fn authenticated_api(
    base_url: String,
    language: String,
    access_token: String,
    refresh_token: String,
    user_id: String,
) -> model::LoggedInApi {
    model::LoggedInApi {
        base_url,
        language,
        access_token,
        refresh_token,
        user_id,
    }
}

/* Every call gets its own client, used for a single request. */
fn http_client() -> Result<reqwest::Client, Error> {
    reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .or(Err(Error::InternalError))
}

/// Map transport-level failure to Error
fn map_transport_err(error: reqwest::Error) -> Error {
    match error.status() {
        Some(status) => Error::UnknownError(status.as_u16(), None, None),
        None => Error::ApiError(error.to_string()),
    }
}

/// Read the body of an HTTP response as JSON. Non-2xx responses map to Error without
/// touching the body.
async fn process_response(response: reqwest::Response) -> Result<Value, Error> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::UnknownError(status.as_u16(), None, None));
    }

    response
        .text()
        .await
        .map_err(|e| Error::ApiError(format!("Error reading API response: {}", e)))
        .map(|s| {
            log::trace!("response_text: {}", s);
            serde_json::from_str::<Value>(&s).map_err(|e| Error::InvalidResponse(s, e.to_string()))
        })?
        .map(|value| unwrap_envelope(status.as_u16(), value))?
}

/// Process value of a valid HTTP response (2xx) to identify API-level errors reported
/// through the `code` field of the response envelope. Return a specific error for the
/// known codes or carry the unwrapped `data` forward on success.
fn unwrap_envelope(http_status: u16, mut value: Value) -> Result<Value, Error> {
    let code = value.get("code").and_then(Value::as_i64);

    match code.and_then(num::FromPrimitive::from_i64) {
        Some(ResponseCode::Ok) => Ok(value["data"].take()),
        Some(ResponseCode::WrongLogin) => Err(Error::WrongLogin),
        Some(ResponseCode::DeviceOffline) => Err(Error::DeviceOffline),
        None => match code {
            /* e.g. {"code":2015,"data":null} for an inverter the account does not own */
            Some(code) => Err(Error::UnknownError(http_status, Some(code), Some(value))),
            None => Err(Error::InvalidResponse(
                value.to_string(),
                String::from("missing response code"),
            )),
        },
    }
}

pub async fn login(api: &model::Api) -> Result<model::LoggedInApi, Error> {
    let client = http_client()?;
    let url = format!("{}{}?language={}", api.base_url, endpoint::LOGIN, api.language);

    let request_body = HashMap::from([
        ("language", api.language.to_owned()),
        ("username", api.username.to_owned()),
        ("password", api.password.to_owned()),
        ("app_id", String::from(APP_ID)),
        ("app_secret", String::from(APP_SECRET)),
    ]);

    client
        .post(url)
        .form(&request_body)
        .send()
        .await
        .map_err(map_transport_err)
        .map(process_response)?
        .await
        .map(serde_json::from_value::<Login>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|login| model::LoggedInApi {
            base_url: api.base_url.to_owned(),
            language: api.language.to_owned(),
            access_token: login.access_token,
            refresh_token: login.refresh_token,
            user_id: login.user_id,
        })
}

async fn get(api: &model::LoggedInApi, path: String) -> Result<Value, Error> {
    let url = format!("{}{}", api.base_url, path);
    log::trace!("GET {}", url);

    http_client()?
        .get(url)
        .header("Authorization", format!("Bearer {}", api.access_token))
        .send()
        .await
        .map_err(map_transport_err)
        .map(process_response)?
        .await
}

/// List all inverters registered under the account.
pub async fn list_inverters(api: &model::LoggedInApi) -> Result<Vec<model::Inverter>, Error> {
    let path = format!(
        "{}/list/{}?language={}&systemId={}",
        endpoint::EZ_INVERTER,
        api.user_id,
        api.language,
        api.user_id
    );

    get(api, path)
        .await
        .map(serde_json::from_value::<ListInverters>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|response| {
            let inverters = response
                .inverter
                .into_iter()
                .map(|inv| model::Inverter {
                    id: inv.inverter_dev_id,
                    name: inv.device_name,
                    inverter_type: inv.inverter_type,
                    system_id: inv.system_id,
                    communication_status: inv.communication_status,
                    running_status: inv.running_status,
                })
                .collect();
            Ok(inverters)
        })?
}

pub async fn inverter_status(
    api: &model::LoggedInApi,
    inverter: &str,
) -> Result<model::InverterStatus, Error> {
    let path = format!(
        "{}/status/{}?language={}",
        endpoint::EZ_INVERTER,
        inverter,
        api.language
    );

    get(api, path)
        .await
        .map(serde_json::from_value::<InverterStatus>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|status| model::InverterStatus {
            communication_status: status.communication_status,
            communication_delay_status: status.communication_delay_status,
        })
}

/// Read counters accumulated since the inverter last reported, including energy and
/// CO2 avoidance totals for today, the running month and the inverter's lifetime.
pub async fn inverter_statistics(
    api: &model::LoggedInApi,
    inverter: &str,
) -> Result<model::InverterStatistics, Error> {
    let path = format!(
        "{}/statistic/{}?language={}",
        endpoint::EZ_INVERTER,
        inverter,
        api.language
    );

    get(api, path)
        .await
        .map(serde_json::from_value::<InverterStatistics>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|statistics| model::InverterStatistics {
            last_report_datetime: statistics.last_report_datetime,
            last_communication_status: statistics.last_communication_status,
            last_running_status: statistics.last_running_status,
            last_power: statistics.last_power,
            running_duration: statistics.running_duration,
            today_energy: statistics.today_energy,
            month_energy: statistics.month_energy,
            lifetime_energy: statistics.lifetime_energy,
            today_co2: statistics.today_co2,
            month_co2: statistics.month_co2,
            lifetime_co2: statistics.lifetime_co2,
        })
}

pub async fn inverter_realtime(
    api: &model::LoggedInApi,
    inverter: &str,
) -> Result<model::InverterRealtime, Error> {
    let path = format!(
        "{}/realTime/{}?language={}",
        endpoint::EZ_INVERTER,
        inverter,
        api.language
    );

    get(api, path)
        .await
        .map(serde_json::from_value::<InverterRealtime>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|realtime| model::InverterRealtime {
            id: realtime.inverter_dev_id,
            inverter_type: realtime.inverter_type,
            communication_status: realtime.communication_status,
            running_status: realtime.running_status,
            running_duration: realtime.running_duration,
            power: realtime.power,
            energy: realtime.energy,
        })
}

/* The cloud expects date components concatenated without zero padding, e.g. year
   2023, month 1, day 4 turns into "202314". */
fn graph_date(
    year: u16,
    month: Option<u8>,
    day: Option<u8>,
) -> Result<(&'static str, String), Error> {
    match (month, day) {
        (None, None) => Ok(("year", format!("{}", year))),
        (Some(month), None) => Ok(("month", format!("{}{}", year, month))),
        (Some(month), Some(day)) => Ok(("day", format!("{}{}{}", year, month, day))),
        (None, Some(_)) => Err(Error::InvalidArguments(String::from(
            "day can't be set if month is unset",
        ))),
    }
}

/// Read the production graph of `inverter` for a whole year, a month or a single day,
/// depending on how far the date is narrowed down. Day graphs also carry the peak
/// power reached over the day.
pub async fn graph(
    api: &model::LoggedInApi,
    inverter: &str,
    year: u16,
    month: Option<u8>,
    day: Option<u8>,
) -> Result<model::Graph, Error> {
    let (range, date) = graph_date(year, month, day)?;
    let path = format!(
        "{}/{}/{}/{}?language={}",
        endpoint::EZ_INVERTER,
        range,
        inverter,
        date,
        api.language
    );

    get(api, path)
        .await
        .map(serde_json::from_value::<Graph>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|graph| model::Graph {
            peak_power: graph.peak_power,
            total_energy: graph.total_energy,
            time: graph.time,
            power: graph.power,
            energy: graph.energy,
        })
}

/// Read the year-by-year production graph covering the inverter's whole lifetime.
pub async fn lifetime_graph(
    api: &model::LoggedInApi,
    inverter: &str,
) -> Result<model::LifetimeGraph, Error> {
    let path = format!(
        "{}/lifetime/{}?language={}",
        endpoint::EZ_INVERTER,
        inverter,
        api.language
    );

    get(api, path)
        .await
        .map(serde_json::from_value::<LifetimeGraph>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|graph| model::LifetimeGraph {
            year: graph.year,
            total_energy: graph.total_energy,
            average_energy: graph.average_energy,
            energy: graph.energy,
        })
}
