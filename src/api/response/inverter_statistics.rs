use crate::api::response::coerce;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterStatistics {
    #[serde(deserialize_with = "coerce::datetime_from_value")]
    pub last_report_datetime: NaiveDateTime,
    pub last_communication_status: u32,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub last_power: f64,
    pub running_duration: u64,
    /* Not reported for inverters that never came online. */
    #[serde(default)]
    pub last_running_status: Option<u32>,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub today_energy: f64,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub month_energy: f64,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub lifetime_energy: f64,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub today_co2: f64,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub month_co2: f64,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub lifetime_co2: f64,
}
