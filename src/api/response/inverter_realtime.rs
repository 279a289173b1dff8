use crate::api::response::coerce;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterRealtime {
    pub communication_status: u32,
    pub running_status: u32,
    pub running_duration: u64,
    #[serde(rename = "inverter_dev_id")]
    pub inverter_dev_id: String,
    #[serde(rename = "type")]
    pub inverter_type: String,
    pub power: u32,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub energy: f64,
}
