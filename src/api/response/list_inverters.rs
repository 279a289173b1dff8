use serde::Deserialize;

/* The list endpoint mixes snake_case and camelCase field names. */
#[derive(Deserialize)]
pub struct Data {
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(rename = "communicationStatus")]
    pub communication_status: u32,
    #[serde(rename = "runningStatus")]
    pub running_status: u32,
    pub system_id: String,
    pub inverter_dev_id: String,
    #[serde(rename = "type")]
    pub inverter_type: String,
}

#[derive(Deserialize)]
pub struct ListInverters {
    pub inverter: Vec<Data>,
}
