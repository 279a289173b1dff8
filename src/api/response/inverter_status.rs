use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InverterStatus {
    pub communication_status: u32,
    pub communication_delay_status: u32,
}
