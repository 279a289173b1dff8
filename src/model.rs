use chrono::NaiveDateTime;

type KWh = f64;

#[derive(Debug, Clone)]
pub struct Api {
    pub base_url: String,
    pub language: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoggedInApi {
    pub base_url: String,
    pub language: String,
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct Inverter {
    pub id: String,
    pub name: Option<String>,
    pub inverter_type: String,
    pub system_id: String,
    pub communication_status: u32,
    pub running_status: u32,
}

#[derive(Debug, Clone)]
pub struct InverterStatus {
    pub communication_status: u32,
    pub communication_delay_status: u32,
}

#[derive(Debug, Clone)]
pub struct InverterStatistics {
    pub last_report_datetime: NaiveDateTime,
    pub last_communication_status: u32,
    pub last_running_status: Option<u32>,
    pub last_power: f64,
    pub running_duration: u64,
    pub today_energy: KWh,
    pub month_energy: KWh,
    pub lifetime_energy: KWh,
    pub today_co2: f64,
    pub month_co2: f64,
    pub lifetime_co2: f64,
}

#[derive(Debug, Clone)]
pub struct InverterRealtime {
    pub id: String,
    pub inverter_type: String,
    pub communication_status: u32,
    pub running_status: u32,
    pub running_duration: u64,
    pub power: u32,
    pub energy: KWh,
}

#[derive(Debug, Clone)]
pub struct Graph {
    pub peak_power: Option<f64>,
    pub total_energy: KWh,
    pub time: Vec<String>,
    pub power: Vec<f64>,
    pub energy: Vec<KWh>,
}

#[derive(Debug, Clone)]
pub struct LifetimeGraph {
    pub year: Vec<String>,
    pub total_energy: KWh,
    pub average_energy: KWh,
    pub energy: Vec<KWh>,
}
