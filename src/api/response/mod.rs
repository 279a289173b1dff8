pub mod coerce;
pub mod graph;
pub mod inverter_realtime;
pub mod inverter_statistics;
pub mod inverter_status;
pub mod lifetime_graph;
pub mod list_inverters;
pub mod login;
pub mod response_code;
