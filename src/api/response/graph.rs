use crate::api::response::coerce;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    /* Only present on day graphs. */
    #[serde(default, deserialize_with = "coerce::f64_option_from_value")]
    pub peak_power: Option<f64>,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub total_energy: f64,
    pub time: Vec<String>,
    #[serde(deserialize_with = "coerce::f64_vec_from_values")]
    pub power: Vec<f64>,
    #[serde(deserialize_with = "coerce::f64_vec_from_values")]
    pub energy: Vec<f64>,
}
