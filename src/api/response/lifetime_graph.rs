use crate::api::response::coerce;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeGraph {
    pub year: Vec<String>,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub total_energy: f64,
    #[serde(deserialize_with = "coerce::f64_from_value")]
    pub average_energy: f64,
    #[serde(deserialize_with = "coerce::f64_vec_from_values")]
    pub energy: Vec<f64>,
}
