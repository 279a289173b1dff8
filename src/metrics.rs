use apsystems_ema_rs::api;
use apsystems_ema_rs::api::Error;
use apsystems_ema_rs::model::{Api, Inverter, InverterRealtime, InverterStatistics, LoggedInApi};
use prometheus::{Encoder, GaugeVec, TextEncoder};

lazy_static! {
    static ref INVERTER_POWER_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "inverter_power",
            "current power production reported by inverter (in W)",
        ),
        &["system_id", "inverter_id", "inverter_type",],
    )
    .unwrap();
    static ref INVERTER_RUNNING_STATUS_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "inverter_running_status",
            "running status reported by inverter (1 when producing)",
        ),
        &["system_id", "inverter_id", "inverter_type",],
    )
    .unwrap();
    static ref INVERTER_TODAY_ENERGY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "inverter_today_energy",
            "total amount of energy generated in current day (in kWh)",
        ),
        &["system_id", "inverter_id", "inverter_type",],
    )
    .unwrap();
    static ref INVERTER_MONTH_ENERGY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "inverter_month_energy",
            "total amount of energy generated in current month (in kWh)",
        ),
        &["system_id", "inverter_id", "inverter_type",],
    )
    .unwrap();
    static ref INVERTER_LIFETIME_ENERGY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "inverter_lifetime_energy",
            "total amount of energy generated over inverter lifetime (in kWh)",
        ),
        &["system_id", "inverter_id", "inverter_type",],
    )
    .unwrap();
    static ref INVERTER_LIFETIME_CO2_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "inverter_lifetime_co2",
            "CO2 avoidance accumulated over inverter lifetime (in kg)",
        ),
        &["system_id", "inverter_id", "inverter_type",],
    )
    .unwrap();
}

/// Feed realtime readings of `inverter` to Prometheus metrics.
fn process_realtime(inverter: &Inverter, realtime: &InverterRealtime) {
    INVERTER_POWER_GAUGE
        .with_label_values(&[&inverter.system_id, &inverter.id, &inverter.inverter_type])
        .set(f64::from(realtime.power));

    INVERTER_RUNNING_STATUS_GAUGE
        .with_label_values(&[&inverter.system_id, &inverter.id, &inverter.inverter_type])
        .set(f64::from(realtime.running_status));
}

/// Feed accumulated statistics of `inverter` to Prometheus metrics.
fn process_statistics(inverter: &Inverter, statistics: &InverterStatistics) {
    INVERTER_TODAY_ENERGY_GAUGE
        .with_label_values(&[&inverter.system_id, &inverter.id, &inverter.inverter_type])
        .set(statistics.today_energy);

    INVERTER_MONTH_ENERGY_GAUGE
        .with_label_values(&[&inverter.system_id, &inverter.id, &inverter.inverter_type])
        .set(statistics.month_energy);

    INVERTER_LIFETIME_ENERGY_GAUGE
        .with_label_values(&[&inverter.system_id, &inverter.id, &inverter.inverter_type])
        .set(statistics.lifetime_energy);

    INVERTER_LIFETIME_CO2_GAUGE
        .with_label_values(&[&inverter.system_id, &inverter.id, &inverter.inverter_type])
        .set(statistics.lifetime_co2);
}

/// Iterate through all inverters of the account and collect their readings. An
/// offline inverter only logs a warning, the remaining ones are still collected.
async fn collect_inverters(api: &LoggedInApi) -> Result<(), Error> {
    let inverters = api::list_inverters(api).await?;

    for inverter in inverters {
        match api::inverter_realtime(api, &inverter.id).await {
            Ok(realtime) => process_realtime(&inverter, &realtime),
            /* Inverters without panel power drop off the cloud at dusk. */
            Err(Error::DeviceOffline) => {
                log::warn!("Inverter {} is offline, no realtime readings", inverter.id);
            }
            Err(e) => return Err(e),
        }

        match api::inverter_statistics(api, &inverter.id).await {
            Ok(statistics) => process_statistics(&inverter, &statistics),
            Err(Error::DeviceOffline) => {
                log::warn!("Inverter {} is offline, no statistics", inverter.id);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Collect all supported metrics from `api`, updating Prometheus exporter registry.
pub async fn collect(api: &Api) -> Result<(), Error> {
    let logged_in_api = api::login(api).await?;
    collect_inverters(&logged_in_api).await
}

/// Read metrics from Prometheus exporter registry.
pub async fn read() -> Result<String, Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).or(Err(Error::InternalError))
}
