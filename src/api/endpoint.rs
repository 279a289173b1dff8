pub type Endpoint = str;

pub const LOGIN: &Endpoint = "/api/token/generateToken/user/login";
pub const EZ_INVERTER: &Endpoint = "/aps-api-web/api/v2/data/device/ezInverter";
