use num_derive::FromPrimitive;

/* Application-level result code embedded in every EMA response body,
 * independent of the HTTP status. Codes outside this set are reported
 * through `Error::UnknownError` together with the raw body. */
#[derive(Debug, Clone, Copy, PartialEq, FromPrimitive)]
pub enum ResponseCode {
    Ok = 0,
    DeviceOffline = 1001,
    WrongLogin = 2006,
}
