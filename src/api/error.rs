use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use serde_json::Value;
use std::io::Cursor;

#[derive(Debug, Clone)]
pub enum Error {
    /// Vendor code 2006: credentials rejected by the EMA cloud.
    WrongLogin,
    /// Vendor code 1001: the inverter has not reported recently.
    DeviceOffline,
    /// Non-success HTTP status, or any other non-zero vendor code. Carries
    /// the HTTP status plus, when the body was readable, the vendor code and
    /// the full response body.
    UnknownError(u16, Option<i64>, Option<Value>),
    InvalidArguments(String),
    ApiError(String),
    UnexpectedApiResponse,
    InvalidResponse(String, String),
    InternalError,
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        match self {
            Error::WrongLogin => {
                let error = String::from("<html><body><h3>403 Forbidden</h3>EMA cloud rejected the configured credentials (code 2006)</body></html>");
                Response::build()
                    .status(Status::Forbidden)
                    .sized_body(error.len(), Cursor::new(error))
                    .header(ContentType::new("text", "html"))
                    .ok()
            }
            Error::DeviceOffline => {
                let error = String::from("<html><body><h3>503 Service Unavailable</h3>EMA cloud reports the inverter as offline (code 1001)</body></html>");
                Response::build()
                    .status(Status::ServiceUnavailable)
                    .sized_body(error.len(), Cursor::new(error))
                    .header(ContentType::new("text", "html"))
                    .ok()
            }
            _ => {
                let error = format!(
                    "<html><body><h3>Unknown exception</h3><code>{:?}</code></body></html>",
                    self
                );
                Response::build()
                    .status(Status::InternalServerError)
                    .sized_body(error.len(), Cursor::new(error))
                    .header(ContentType::new("text", "html"))
                    .ok()
            }
        }
    }
}
