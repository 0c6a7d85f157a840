//! Rendering of [`ResponseMessage`] envelopes.
//!
//! The envelope's status picks the HTTP status: `OK` is 200 and `CREATED`
//! is 201.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::domain::{ResponseMessage, ResponseStatus};

fn status_for(status: ResponseStatus) -> StatusCode {
    match status {
        ResponseStatus::Ok => StatusCode::OK,
        ResponseStatus::Created => StatusCode::CREATED,
    }
}

impl<T: Serialize> Responder for ResponseMessage<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(status_for(self.status())).json(self)
    }
}
