//! Line protocol: one JSON request per input line, one JSON response per
//! output line, in order.

use std::io::{self, BufRead, Write};
use serde::Serialize;
use tracing::{debug, info, warn};
use readable_core::ReadableError;

use crate::request::{handle, Conversion, Request};

#[derive(Debug, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(flatten)]
    pub result: Option<Conversion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReadableError>,
}

impl Response {
    pub fn success(result: Conversion) -> Self {
        Response { ok: true, result: Some(result), error: None }
    }

    pub fn failure(error: ReadableError) -> Self {
        Response { ok: false, result: None, error: Some(error) }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Conversion, ReadableError>> for Response {
    fn from(result: Result<Conversion, ReadableError>) -> Self {
        match result {
            Ok(conversion) => Response::success(conversion),
            Err(error) => Response::failure(error),
        }
    }
}

fn respond(line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(&request).into(),
        Err(e) => {
            warn!(error = %e, "malformed request");
            Response::failure(ReadableError::parameter("malformed request").with_value(e.to_string()))
        }
    }
}

/// Answer requests until the input closes; returns the number answered
pub fn serve<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<usize> {
    info!("ready, waiting for requests");

    let mut answered = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "received request");
        let response = respond(line);
        let json = response.to_json().map_err(io::Error::other)?;

        writeln!(writer, "{}", json)?;
        writer.flush()?;
        answered += 1;
    }

    info!(answered, "input closed, shutting down");
    Ok(answered)
}
