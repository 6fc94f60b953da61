//! Solver response decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// The ordered node sequence driven by one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehiclePath {
    /// Vehicle id, as issued in the request (`EV-1`, ...).
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    /// Visited node ids, in order.
    pub path: Vec<String>,
}

impl VehiclePath {
    /// Creates a vehicle path.
    pub fn new<S: Into<String>>(
        vehicle_id: impl Into<String>,
        path: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }
}

/// A decoded solver response.
///
/// Only `path` matters; `msg` is kept for display. Entries of `path` that do
/// not decode as a [`VehiclePath`] are dropped and counted in `skipped`.
///
/// # Examples
///
/// ```
/// use u_evrp::overlay::SolverResponse;
///
/// let r = SolverResponse::from_json(
///     r#"{"path": [{"vehicleId": "EV-1", "path": ["depot-0", "customer-1", "depot-0"]},
///                  {"vehicleId": 7}],
///         "msg": "This is success"}"#,
/// ).unwrap();
/// assert_eq!(r.paths.len(), 1);
/// assert_eq!(r.skipped, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolverResponse {
    /// Well-formed vehicle paths, in response order.
    pub paths: Vec<VehiclePath>,
    /// Number of malformed entries that were dropped.
    pub skipped: usize,
    /// Free-form server message.
    pub msg: Option<String>,
}

impl SolverResponse {
    /// Creates a response from already decoded paths.
    pub fn from_paths(paths: Vec<VehiclePath>) -> Self {
        Self {
            paths,
            ..Self::default()
        }
    }

    /// Decodes a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::MalformedResponse(format!("not JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Decodes an already parsed response.
    ///
    /// Fails with [`Error::MalformedResponse`] when `path` is absent or not a
    /// list, and with [`Error::NetworkFailure`] when the server reported an
    /// `error`.
    pub fn from_value(mut value: Value) -> Result<Self> {
        let Some(object) = value.as_object_mut() else {
            return Err(Error::MalformedResponse("expected a JSON object".into()));
        };
        if let Some(err) = object.get("error") {
            let msg = err.as_str().map_or_else(|| err.to_string(), str::to_string);
            return Err(Error::NetworkFailure(format!("solver reported: {msg}")));
        }
        let msg = object
            .get("msg")
            .and_then(Value::as_str)
            .map(str::to_string);

        let entries = match object.remove("path") {
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(Error::MalformedResponse(format!(
                    "`path` is not a list: {other}"
                )))
            }
            None => return Err(Error::MalformedResponse("missing `path`".into())),
        };

        let mut paths = Vec::with_capacity(entries.len());
        let mut skipped = 0;
        for (i, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<VehiclePath>(entry) {
                Ok(p) => paths.push(p),
                Err(e) => {
                    log::warn!("skipping malformed vehicle entry {i}: {e}");
                    skipped += 1;
                }
            }
        }

        Ok(Self {
            paths,
            skipped,
            msg,
        })
    }
}
