//! Status payload returned by the monitored endpoint.

use serde::Deserialize;

/// Body of the target's status response.
///
/// A body without `ok` decodes as not ok, so an object of the wrong shape is
/// reported unhealthy rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BotStatus {
    #[serde(default)]
    pub ok: bool,

    #[serde(default)]
    pub error_code: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,
}
