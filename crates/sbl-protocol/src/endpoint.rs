/// HTTP endpoint paths served by `sbl-server`.
pub mod endpoints {
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
    pub const SESSIONS: &str = "/v1/sessions";
    pub const SESSION: &str = "/v1/sessions/:id";
    pub const RECEIPT: &str = "/v1/sessions/:id/receipt";
    pub const COMMAND: &str = "/v1/sessions/:id/command";
    pub const SUMMARY: &str = "/v1/sessions/:id/summary";
    pub const TRANSCRIPT: &str = "/v1/sessions/:id/transcript";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: super::message::PROTOCOL_VERSION,
        }
    }
}
