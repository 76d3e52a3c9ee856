use serde::Serialize;

/// The maintenance state reported by the status endpoint.
#[derive(Debug, Serialize)]
pub struct MaintenanceStatus {
    /// The configured master switch.
    pub enabled: bool,
    /// Whether maintenance mode is active right now.
    pub active: bool,
}
