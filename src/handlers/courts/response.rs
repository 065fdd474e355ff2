//! Court response DTOs

use serde::Serialize;

/// Court deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
}
