use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{ModuleFields, ModuleInfo};

/// Request body for creating or updating a module.
///
/// Missing fields take their zero value; `id` and timestamps sent by the
/// client are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleRequest {
    pub module_name: String,
    pub module_duration: i32,
    pub exam_type: String,
    pub version: String,
}

impl ModuleRequest {
    pub fn into_fields(self) -> ModuleFields {
        ModuleFields {
            module_name: self.module_name,
            module_duration: self.module_duration,
            exam_type: self.exam_type,
            version: self.version,
        }
    }
}

/// Module as returned to clients; timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResponse {
    pub id: i32,
    pub module_name: String,
    pub module_duration: i32,
    pub exam_type: String,
    pub version: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ModuleInfo> for ModuleResponse {
    fn from(module: ModuleInfo) -> Self {
        Self {
            id: module.id,
            module_name: module.module_name,
            module_duration: module.module_duration,
            exam_type: module.exam_type,
            version: module.version,
            created_at: module.created_at.to_jiff(),
            updated_at: module.updated_at.to_jiff(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ignores_server_owned_fields() {
        let request: ModuleRequest = serde_json::from_str(
            r#"{"id":7,"module_name":"CS101","module_duration":12,"exam_type":"written","version":"1.0","created_at":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(request.module_name, "CS101");
        assert_eq!(request.module_duration, 12);
    }

    #[test]
    fn test_request_missing_fields_default_to_zero_values() {
        let request: ModuleRequest = serde_json::from_str(r#"{"module_name":"CS101"}"#).unwrap();

        assert_eq!(request.module_duration, 0);
        assert_eq!(request.exam_type, "");
    }

    #[test]
    fn test_response_serializes_rfc3339_timestamps() {
        let ts: Timestamp = "2024-03-01T12:30:00Z".parse().unwrap();
        let response = ModuleResponse {
            id: 1,
            module_name: "CS101".to_string(),
            module_duration: 12,
            exam_type: "written".to_string(),
            version: "1.0".to_string(),
            created_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["created_at"], "2024-03-01T12:30:00Z");
        assert_eq!(json["module_name"], "CS101");
    }
}
