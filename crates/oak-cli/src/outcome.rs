use crate::CliResult;

use oak_session::ApiOutcome;

use serde::Serialize;
use serde_json::{Value, json};

/// JSON result of one command and whether it succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub success: bool,
    pub body: Value,
}

impl Outcome {
    pub fn success(body: Value) -> Self {
        Self {
            success: true,
            body,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            body: json!({ "success": false, "message": message.into() }),
        }
    }

    /// Wrap a manager result as-is
    pub fn from_result<T: ApiOutcome + Serialize>(result: &T) -> CliResult<Self> {
        Ok(Self {
            success: result.is_success(),
            body: serde_json::to_value(result)?,
        })
    }

    pub fn render(&self, pretty: bool) -> CliResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.body)?
        } else {
            serde_json::to_string(&self.body)?
        };
        Ok(json)
    }
}
