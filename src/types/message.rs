use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello, World!";

/// JSON body shared by `/greet` and `/retrieve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn greeting() -> Self {
        Self::new(GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        assert_eq!(
            serde_json::to_string(&Message::greeting()).unwrap(),
            r#"{"message":"Hello, World!"}"#
        );
    }
}
