use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(message: String) -> Result<ContactMessage, String> {
        if message.is_empty() {
            return Err("Contact message is empty".to_string());
        }

        Ok(Self(message))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
