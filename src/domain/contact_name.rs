use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactName(String);

impl ContactName {
    /// Returns an instance of `ContactName` if the input is non-empty.
    /// Whitespace-only names are kept as they are.
    pub fn parse(name: String) -> Result<ContactName, String> {
        if name.is_empty() {
            return Err("Contact name is empty".to_string());
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
