use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// A fully-qualified, dot-terminated domain name such as `www.example.com.`.
///
/// The root is the single label `"."`. Names are kept exactly as given;
/// no case folding or IDNA conversion happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn root() -> Self {
        Self(Arc::from("."))
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels from leftmost to rightmost. The root has none.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let body = if self.is_root() {
            ""
        } else {
            &self.0[..self.0.len() - 1]
        };
        body.split('.').filter(|label| !label.is_empty())
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// Strips the leftmost label. `example.com.` becomes `com.`, `com.`
    /// becomes the root and the root stays the root.
    pub fn parent(&self) -> DomainName {
        match self.0.find('.') {
            Some(dot) if dot + 1 < self.0.len() => Self(Arc::from(&self.0[dot + 1..])),
            _ => Self::root(),
        }
    }

    fn validate(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "empty domain name".to_string(),
            ));
        }
        if name == "." {
            return Ok(());
        }
        if !name.ends_with('.') {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: is not a fully qualified domain name",
                name
            )));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: name exceeds {} octets",
                name, MAX_NAME_LEN
            )));
        }

        for label in name[..name.len() - 1].split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "{}: empty label",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "{}: label '{}' exceeds {} octets",
                    name, label, MAX_LABEL_LEN
                )));
            }
        }

        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Self(Arc::from(s)))
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(Arc::from(value)))
    }
}

impl From<DomainName> for String {
    fn from(name: DomainName) -> Self {
        name.0.to_string()
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
