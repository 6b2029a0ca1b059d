//! Item kind discriminator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which family of rules a submission is held to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Digital,
    Physical,
}

/// A kind tag that names neither variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item kind '{0}'")]
pub struct UnknownItemKind(pub String);

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Digital, ItemKind::Physical];

    /// Tag used by the submission form
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Digital => "digital",
            ItemKind::Physical => "physical",
        }
    }

    /// Leading label of the formatted record
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Digital => "Digital Resource",
            ItemKind::Physical => "Print Resource",
        }
    }
}

impl FromStr for ItemKind {
    type Err = UnknownItemKind;

    /// Tags are matched exactly; `"Digital"` or `" digital"` are unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownItemKind(s.to_string()))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("digital".parse::<ItemKind>(), Ok(ItemKind::Digital));
        assert_eq!("physical".parse::<ItemKind>(), Ok(ItemKind::Physical));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for tag in ["audio", "", "Digital", "PHYSICAL", " digital"] {
            assert_eq!(
                tag.parse::<ItemKind>(),
                Err(UnknownItemKind(tag.to_string()))
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ItemKind::Digital.label(), "Digital Resource");
        assert_eq!(ItemKind::Physical.label(), "Print Resource");
        assert_eq!(ItemKind::Physical.to_string(), "physical");
    }
}
