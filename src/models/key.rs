use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the fixed input roles the keypad maps physical buttons onto:
/// seven primary keys and four auxiliary buttons. `Other` covers extra
/// buttons reported by the controller outside the canonical set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    E1,
    E2,
    E3,
    E4,
    Other(u16),
}

/// Canonical display order of the 11 keys. Batch select-all and every
/// per-key table iterate in this order.
pub fn ordered_keys() -> [LogicalKey; 11] {
    [
        LogicalKey::Key1,
        LogicalKey::Key2,
        LogicalKey::Key3,
        LogicalKey::Key4,
        LogicalKey::Key5,
        LogicalKey::Key6,
        LogicalKey::Key7,
        LogicalKey::E1,
        LogicalKey::E2,
        LogicalKey::E3,
        LogicalKey::E4,
    ]
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalKey::Key1 => write!(f, "Key1"),
            LogicalKey::Key2 => write!(f, "Key2"),
            LogicalKey::Key3 => write!(f, "Key3"),
            LogicalKey::Key4 => write!(f, "Key4"),
            LogicalKey::Key5 => write!(f, "Key5"),
            LogicalKey::Key6 => write!(f, "Key6"),
            LogicalKey::Key7 => write!(f, "Key7"),
            LogicalKey::E1 => write!(f, "E1"),
            LogicalKey::E2 => write!(f, "E2"),
            LogicalKey::E3 => write!(f, "E3"),
            LogicalKey::E4 => write!(f, "E4"),
            LogicalKey::Other(id) => write!(f, "Other-{}", id),
        }
    }
}

impl FromStr for LogicalKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Key1" => Ok(LogicalKey::Key1),
            "Key2" => Ok(LogicalKey::Key2),
            "Key3" => Ok(LogicalKey::Key3),
            "Key4" => Ok(LogicalKey::Key4),
            "Key5" => Ok(LogicalKey::Key5),
            "Key6" => Ok(LogicalKey::Key6),
            "Key7" => Ok(LogicalKey::Key7),
            "E1" => Ok(LogicalKey::E1),
            "E2" => Ok(LogicalKey::E2),
            "E3" => Ok(LogicalKey::E3),
            "E4" => Ok(LogicalKey::E4),
            _ => {
                if let Some(rest) = s.strip_prefix("Other-") {
                    let id = rest
                        .parse::<u16>()
                        .map_err(|_| format!("invalid Other id: {}", rest))?;
                    Ok(LogicalKey::Other(id))
                } else {
                    Err(format!("unknown logical key: {}", s))
                }
            }
        }
    }
}

// Serialized as the display string so the key can be used directly as a
// JSON object key in bindings/switches maps.
impl Serialize for LogicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogicalKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
