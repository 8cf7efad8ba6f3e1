use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Event identifier. Tracers emit it either as a string or as an integer;
/// both are normalized to the string form used for node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Uid(pub String);

impl Uid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uid {
    fn from(s: &str) -> Self {
        Uid(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Int(i64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => Uid(s),
            Raw::Int(n) => Uid(n.to_string()),
        })
    }
}

/// 单个被追踪的事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub uid: Uid,
    pub lineno: u32,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Event {
    pub fn new(uid: &str, lineno: u32, target: &str, kind: &str) -> Self {
        Self {
            uid: Uid::from(uid),
            lineno,
            target: target.to_string(),
            kind: kind.to_string(),
        }
    }

    /// `"{target}: {type} : {uid}"`
    pub fn label(&self) -> String {
        format!("{}: {} : {}", self.target, self.kind, self.uid)
    }
}

/// identifier -> 有序事件列表
pub type EventGroup = BTreeMap<String, Vec<Event>>;
