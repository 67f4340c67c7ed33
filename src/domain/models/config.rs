use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Main configuration structure for the relay
///
/// Every key is optional on the wire. A missing key leaves the field at its
/// zero value, keys match case-insensitively and repeated sections merge.
/// Presence is checked elsewhere (see
/// [`ConfigValidator`](crate::domain::ports::ConfigValidator)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Broker the relay enqueues workers on
    #[serde(rename = "redis")]
    pub broker: BrokerConfig,

    /// Cloud credentials used to read the inbound queue
    #[serde(rename = "aws")]
    pub cloud: CloudConfig,

    /// Inbound queue and its topic routing table
    pub queue: QueueConfig,
}

/// Broker connection target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrokerConfig {
    /// `host:port` of the broker
    pub host: String,

    /// Key namespace workers are enqueued under
    pub namespace: String,

    /// Broker-side queue name
    pub queue: String,
}

/// Cloud provider credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloudConfig {
    /// Access key id
    pub access_key: String,

    /// Secret access key
    pub secret_key: String,

    /// Provider region
    pub region: String,
}

impl CloudConfig {
    /// Access key with everything but the last four characters hidden
    pub fn masked_access_key(&self) -> String {
        let count = self.access_key.chars().count();
        if count == 0 {
            return String::new();
        }
        if count <= 4 {
            return "****".to_string();
        }
        let tail: String = self.access_key.chars().skip(count - 4).collect();
        format!("****{tail}")
    }
}

impl fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudConfig")
            .field("access_key", &self.masked_access_key())
            .field("secret_key", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}

/// Inbound queue configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueConfig {
    /// Name of the queue to listen on
    pub name: String,

    /// Topic name -> handler identifier
    pub topics: HashMap<String, String>,
}

impl QueueConfig {
    /// Handler registered for `topic`, if any
    pub fn handler_for(&self, topic: &str) -> Option<&str> {
        self.topics.get(topic).map(String::as_str)
    }

    /// Routing table sorted by topic name
    pub fn routes(&self) -> Vec<(&str, &str)> {
        let mut routes: Vec<(&str, &str)> = self
            .topics
            .iter()
            .map(|(topic, handler)| (topic.as_str(), handler.as_str()))
            .collect();
        routes.sort_unstable_by_key(|(topic, _)| *topic);
        routes
    }
}
