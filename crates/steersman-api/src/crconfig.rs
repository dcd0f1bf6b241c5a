//! The CRConfig document model
//!
//! The generated configuration for one CDN: a stats block identifying the
//! generation, a flat config map, and a per-profile parameter map. Maps are
//! `BTreeMap` so serialization is deterministic for identical relational
//! state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generation metadata carried in every CRConfig
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrConfigStats {
    #[serde(rename = "CDN_name")]
    pub cdn_name: String,
    /// Generation time, Unix epoch seconds
    pub date: i64,
    pub tm_user: String,
    pub tm_host: String,
    pub tm_path: String,
    pub tm_version: String,
}

/// One profile's resolved parameters inside a CRConfig
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrConfigProfile {
    pub parameters: BTreeMap<String, String>,
}

/// The complete generated configuration for one CDN at a point in time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrConfig {
    pub stats: CrConfigStats,
    pub config: BTreeMap<String, serde_json::Value>,
    pub profiles: BTreeMap<String, CrConfigProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_wire_names() {
        let stats = CrConfigStats {
            cdn_name: "cdn1".to_string(),
            date: 1_700_000_000,
            tm_user: "admin".to_string(),
            tm_host: "ops.example.net".to_string(),
            tm_path: "/api/v1/snapshot".to_string(),
            tm_version: "1.0".to_string(),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["CDN_name"], "cdn1");
        assert_eq!(json["tm_user"], "admin");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let mut a = CrConfig::default();
        a.config
            .insert("zeta".to_string(), serde_json::json!("last"));
        a.config
            .insert("alpha".to_string(), serde_json::json!("first"));

        let mut b = CrConfig::default();
        b.config
            .insert("alpha".to_string(), serde_json::json!("first"));
        b.config
            .insert("zeta".to_string(), serde_json::json!("last"));

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
