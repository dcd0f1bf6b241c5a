//! The entity model: profiles, parameters, and their association
//!
//! The association comes in one nullable wire form used for partial filters
//! and partial-update payloads; `promote()` validates it into the dense
//! binding used for committed results. There is no hand-maintained parallel
//! dense type off the wire.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A named configuration grouping attached to one CDN
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub cdn_id: i64,
    pub last_updated: NaiveDateTime,
}

/// A named configuration key with a value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub last_updated: NaiveDateTime,
}

/// The profile/parameter association in its nullable wire form.
///
/// Every field is optional: absence means "not specified", not "empty".
/// Used both as a partial filter on list queries and as a create/update
/// payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
}

/// The dense association form returned for committed results: every field
/// present, (profileId, parameterId) unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParameterBinding {
    pub profile: String,
    pub profile_id: i64,
    pub parameter: String,
    pub parameter_id: i64,
    pub last_updated: NaiveDateTime,
}

impl ProfileParameter {
    /// Validate this nullable form into the dense binding.
    ///
    /// Fails naming the first missing required field. `last_updated` is
    /// filled by the persistence layer, so a missing timestamp defaults to
    /// the supplied `now`.
    pub fn promote(self, now: NaiveDateTime) -> Result<ProfileParameterBinding, String> {
        let profile_id = self.profile_id.ok_or("profileId is required")?;
        let parameter_id = self.parameter_id.ok_or("parameterId is required")?;
        Ok(ProfileParameterBinding {
            profile: self.profile.ok_or("profile is required")?,
            profile_id,
            parameter: self.parameter.ok_or("parameter is required")?,
            parameter_id,
            last_updated: self.last_updated.unwrap_or(now),
        })
    }

    /// True when no filter field is set at all.
    pub fn is_empty_filter(&self) -> bool {
        self.profile.is_none()
            && self.profile_id.is_none()
            && self.parameter.is_none()
            && self.parameter_id.is_none()
    }
}

impl From<ProfileParameterBinding> for ProfileParameter {
    fn from(dense: ProfileParameterBinding) -> Self {
        Self {
            profile: Some(dense.profile),
            profile_id: Some(dense.profile_id),
            parameter: Some(dense.parameter),
            parameter_id: Some(dense.parameter_id),
            last_updated: Some(dense.last_updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_now() -> NaiveDateTime {
        chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc()
    }

    #[test]
    fn test_promote_complete_payload() {
        let pp = ProfileParameter {
            profile: Some("EDGE1".to_string()),
            profile_id: Some(7),
            parameter: Some("weight".to_string()),
            parameter_id: Some(13),
            last_updated: None,
        };
        let dense = pp.promote(sample_now()).unwrap();
        assert_eq!(dense.profile_id, 7);
        assert_eq!(dense.parameter_id, 13);
        assert_eq!(dense.last_updated, sample_now());
    }

    #[test]
    fn test_promote_rejects_missing_ids() {
        let pp = ProfileParameter {
            profile: Some("EDGE1".to_string()),
            ..Default::default()
        };
        let err = pp.promote(sample_now()).unwrap_err();
        assert_eq!(err, "profileId is required");
    }

    #[test]
    fn test_absent_field_is_not_serialized() {
        let pp = ProfileParameter {
            profile_id: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&pp).unwrap();
        assert_eq!(json, r#"{"profileId":7}"#);
    }

    #[test]
    fn test_dense_round_trips_through_nullable() {
        let dense = ProfileParameterBinding {
            profile: "MID1".to_string(),
            profile_id: 3,
            parameter: "ttl".to_string(),
            parameter_id: 9,
            last_updated: sample_now(),
        };
        let back = ProfileParameter::from(dense.clone())
            .promote(sample_now())
            .unwrap();
        assert_eq!(back, dense);
    }

    #[test]
    fn test_empty_filter_detection() {
        assert!(ProfileParameter::default().is_empty_filter());
        assert!(!ProfileParameter {
            parameter_id: Some(1),
            ..Default::default()
        }
        .is_empty_filter());
    }
}
