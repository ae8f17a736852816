//! Data structures exchanged between the console and the backend.
//!
//! These are transport shapes only: fields are optional unless a specific
//! mutation requires them, and the backend is the authority on their content.

use serde::{Deserialize, Serialize};

/// Administrator roles the backend can assign to a profile.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Unrestricted visibility across all zones.
    ElevatedAdmin,
    /// Restricted to the zone named by the profile's `zone_id`.
    ScopedAdmin,
}

/// Profile record fetched by the subject email derived from the token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Option<u64>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    pub zone_id: Option<u64>,
}

/// How a resource-list fetch should be narrowed for a given profile.
///
/// This is the one piece of cross-cutting dispatch in the client layer, so it
/// lives in one place: a scoped admin with an assigned zone sees only that
/// zone, everyone else sees the whole collection. A scoped admin without a
/// zone assignment falls back to the unfiltered fetch rather than an empty
/// list; the backend still rejects anything they may not see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    Zone(u64),
}

impl ListScope {
    pub fn for_profile(profile: Option<&Profile>) -> Self {
        match profile {
            Some(p) if p.role == Role::ScopedAdmin => {
                p.zone_id.map(ListScope::Zone).unwrap_or(ListScope::All)
            }
            _ => ListScope::All,
        }
    }
}

/// Geographic/organizational partition that scoped admins are confined to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Center {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub zone_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Beneficiary {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document_number: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub center_id: Option<u64>,
    pub zone_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub center_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub starts_on: Option<String>,
    pub ends_on: Option<String>,
    pub center_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: Option<u64>,
    pub number: Option<String>,
    pub concept: Option<String>,
    pub amount: Option<f64>,
    pub issued_on: Option<String>,
    pub center_id: Option<u64>,
}

/// Credentials posted to the login endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of a successful login: the bearer token to store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role, zone_id: Option<u64>) -> Profile {
        Profile {
            id: Some(1),
            email: "ana@amparo.org".to_string(),
            first_name: None,
            last_name: None,
            role,
            zone_id,
        }
    }

    #[test]
    fn test_scoped_admin_with_zone_narrows() {
        let p = profile(Role::ScopedAdmin, Some(7));
        assert_eq!(ListScope::for_profile(Some(&p)), ListScope::Zone(7));
    }

    #[test]
    fn test_elevated_admin_sees_everything() {
        let p = profile(Role::ElevatedAdmin, Some(7));
        assert_eq!(ListScope::for_profile(Some(&p)), ListScope::All);

        let p = profile(Role::ElevatedAdmin, None);
        assert_eq!(ListScope::for_profile(Some(&p)), ListScope::All);
    }

    #[test]
    fn test_scoped_admin_without_zone_falls_back_to_all() {
        let p = profile(Role::ScopedAdmin, None);
        assert_eq!(ListScope::for_profile(Some(&p)), ListScope::All);
    }

    #[test]
    fn test_no_profile_means_no_narrowing() {
        assert_eq!(ListScope::for_profile(None), ListScope::All);
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&Role::ScopedAdmin).unwrap(),
            "\"SCOPED_ADMIN\""
        );
        let role: Role = serde_json::from_str("\"ELEVATED_ADMIN\"").unwrap();
        assert_eq!(role, Role::ElevatedAdmin);
    }

    #[test]
    fn test_same_payload_deserializes_equal() {
        let payload = r#"{"id":3,"name":"Centro Norte","zone_id":7,
            "address":null,"city":"Oviedo","postal_code":null,
            "phone":null,"email":null}"#;
        let a: Center = serde_json::from_str(payload).unwrap();
        let b: Center = serde_json::from_str(payload).unwrap();
        assert_eq!(a, b);
    }
}
