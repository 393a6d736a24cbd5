//! Tracker entities as served by the API
//!
//! Field names follow the API's JSON (`_id`, camelCase). Everything here is
//! a read-only snapshot; the server owns the records.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Drives visibility of admin-only prompts. Presentation only.
    #[serde(default)]
    pub is_admin: bool,
}

/// A project owned by or shared with the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// `None` when the server sent no usable timestamp
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created: Option<DateTime<Utc>>,
}

/// Another user affiliated with the signed-in user's projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// An issue assigned to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

/// Body of a create-project request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
}

/// Body of a create-user request
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// `created` arrives either as an RFC 3339 string or as epoch milliseconds.
/// Anything else decodes to `None` so one bad record keeps its list intact.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .ok(),
        Raw::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        Raw::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_user_from_api_json() {
        let json = r#"{"_id":"u1","firstName":"Ada","lastName":"Lovelace","isAdmin":true,"email":"ada@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert!(user.is_admin);
    }

    #[test]
    fn test_user_admin_defaults_to_false() {
        let user: User = serde_json::from_str(r#"{"_id":"u2","firstName":"Bob"}"#).unwrap();
        assert!(!user.is_admin);
        assert!(user.last_name.is_empty());
    }

    #[test]
    fn test_project_created_as_rfc3339() {
        let json = r#"{"_id":"p1","title":"Tracker","created":"2019-03-07T12:00:00.000Z"}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        let created = project.created.unwrap();
        assert_eq!(created.year(), 2019);
        assert_eq!(created.month(), 3);
        assert_eq!(created.day(), 7);
    }

    #[test]
    fn test_project_created_as_epoch_millis() {
        let json = r#"{"_id":"p1","title":"Tracker","created":1551960000000}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.created.unwrap().timestamp(), 1_551_960_000);
    }

    #[test]
    fn test_project_created_invalid_is_none() {
        let json = r#"{"_id":"p1","title":"Tracker","created":"last tuesday"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.created, None);

        let json = r#"{"_id":"p1","title":"Tracker","created":null}"#;
        assert_eq!(serde_json::from_str::<Project>(json).unwrap().created, None);
    }

    #[test]
    fn test_project_list_survives_missing_created() {
        let json = r#"[{"_id":"p1","title":"Good","created":"2019-03-07T12:00:00Z"},{"_id":"p2","title":"NoDate"}]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();

        assert_eq!(projects.len(), 2);
        assert!(projects[0].created.is_some());
        assert_eq!(projects[1].title, "NoDate");
        assert_eq!(projects[1].created, None);
    }

    #[test]
    fn test_user_without_first_name() {
        let user: User = serde_json::from_str(r#"{"_id":"u3","isAdmin":true}"#).unwrap();
        assert!(user.first_name.is_empty());
        assert!(user.is_admin);

        let users: Vec<Collaborator> =
            serde_json::from_str(r#"[{"_id":"c1","firstName":"Grace"},{"_id":"c2"}]"#).unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_new_user_serializes_camel_case() {
        let new_user = NewUser {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            password: "cobol".to_string(),
            is_admin: false,
        };
        let value = serde_json::to_value(&new_user).unwrap();

        assert_eq!(value["firstName"], "Grace");
        assert_eq!(value["isAdmin"], false);
        assert!(!format!("{:?}", new_user).contains("cobol"));
    }
}
