use serde::{Deserialize, Serialize};

/// User roles, closed set. The backend sends these as plain strings;
/// keeping them as an enum makes the navigation tier mapping exhaustive.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "agent" => Role::Agent,
            _ => Role::User,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Client-side user shape.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub created_at: String,
}

impl User {
    pub fn avatar_url(&self) -> String {
        self.avatar.clone().unwrap_or_else(|| {
            format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", self.email)
        })
    }

    /// First letter of the display name, for the avatar fallback badge.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// User snapshot as the auth endpoints return it.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: String,
}

impl AuthUser {
    /// Normalize the server snapshot into the client user shape,
    /// filling in a generated avatar when the server sent none.
    pub fn into_user(self) -> User {
        let avatar = self.avatar.clone().or_else(|| {
            Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                self.email
            ))
        });
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            avatar,
            created_at: self.created_at,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_str() {
        for role in [Role::Admin, Role::Agent, Role::User] {
            assert_eq!(Role::from_str(role.as_str()), role);
        }
    }

    #[test]
    fn unknown_role_string_falls_back_to_user() {
        assert_eq!(Role::from_str("superuser"), Role::User);
    }

    #[test]
    fn auth_response_deserializes_and_normalizes() {
        let json = r#"{
            "user": {
                "id": "1",
                "email": "a@b.com",
                "name": "A",
                "role": "agent",
                "created_at": "2024-01-01"
            },
            "token": "T"
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "T");

        let user = response.user.into_user();
        assert_eq!(user.role, Role::Agent);
        assert_eq!(user.created_at, "2024-01-01");
        // No avatar from the server: a seeded one is generated.
        assert_eq!(
            user.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=a@b.com")
        );
    }

    #[test]
    fn server_avatar_is_kept_when_present() {
        let auth_user = AuthUser {
            id: "2".into(),
            email: "x@y.com".into(),
            name: "X".into(),
            role: Role::User,
            avatar: Some("https://cdn.example.com/x.png".into()),
            created_at: "2024-02-02".into(),
        };
        let user = auth_user.into_user();
        assert_eq!(user.avatar.as_deref(), Some("https://cdn.example.com/x.png"));
    }
}
