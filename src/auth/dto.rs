use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration. Required fields are `Option` so a
/// missing one is reported through the validation path, not a decode error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

/// Response returned after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub msg: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_serialization() {
        let response = RegisterResponse {
            msg: "new user registered".to_string(),
            user: PublicUser {
                id: Uuid::new_v4(),
                email: "test@example.com".to_string(),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("new user registered"));
    }

    #[test]
    fn register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert!(req.name.is_none());
        assert!(req.password.is_none());
    }
}
