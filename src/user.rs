use serde::Deserialize;

/// Raw user record decoded from the remote JSON array. Fields the endpoint
/// returns beyond `name` and `website` are ignored; a missing field fails
/// the decode of the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    name: String,
    website: String,
}

impl User {
    /// Returns the display name of the user
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the website address of the user
    pub fn website(&self) -> &str {
        &self.website
    }
}

/// Presentation record for one row of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    name: String,
    website: String,
}

impl UserRow {
    pub fn new(name: String, website: String) -> Self {
        UserRow { name, website }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn website(&self) -> &str {
        &self.website
    }
}

/// Maps decoded users 1:1 into presentation rows, preserving source order.
pub fn map_to_rows(users: Vec<User>) -> Vec<UserRow> {
    users
        .into_iter()
        .map(|user| UserRow::new(user.name, user.website))
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn decode_users_test() {
        let payload = r#"[
            {"name":"Ada","website":"ada.dev"},
            {"name":"Bo","website":"bo.dev","id":2}
        ]"#;
        let users: Vec<User> = serde_json::from_str(payload).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name(), "Ada");
        assert_eq!(users[0].website(), "ada.dev");
        assert_eq!(users[1].name(), "Bo");
    }

    #[test]
    fn decode_is_all_or_nothing_test() {
        // one record missing `website` fails the whole batch
        let payload = r#"[{"name":"Ada","website":"ada.dev"},{"name":"Bo"}]"#;
        let result: serde_json::Result<Vec<User>> = serde_json::from_str(payload);

        assert!(result.is_err());
    }

    #[test]
    fn map_to_rows_preserves_order_test() {
        let payload = r#"[
            {"name":"Ada","website":"ada.dev"},
            {"name":"Bo","website":"bo.dev"},
            {"name":"Cy","website":"cy.dev"}
        ]"#;
        let users: Vec<User> = serde_json::from_str(payload).unwrap();
        let rows = map_to_rows(users);

        assert_eq!(
            rows,
            vec![
                UserRow::new("Ada".to_string(), "ada.dev".to_string()),
                UserRow::new("Bo".to_string(), "bo.dev".to_string()),
                UserRow::new("Cy".to_string(), "cy.dev".to_string()),
            ]
        );
    }
}
