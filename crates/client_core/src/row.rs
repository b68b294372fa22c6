//! Per-record presentation. Pure: same record in, same row out.

use std::fmt;

use shared::domain::UserRecord;

/// One rendered list row, borrowing its text from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow<'a> {
    pub avatar: String,
    pub name: &'a str,
    pub email: &'a str,
    pub tag: String,
}

pub fn render_row(user: &UserRecord) -> UserRow<'_> {
    UserRow {
        avatar: avatar_initial(&user.name),
        name: &user.name,
        email: &user.email,
        tag: format!("#{}", user.id.0),
    }
}

/// Uppercased first character of `name`; empty for an empty name.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

impl fmt::Display for UserRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avatar = if self.avatar.is_empty() { " " } else { &self.avatar };
        write!(f, "({avatar}) {}  {}  {}", self.name, self.email, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::UserId;

    #[test]
    fn renders_initial_name_email_and_tag() {
        let user = UserRecord::new(UserId(5), "ada", "ada@example.com");
        let row = render_row(&user);
        assert_eq!(row.avatar, "A");
        assert_eq!(row.name, "ada");
        assert_eq!(row.email, "ada@example.com");
        assert_eq!(row.tag, "#5");
        assert_eq!(row.to_string(), "(A) ada  ada@example.com  #5");
    }

    #[test]
    fn empty_name_has_blank_avatar() {
        let user = UserRecord::new(UserId(1), "", "");
        let row = render_row(&user);
        assert_eq!(row.avatar, "");
        assert_eq!(row.to_string(), "( )     #1");
    }

    #[test]
    fn initial_handles_multibyte_and_expanding_case() {
        assert_eq!(avatar_initial("élodie"), "É");
        assert_eq!(avatar_initial("ßeta"), "SS");
        assert_eq!(avatar_initial("7up"), "7");
    }
}
