// Fixed-width text rendering of the user list.

use crate::users::User;
use std::io::{self, Write};

pub const NAME_WIDTH: usize = 30;
pub const USERNAME_WIDTH: usize = 20;
pub const EMAIL_WIDTH: usize = 30;

/// Write a header, a rule and one row per user, `users.len() + 2` lines in
/// total. Values wider than their column overflow rather than being cut.
pub fn render<W: Write + ?Sized>(users: &[User], out: &mut W) -> io::Result<()> {
    write_row(out, "Name", "User name", "Email")?;
    writeln!(out, "{}", "-".repeat(NAME_WIDTH + USERNAME_WIDTH + EMAIL_WIDTH))?;
    for user in users {
        write_row(out, &user.name, &user.username, &user.email)?;
    }
    Ok(())
}

fn write_row<W: Write + ?Sized>(out: &mut W, name: &str, username: &str, email: &str) -> io::Result<()> {
    writeln!(
        out,
        "{name:<nw$}{username:<uw$}{email:<ew$}",
        nw = NAME_WIDTH,
        uw = USERNAME_WIDTH,
        ew = EMAIL_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(users: &[User]) -> Vec<String> {
        let mut buf = Vec::new();
        render(users, &mut buf).unwrap();
        String::from_utf8(buf).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn empty_list_renders_header_and_rule_only() {
        let lines = rendered(&[]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name"));
        assert_eq!(lines[1], "-".repeat(80));
    }

    #[test]
    fn rows_are_padded_to_column_widths() {
        let users = vec![
            User { name: "Leanne Graham".into(), username: "Bret".into(), email: "Sincere@april.biz".into() },
            User { name: "Ervin Howell".into(), username: "Antonette".into(), email: "Shanna@melissa.tv".into() },
        ];
        let lines = rendered(&users);
        assert_eq!(lines.len(), 4);
        assert_eq!(&lines[0][..30], format!("{:<30}", "Name"));
        assert_eq!(&lines[0][30..50], format!("{:<20}", "User name"));
        assert_eq!(&lines[2][..30], format!("{:<30}", "Leanne Graham"));
        assert_eq!(&lines[2][30..50], format!("{:<20}", "Bret"));
        assert_eq!(&lines[2][50..80], format!("{:<30}", "Sincere@april.biz"));
        assert_eq!(&lines[3][30..50], format!("{:<20}", "Antonette"));
    }

    #[test]
    fn long_values_overflow_their_column() {
        let long = "x".repeat(35);
        let users = vec![User { name: long.clone(), username: "u".into(), email: "e".into() }];
        let lines = rendered(&users);
        assert!(lines[2].starts_with(&format!("{long}u")));
    }
}
