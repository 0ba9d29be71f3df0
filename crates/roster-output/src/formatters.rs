use roster_types::*;

pub fn format_lookup_result(result: &LookupResult) -> String {
    match &result.user {
        Some(user) => format_found_user(user),
        None => "User not found".to_string(),
    }
}

fn format_found_user(user: &User) -> String {
    let status = if user.is_active() {
        "User is active"
    } else {
        "User is not active"
    };
    [format!("Found user: {}", user.display_name()), status.to_string()].join("\n")
}

pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users".to_string();
    }

    users
        .iter()
        .map(|user| {
            let status = if user.is_active() { "active" } else { "inactive" };
            format!("{}: {} [{}]", user.id(), user.display_name(), status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_active_user() {
        let users = demo_users();
        assert_eq!(
            format_lookup_result(&lookup(&users, 2)),
            "Found user: Bob (bob@example.com)\nUser is active"
        );
    }

    #[test]
    fn test_found_inactive_user() {
        let mut users = demo_users();
        find_user_by_id_mut(&mut users, 1).unwrap().deactivate();
        assert_eq!(
            format_lookup_result(&lookup(&users, 1)),
            "Found user: Alice (alice@example.com)\nUser is not active"
        );
    }

    #[test]
    fn test_user_not_found() {
        let users = demo_users();
        assert_eq!(format_lookup_result(&lookup(&users, 99)), "User not found");
    }

    #[test]
    fn test_format_users() {
        let mut users = demo_users();
        users[2].deactivate();
        assert_eq!(
            format_users(&users),
            "1: Alice (alice@example.com) [active]\n\
             2: Bob (bob@example.com) [active]\n\
             3: Charlie (charlie@example.com) [inactive]"
        );
        assert_eq!(format_users(&[]), "No users");
    }
}
