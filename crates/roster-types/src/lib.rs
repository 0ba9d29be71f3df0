mod lookup;
mod user;

pub use lookup::*;
pub use user::*;

/// Id looked up by the demonstration run.
pub const DEMO_LOOKUP_ID: UserId = 2;

/// The fixed three-user roster used when no seed users are configured.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
        User::new(3, "Charlie", "charlie@example.com"),
    ]
}
