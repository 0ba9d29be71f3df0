use serde::{Deserialize, Serialize};

use crate::{User, UserId};

/// Returns the first user in `users` whose id equals `id`.
///
/// Ids are not required to be unique or ordered; with duplicates the earliest
/// record wins.
pub fn find_user_by_id(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|user| user.id() == id)
}

pub fn find_user_by_id_mut(users: &mut [User], id: UserId) -> Option<&mut User> {
    users.iter_mut().find(|user| user.id() == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub id: UserId,
    pub user: Option<User>,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        self.user.is_some()
    }
}

pub fn lookup(users: &[User], id: UserId) -> LookupResult {
    LookupResult {
        id,
        user: find_user_by_id(users, id).cloned(),
    }
}
