use crate::repository::User;
use bson::oid::ObjectId;
use std::collections::HashSet;

///
/// Flattens the push tokens of a candidate set into one deduplicated
/// list. A user with two devices contributes two tokens; a token shared
/// by two users (stale re-registration) appears once.
///
/// Also returns the ids of users who contributed at least one token.
/// Only those users may be marked as notified afterwards, users without
/// a device stay eligible for the next sweep.
///
pub fn collect_tokens(users: &[User]) -> (Vec<ObjectId>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    let mut contributing_user_ids = Vec::new();

    for user in users {
        if user.push_tokens.is_empty() {
            continue;
        }

        contributing_user_ids.push(user.id);
        for token in &user.push_tokens {
            if seen.insert(token.as_str()) {
                tokens.push(token.clone());
            }
        }
    }

    (contributing_user_ids, tokens)
}

#[cfg(test)]
mod test {
    use super::*;

    fn user(tokens: &[&str]) -> User {
        User {
            id: ObjectId::new(),
            push_tokens: tokens.iter().map(|token| token.to_string()).collect(),
        }
    }

    #[test]
    fn no_users_yields_nothing() {
        let (user_ids, tokens) = collect_tokens(&[]);

        assert!(user_ids.is_empty());
        assert!(tokens.is_empty());
    }

    #[test]
    fn tokens_of_one_user_are_deduplicated() {
        let users = [user(&["a", "b", "a"])];

        let (user_ids, tokens) = collect_tokens(&users);

        assert_eq!(user_ids, vec![users[0].id]);
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn token_shared_between_users_appears_once() {
        let users = [user(&["a", "b"]), user(&["b", "c"])];

        let (user_ids, tokens) = collect_tokens(&users);

        assert_eq!(user_ids.len(), 2);
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn users_without_tokens_are_not_counted_as_contributing() {
        let users = [user(&[]), user(&["a"])];

        let (user_ids, tokens) = collect_tokens(&users);

        assert_eq!(user_ids, vec![users[1].id]);
        assert_eq!(tokens, vec!["a"]);
    }
}
