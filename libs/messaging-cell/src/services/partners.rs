use std::collections::HashSet;

use crate::models::MessageParticipants;

/// Distinct conversation partners of `user_id`, in order of first appearance.
///
/// Self-addressed messages and messages the user did not take part in
/// contribute nothing.
pub fn conversation_partners<'a, I>(user_id: &str, messages: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MessageParticipants>,
{
    let mut seen = HashSet::new();
    let mut partners = Vec::new();

    for message in messages {
        let Some(partner) = message.counterpart_of(user_id) else {
            continue;
        };
        if partner == user_id {
            continue;
        }
        if seen.insert(partner.to_string()) {
            partners.push(partner.to_string());
        }
    }

    partners
}
