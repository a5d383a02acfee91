//! Object-key layout shared with the external AI processor.
//!
//! Uploads land under `{userId}/files/incoming/{orderId}/{fileName}`; the
//! processor writes finished artifacts under
//! `{userId}/files/outgoing/{orderId}/`. Both sides treat these prefixes as
//! the job queue and result handoff, so the layout is part of the wire
//! contract and must not drift.

use uuid::Uuid;

pub fn incoming_marker(user_id: Uuid) -> String {
    format!("{}/files/incoming/", user_id)
}

pub fn outgoing_marker(user_id: Uuid) -> String {
    format!("{}/files/outgoing/", user_id)
}

/// Prefix holding one order's uploaded inputs; also what the processor is
/// told to scan (`order_path` in the notification).
pub fn incoming_prefix(user_id: Uuid, order_id: Uuid) -> String {
    format!("{}/files/incoming/{}/", user_id, order_id)
}

/// Prefix the processor writes finished artifacts under.
pub fn outgoing_prefix(user_id: Uuid, order_id: Uuid) -> String {
    format!("{}/files/outgoing/{}/", user_id, order_id)
}

pub fn file_key(user_id: Uuid, order_id: Uuid, file_name: &str) -> String {
    format!("{}/files/incoming/{}/{}", user_id, order_id, file_name)
}

/// Last path segment of an object key, used as the display name of a
/// downloadable artifact.
pub fn file_name_of(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_layout_matches_processor_contract() {
        let user = Uuid::nil();
        let order = Uuid::max();

        assert_eq!(
            file_key(user, order, "photo.png"),
            format!("{}/files/incoming/{}/photo.png", user, order)
        );
        assert!(incoming_prefix(user, order).ends_with('/'));
        assert!(outgoing_prefix(user, order).contains("/files/outgoing/"));
    }

    #[test]
    fn file_name_is_last_segment() {
        assert_eq!(
            file_name_of("abc/files/outgoing/xyz/result.png"),
            "result.png"
        );
        assert_eq!(file_name_of("plain.png"), "plain.png");
    }
}
