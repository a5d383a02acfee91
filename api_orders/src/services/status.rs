/// Status of an order as inferred from the outgoing listing: the external
/// processor signals completion purely by writing artifacts under the order's
/// outgoing prefix.
pub fn status_of(outgoing_keys: &[String]) -> &'static str {
    if outgoing_keys.is_empty() {
        "processing"
    } else {
        "completed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_means_processing() {
        assert_eq!(status_of(&[]), "processing");
    }

    #[test]
    fn any_artifact_means_completed() {
        let keys = vec!["u/files/outgoing/o/result.png".to_string()];
        assert_eq!(status_of(&keys), "completed");
    }
}
