use serde::{Deserialize, Serialize};

/// A batch of documents that is sent to an external enrichment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchDetails {
    /// The Universally Unique Identifier (UUID) for a batch of documents.
    pub batch_id: Option<String>,
    /// The date and time (RFC3339) that the batch was created.
    pub created: Option<String>,
    /// The Universally Unique Identifier (UUID) for the external enrichment.
    pub enrichment_id: Option<String>,
}

/// An object that contains a list of batches that are ready for enrichment by
/// the external application.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListBatchesResponse {
    pub batches: Option<Vec<BatchDetails>>,
}

impl ListBatchesResponse {
    /// Batches waiting on one external enrichment
    pub fn for_enrichment<'a>(
        &'a self,
        enrichment_id: &'a str,
    ) -> impl Iterator<Item = &'a BatchDetails> + 'a {
        self.batches
            .iter()
            .flatten()
            .filter(move |b| b.enrichment_id.as_deref() == Some(enrichment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveryModel;

    #[test]
    fn test_filter_by_enrichment() {
        let response = ListBatchesResponse::from_json(
            r#"{"batches": [
                {"batch_id": "b1", "created": "2023-05-01T10:00:00Z", "enrichment_id": "webhook-1"},
                {"batch_id": "b2", "enrichment_id": "webhook-2"},
                {"batch_id": "b3", "enrichment_id": "webhook-1"}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<_> = response
            .for_enrichment("webhook-1")
            .filter_map(|b| b.batch_id.as_deref())
            .collect();
        assert_eq!(ids, vec!["b1", "b3"]);
    }

    #[test]
    fn test_empty_envelope() {
        let response = ListBatchesResponse::from_json("{}").unwrap();
        assert!(response.batches.is_none());
        assert_eq!(response.for_enrichment("any").count(), 0);
    }
}
