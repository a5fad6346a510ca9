use serde::{Deserialize, Serialize};

/// Information about a document classifier.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentClassifier {
    /// A unique identifier of the document classifier.
    pub classifier_id: Option<String>,
    /// A human-readable name of the document classifier.
    pub name: Option<String>,
    /// A description of the document classifier.
    pub description: Option<String>,
    /// The date that the document classifier was created.
    pub created: Option<String>,
    /// The language of the training data that is associated with the document classifier.
    pub language: Option<String>,
    /// An array of enrichments to apply to the data that is used to train and
    /// test the document classifier.
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    /// An array of fields that are used to train the document classifier. The
    /// same set of fields must exist in the training data, the test data, and
    /// the documents where the resulting document classifier enrichment is applied.
    pub recognized_fields: Option<Vec<String>>,
    /// The name of the field from the training and test data that contains the
    /// classification labels.
    pub answer_field: Option<String>,
    /// Name of the CSV file with training data that is used to train the document classifier.
    pub training_data_file: Option<String>,
    /// Name of the CSV file with data that is used to test the document classifier.
    pub test_data_file: Option<String>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

/// A list of document classifiers in a project.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentClassifiers {
    pub classifiers: Option<Vec<DocumentClassifier>>,
}

/// An object that describes enrichments that are applied to the training and
/// test data that is used by the document classifier.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentClassifierEnrichment {
    /// A unique identifier of the enrichment.
    pub enrichment_id: Option<String>,
    /// An array of field names where the enrichment is applied.
    pub fields: Option<Vec<String>>,
}

impl DocumentClassifierEnrichment {
    pub fn new(enrichment_id: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            enrichment_id: Some(enrichment_id.into()),
            fields: Some(fields),
        }
    }
}

/// An object with details for creating federated document classifier models.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifierFederatedModel {
    /// Name of the field that contains the values from which multiple
    /// classifier models are defined.
    pub field: Option<String>,
}

/// Request body that manages the settings and data that is required to train
/// a document classification model.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDocumentClassifier {
    pub name: String,
    pub description: Option<String>,
    pub language: String,
    pub answer_field: String,
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

impl CreateDocumentClassifier {
    pub fn builder(
        name: impl Into<String>,
        language: impl Into<String>,
        answer_field: impl Into<String>,
    ) -> CreateDocumentClassifierBuilder {
        CreateDocumentClassifierBuilder {
            inner: Self {
                name: name.into(),
                description: None,
                language: language.into(),
                answer_field: answer_field.into(),
                enrichments: None,
                federated_classification: None,
            },
        }
    }

    /// Builder seeded from this request
    pub fn to_builder(&self) -> CreateDocumentClassifierBuilder {
        CreateDocumentClassifierBuilder { inner: self.clone() }
    }
}

pub struct CreateDocumentClassifierBuilder {
    inner: CreateDocumentClassifier,
}

impl CreateDocumentClassifierBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn add_enrichment(mut self, enrichment: DocumentClassifierEnrichment) -> Self {
        self.inner.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<DocumentClassifierEnrichment>) -> Self {
        self.inner.enrichments = Some(enrichments);
        self
    }

    pub fn federated_classification(mut self, field: impl Into<String>) -> Self {
        self.inner.federated_classification = Some(ClassifierFederatedModel {
            field: Some(field.into()),
        });
        self
    }

    pub fn build(self) -> CreateDocumentClassifier {
        self.inner
    }
}

/// Information about a document classifier model.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentClassifierModel {
    pub model_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    /// The status of the training run. See [`classifier_model_status`].
    pub status: Option<String>,
    pub evaluation: Option<ClassifierModelEvaluation>,
    /// A unique identifier of the enrichment that is generated by this document classifier model.
    pub enrichment_id: Option<String>,
    /// The date that the document classifier model was deployed.
    pub deployed_at: Option<String>,
}

impl DocumentClassifierModel {
    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some(classifier_model_status::AVAILABLE)
    }
}

pub mod classifier_model_status {
    pub const TRAINING: &str = "training";
    pub const AVAILABLE: &str = "available";
    pub const FAILED: &str = "failed";
}

/// An object that contains a list of document classifier model definitions.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentClassifierModels {
    pub models: Option<Vec<DocumentClassifierModel>>,
}

/// An object that contains information about a trained document classifier model.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifierModelEvaluation {
    pub micro_average: Option<ModelEvaluationMicroAverage>,
    pub macro_average: Option<ModelEvaluationMacroAverage>,
    /// An array of evaluation metrics, one set of metrics for each class.
    pub per_class: Option<Vec<PerClassModelEvaluation>>,
}

/// A micro-average aggregates the contributions of all classes to compute the average metric.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelEvaluationMicroAverage {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

/// A macro-average computes metric independently for each class and then
/// takes the average.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelEvaluationMacroAverage {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

/// An object that measures the metrics from a training run for each
/// classification label separately.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerClassModelEvaluation {
    /// Class name. Each class name is derived from a value in the answer field.
    pub name: Option<String>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveryModel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_sets_required_and_optional_fields() {
        let request = CreateDocumentClassifier::builder("support tickets", "en", "category")
            .description("routes tickets")
            .add_enrichment(DocumentClassifierEnrichment::new("ent-1", vec!["body".to_string()]))
            .federated_classification("region")
            .build();

        let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "support tickets",
                "description": "routes tickets",
                "language": "en",
                "answer_field": "category",
                "enrichments": [{"enrichment_id": "ent-1", "fields": ["body"]}],
                "federated_classification": {"field": "region"}
            })
        );
    }

    #[test]
    fn test_to_builder_keeps_existing_values() {
        let original = CreateDocumentClassifier::builder("a", "en", "label").build();
        let updated = original.to_builder().description("b").build();

        assert_eq!(updated.name, "a");
        assert_eq!(updated.description.as_deref(), Some("b"));
    }

    #[test]
    fn test_model_status() {
        let model = DocumentClassifierModel::from_json(
            r#"{"model_id": "m1", "status": "available", "evaluation": {
                "micro_average": {"precision": 0.5, "recall": 0.25, "f1": 0.3}
            }}"#,
        )
        .unwrap();

        assert!(model.is_available());
        let micro = model.evaluation.and_then(|e| e.micro_average).unwrap();
        assert_eq!(micro.recall, Some(0.25));
    }
}
