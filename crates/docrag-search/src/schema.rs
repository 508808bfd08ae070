use serde::Serialize;

use docrag_core::config::IndexSettings;

/// Field holding the embedding; hybrid queries target it by name.
pub const VECTOR_FIELD: &str = "content_vector";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    pub vector_search: VectorSearch,
    pub semantic: SemanticSearch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub key: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_search_profile: Option<String>,
}

impl FieldDefinition {
    fn simple(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            key: false,
            searchable: false,
            filterable: true,
            sortable: false,
            dimensions: None,
            vector_search_profile: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorSearch {
    pub algorithms: Vec<VectorAlgorithm>,
    pub profiles: Vec<VectorProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorAlgorithm {
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorProfile {
    pub name: String,
    pub algorithm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticSearch {
    pub configurations: Vec<SemanticConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticConfiguration {
    pub name: String,
    pub prioritized_fields: PrioritizedFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizedFields {
    pub prioritized_content_fields: Vec<SemanticField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticField {
    pub field_name: String,
}

/// Index layout: `id` key, searchable `content`, filterable `source_file` and
/// `chunk_index`, and an HNSW-backed `content_vector` of `dimensions` floats.
/// The semantic ranker reads `content`.
pub fn index_definition(name: &str, settings: &IndexSettings) -> IndexDefinition {
    let mut id = FieldDefinition::simple("id", "Edm.String");
    id.key = true;

    let mut content = FieldDefinition::simple("content", "Edm.String");
    content.searchable = true;
    content.filterable = false;

    let mut chunk_index = FieldDefinition::simple("chunk_index", "Edm.Int32");
    chunk_index.sortable = true;

    let mut vector = FieldDefinition::simple(VECTOR_FIELD, "Collection(Edm.Single)");
    vector.searchable = true;
    vector.filterable = false;
    vector.dimensions = Some(settings.dimensions);
    vector.vector_search_profile = Some(settings.vector_profile.clone());

    IndexDefinition {
        name: name.to_string(),
        fields: vec![id, content, FieldDefinition::simple("source_file", "Edm.String"), chunk_index, vector],
        vector_search: VectorSearch {
            algorithms: vec![VectorAlgorithm { name: settings.hnsw_algorithm.clone(), kind: "hnsw".to_string() }],
            profiles: vec![VectorProfile {
                name: settings.vector_profile.clone(),
                algorithm: settings.hnsw_algorithm.clone(),
            }],
        },
        semantic: SemanticSearch {
            configurations: vec![SemanticConfiguration {
                name: settings.semantic_configuration.clone(),
                prioritized_fields: PrioritizedFields {
                    prioritized_content_fields: vec![SemanticField { field_name: "content".to_string() }],
                },
            }],
        },
    }
}
