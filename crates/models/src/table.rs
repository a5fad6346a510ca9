use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tables whose content or context match a search query.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTableResult {
    /// The identifier for the retrieved table.
    pub table_id: Option<String>,
    /// The identifier of the document the table was retrieved from.
    pub source_document_id: Option<String>,
    /// The identifier of the collection the table was retrieved from.
    pub collection_id: Option<String>,
    /// HTML snippet of the table info.
    pub table_html: Option<String>,
    /// The offset of the table html snippet in the original document html.
    pub table_html_offset: Option<i64>,
    pub table: Option<TableResultTable>,
}

/// Full table object retrieved from Table Understanding Enrichment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableResultTable {
    pub location: Option<TableElementLocation>,
    /// The textual contents of the current table from the input document
    /// without associated markup content.
    pub text: Option<String>,
    pub section_title: Option<TableTextLocation>,
    pub title: Option<TableTextLocation>,
    /// An array of table-level cells that apply as headers to all the other
    /// cells in the current table.
    pub table_headers: Option<Vec<TableHeaders>>,
    /// An array of row-level cells, each applicable as a header to other cells
    /// in the same row as itself, of the current table.
    pub row_headers: Option<Vec<TableRowHeaders>>,
    /// An array of column-level cells, each applicable as a header to other
    /// cells in the same column as itself, of the current table.
    pub column_headers: Option<Vec<TableColumnHeaders>>,
    /// An array of key-value pairs identified in the current table.
    pub key_value_pairs: Option<Vec<TableKeyValuePairs>>,
    /// An array of cells that are neither table header nor column header nor
    /// row header cells, of the current table with corresponding row and column
    /// header associations.
    pub body_cells: Option<Vec<TableBodyCells>>,
    /// An array of lists of textual entries across the document related to the
    /// current table being parsed.
    pub contexts: Option<Vec<TableTextLocation>>,
}

/// The numeric location of the identified element in the document,
/// represented with two integers labeled `begin` and `end`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableElementLocation {
    /// The element's `begin` index.
    pub begin: Option<i64>,
    /// The element's `end` index.
    pub end: Option<i64>,
}

impl TableElementLocation {
    /// Span length, when both offsets are present and ordered
    pub fn len(&self) -> Option<i64> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) if end >= begin => Some(end - begin),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// Text and associated location within a table.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableTextLocation {
    pub text: Option<String>,
    pub location: Option<TableElementLocation>,
}

/// The contents of the current table's header.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableHeaders {
    /// The unique ID of the cell in the current table.
    pub cell_id: Option<String>,
    /// The location of the table header cell in the current table as defined by
    /// its `begin` and `end` offsets, respectfully, in the input document.
    pub location: Option<Map<String, Value>>,
    /// The textual contents of the cell from the input document without
    /// associated markup content.
    pub text: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

/// Row-level cells, each applicable as a header to other cells in the same
/// row as itself, of the current table.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRowHeaders {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    /// If you provide customization input, the normalized version of the cell
    /// text according to the customization; otherwise, the same value as `text`.
    pub text_normalized: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

/// Column-level cells, each applicable as a header to other cells in the same
/// column as itself, of the current table.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableColumnHeaders {
    pub cell_id: Option<String>,
    /// The location of the column header cell in the current table as defined
    /// by its `begin` and `end` offsets, respectfully, in the input document.
    pub location: Option<Map<String, Value>>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

/// Key-value pairs detected across cell boundaries.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableKeyValuePairs {
    pub key: Option<TableCellKey>,
    /// A list of values in a key-value pair.
    pub value: Option<Vec<TableCellValues>>,
}

/// A key in a key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableCellKey {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
}

/// A value in a key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableCellValues {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
}

/// Cells that are not table header, column header, or row header cells.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableBodyCells {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
    pub row_header_ids: Option<Vec<TableRowHeaderIds>>,
    pub row_header_texts: Option<Vec<TableRowHeaderTexts>>,
    pub row_header_texts_normalized: Option<Vec<TableRowHeaderTextsNormalized>>,
    pub column_header_ids: Option<Vec<TableColumnHeaderIds>>,
    pub column_header_texts: Option<Vec<TableColumnHeaderTexts>>,
    pub column_header_texts_normalized: Option<Vec<TableColumnHeaderTextsNormalized>>,
    pub attributes: Option<Vec<DocumentAttribute>>,
}

/// An array of values, each being the `id` value of a row header that is
/// applicable to this body cell.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRowHeaderIds {
    /// The `id` values of a row header.
    pub id: Option<String>,
}

/// An array of values, each being the `text` value of a row header that is
/// applicable to this body cell.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRowHeaderTexts {
    pub text: Option<String>,
}

/// If you provide customization input, the normalized version of the row
/// header texts according to the customization; otherwise, the same value as
/// `row_header_texts`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRowHeaderTextsNormalized {
    pub text_normalized: Option<String>,
}

/// An array of values, each being the `id` value of a column header that is
/// applicable to the current cell.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableColumnHeaderIds {
    pub id: Option<String>,
}

/// An array of values, each being the `text` value of a column header that is
/// applicable to the current cell.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableColumnHeaderTexts {
    pub text: Option<String>,
}

/// If you provide customization input, the normalized version of the column
/// header texts according to the customization; otherwise, the same value as
/// `column_header_texts`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableColumnHeaderTextsNormalized {
    pub text_normalized: Option<String>,
}

/// List of document attributes.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentAttribute {
    /// The type of attribute.
    #[serde(rename = "type")]
    pub attribute_type: Option<String>,
    /// The text associated with the attribute.
    pub text: Option<String>,
    pub location: Option<TableElementLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveryModel;

    #[test]
    fn test_text_normalized_wire_name() {
        let header =
            TableRowHeaderTextsNormalized::from_json(r#"{"text_normalized": "Total revenue"}"#)
                .unwrap();
        assert_eq!(header.text_normalized.as_deref(), Some("Total revenue"));
        assert_eq!(header.to_json().unwrap(), r#"{"text_normalized":"Total revenue"}"#);
    }

    #[test]
    fn test_location_span() {
        let location = TableElementLocation::from_json(r#"{"begin": 5, "end": 12}"#).unwrap();
        assert_eq!(location.len(), Some(7));
        assert!(!location.is_empty());

        let inverted = TableElementLocation { begin: Some(5), end: Some(3) };
        assert_eq!(inverted.len(), None);
    }

    #[test]
    fn test_body_cell_header_references() {
        let cell = TableBodyCells::from_json(
            r#"{
                "cell_id": "bodyCell-1",
                "location": {"begin": 10, "end": 14},
                "text": "42",
                "row_header_ids": [{"id": "rowHeader-1"}],
                "column_header_texts": [{"text": "Q1"}],
                "column_header_texts_normalized": [{"text_normalized": "q1"}],
                "attributes": [
                    {"type": "Number", "text": "42", "location": {"begin": 10, "end": 12}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(cell.row_header_ids.unwrap()[0].id.as_deref(), Some("rowHeader-1"));
        assert_eq!(cell.column_header_texts.unwrap()[0].text.as_deref(), Some("Q1"));
        assert_eq!(
            cell.column_header_texts_normalized.unwrap()[0].text_normalized.as_deref(),
            Some("q1")
        );
        assert_eq!(cell.attributes.unwrap()[0].attribute_type.as_deref(), Some("Number"));
    }

    #[test]
    fn test_column_header_location_is_open_object() {
        let header = TableColumnHeaders::from_json(
            r#"{"cell_id": "c1", "location": {"begin": 1, "end": 4, "page": 2}}"#,
        )
        .unwrap();
        let location = header.location.unwrap();
        assert_eq!(location.get("page"), Some(&serde_json::json!(2)));
    }
}
