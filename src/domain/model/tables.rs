use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Character offsets of an element inside the source document's HTML.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableElementLocation {
    pub begin: i64,
    pub end: i64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableTextLocation {
    pub text: Option<String>,
    pub location: Option<TableElementLocation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableHeaders {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRowHeaders {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableColumnHeaders {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCellKey {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCellValues {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableKeyValuePairs {
    pub key: Option<TableCellKey>,
    pub value: Option<Vec<TableCellValues>>,
}

/// An identified attribute (currency, date, location, ...) inside a table cell.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentAttribute {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<String>,
    pub location: Option<TableElementLocation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableBodyCells {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
    pub row_header_ids: Option<Vec<String>>,
    pub row_header_texts: Option<Vec<String>>,
    pub row_header_texts_normalized: Option<Vec<String>>,
    pub column_header_ids: Option<Vec<String>>,
    pub column_header_texts: Option<Vec<String>>,
    pub column_header_texts_normalized: Option<Vec<String>>,
    pub attributes: Option<Vec<DocumentAttribute>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableResultTable {
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub section_title: Option<TableTextLocation>,
    pub title: Option<TableTextLocation>,
    pub table_headers: Option<Vec<TableHeaders>>,
    pub row_headers: Option<Vec<TableRowHeaders>>,
    pub column_headers: Option<Vec<TableColumnHeaders>>,
    pub key_value_pairs: Option<Vec<TableKeyValuePairs>>,
    pub body_cells: Option<Vec<TableBodyCells>>,
    pub contexts: Option<Vec<TableTextLocation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTableResult {
    pub table_id: Option<String>,
    pub source_document_id: Option<String>,
    pub collection_id: Option<String>,
    pub table_html: Option<String>,
    pub table_html_offset: Option<i64>,
    pub table: Option<TableResultTable>,
}
