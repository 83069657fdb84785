//! Closure-free column descriptions loaded from configuration.

use serde::Deserialize;
use serde::Serialize;

use super::ColumnDef;
use crate::model::Row;

/// A column description that can be read from JSON.
///
/// ```json
/// { "id": "make", "accessorKey": "make", "header": "Make" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub accessor_key: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
}

impl From<ColumnSpec> for ColumnDef {
    fn from(spec: ColumnSpec) -> Self {
        let mut def = match spec.accessor_key {
            Some(key) => ColumnDef::key(key),
            None => ColumnDef::new(),
        };
        if let Some(id) = spec.id {
            def = def.id(id);
        }
        if let Some(header) = spec.header {
            def = def.header(header);
        }
        def
    }
}

/// Builds one column per field of `row`, in alphabetical order.
///
/// Each column uses the field name as id, accessor key and header.
pub fn infer_columns(row: &Row) -> Vec<ColumnDef> {
    row.keys_sorted()
        .into_iter()
        .map(|key| ColumnDef::key(key).id(key).header(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Accessor;
    use crate::column::Header;

    #[test]
    fn test_deserialize_camel_case() {
        let specs: Vec<ColumnSpec> = serde_json::from_str(
            r#"[{"id": "make", "accessorKey": "make", "header": "Make"}, {"header": "Notes"}]"#,
        )
        .unwrap();

        let def = ColumnDef::from(specs[0].clone());
        assert_eq!(def.get_id(), Some("make"));
        assert!(matches!(def.get_accessor(), Some(Accessor::Key(k)) if k == "make"));
        assert!(matches!(def.get_header(), Some(Header::Text(t)) if t == "Make"));

        let def = ColumnDef::from(specs[1].clone());
        assert!(def.get_accessor().is_none());
        assert!(def.get_id().is_none());
    }

    #[test]
    fn test_infer_columns() {
        let row = Row::new().set("year", 2001i64).set("make", "Ford");
        let columns = infer_columns(&row);

        let ids: Vec<_> = columns.iter().map(|c| c.get_id().unwrap()).collect();
        assert_eq!(ids, vec!["make", "year"]);
    }
}
