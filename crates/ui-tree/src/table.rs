use crate::elements;
use crate::error::TableError;
use crate::node::{Props, UiNode};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub order: u32,
}

/// One table row: column key to pre-formatted cell text, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow(Vec<(String, String)>);

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_json(&self) -> Value {
        let cells: Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect();
        Value::Object(cells)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TableRow(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Accumulates the parts of one table. Nothing is validated until [`TableBuilder::build`].
///
/// The name only identifies the table in errors and logs; it is not rendered.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    id_column: Option<String>,
    order_by: Option<(String, SortDirection)>,
    refresh_button: bool,
    bookmarks_button: bool,
    export_button: bool,
    columns: Vec<ColumnSpec>,
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_column: None,
            order_by: None,
            refresh_button: false,
            bookmarks_button: false,
            export_button: false,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_id_column(&mut self, key: impl Into<String>) -> &mut Self {
        self.id_column = Some(key.into());
        self
    }

    pub fn set_order_by(&mut self, key: impl Into<String>, direction: SortDirection) -> &mut Self {
        self.order_by = Some((key.into(), direction));
        self
    }

    pub fn enable_refresh_button(&mut self, enabled: bool) -> &mut Self {
        self.refresh_button = enabled;
        self
    }

    pub fn enable_bookmarks_button(&mut self, enabled: bool) -> &mut Self {
        self.bookmarks_button = enabled;
        self
    }

    pub fn enable_export_button(&mut self, enabled: bool) -> &mut Self {
        self.export_button = enabled;
        self
    }

    /// Declares a column positioned by declaration sequence (1, 2, 3, ...).
    pub fn add_column(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let order = self.columns.len() as u32 + 1;
        self.add_column_with_order(key, label, order)
    }

    pub fn add_column_with_order(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        order: u32,
    ) -> &mut Self {
        self.columns.push(ColumnSpec {
            key: key.into(),
            label: label.into(),
            order,
        });
        self
    }

    /// Cells are stored as given; callers format numbers before adding them.
    pub fn add_row(&mut self, row: TableRow) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Validates the accumulated table and freezes it.
    ///
    /// Fails on a repeated column key, an id or sort key that is not a declared
    /// column, or the first row holding a key that is not a declared column or
    /// a key set twice.
    /// Columns come out ordered by `order`, ties in declaration order.
    pub fn build(self) -> Result<TableDescriptor, TableError> {
        self.validate().inspect_err(|e| {
            tracing::error!(table = %self.name, error = %e, "Rejected table descriptor.");
        })?;

        let mut columns = self.columns;
        columns.sort_by_key(|c| c.order);

        Ok(TableDescriptor {
            id_column: self.id_column,
            order_by: self.order_by,
            refresh_button: self.refresh_button,
            bookmarks_button: self.bookmarks_button,
            export_button: self.export_button,
            columns,
            rows: self.rows,
        })
    }

    fn validate(&self) -> Result<(), TableError> {
        let mut declared: HashSet<&str> = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !declared.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumn {
                    table: self.name.clone(),
                    key: column.key.clone(),
                });
            }
        }

        if let Some(key) = &self.id_column {
            if !declared.contains(key.as_str()) {
                return Err(TableError::UndeclaredIdColumn {
                    table: self.name.clone(),
                    key: key.clone(),
                });
            }
        }

        if let Some((key, _)) = &self.order_by {
            if !declared.contains(key.as_str()) {
                return Err(TableError::UndeclaredSortColumn {
                    table: self.name.clone(),
                    key: key.clone(),
                });
            }
        }

        for (index, row) in self.rows.iter().enumerate() {
            let mut seen: HashSet<&str> = HashSet::with_capacity(row.len());
            for key in row.keys() {
                if !declared.contains(key) {
                    return Err(TableError::UnknownColumn {
                        table: self.name.clone(),
                        row: index,
                        key: key.to_string(),
                    });
                }
                if !seen.insert(key) {
                    return Err(TableError::DuplicateCell {
                        table: self.name.clone(),
                        row: index,
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// A validated, immutable table description, rendered as a `Table` node's props.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescriptor {
    id_column: Option<String>,
    order_by: Option<(String, SortDirection)>,
    refresh_button: bool,
    bookmarks_button: bool,
    export_button: bool,
    columns: Vec<ColumnSpec>,
    rows: Vec<TableRow>,
}

impl TableDescriptor {
    pub fn id_column(&self) -> Option<&str> {
        self.id_column.as_deref()
    }

    pub fn order_by(&self) -> Option<(&str, SortDirection)> {
        self.order_by.as_ref().map(|(key, dir)| (key.as_str(), *dir))
    }

    pub fn refresh_button(&self) -> bool {
        self.refresh_button
    }

    pub fn bookmarks_button(&self) -> bool {
        self.bookmarks_button
    }

    pub fn export_button(&self) -> bool {
        self.export_button
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The property list a `Table` node carries. Unset id and sort keys are omitted.
    pub fn to_props(&self) -> Props {
        let mut props = Props::new();
        if let Some(key) = &self.id_column {
            props.push("idColumn", key.as_str());
        }
        if let Some((key, direction)) = &self.order_by {
            props.push("orderBy", json!({ "column": key, "direction": direction.as_str() }));
        }
        props.push("refreshButton", self.refresh_button);
        props.push("bookmarksButton", self.bookmarks_button);
        props.push("exportButton", self.export_button);
        props.push(
            "columns",
            Value::Array(
                self.columns
                    .iter()
                    .map(|c| json!({ "key": c.key, "label": c.label, "order": c.order }))
                    .collect(),
            ),
        );
        props.push(
            "rows",
            Value::Array(self.rows.iter().map(TableRow::to_json).collect()),
        );
        props
    }

    pub fn into_node(self) -> UiNode {
        elements::table(self.to_props())
    }
}
