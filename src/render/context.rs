//! Per-table render context: the transient bundle of values substituted
//! into the template assets.

/// Values available to per-table template expansion. Built once per
/// surviving table and discarded after that table's file-write pass.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub author: String,
    pub version: String,
    /// Current date formatted as an 8-digit `%Y%m%d` stamp.
    pub date: String,

    /// The dialect selected for this run.
    pub dialect: String,
    /// Name constants for every supported dialect.
    pub mysql: &'static str,
    pub postgres: &'static str,

    pub cwd: String,
    pub path: String,

    pub table: TableContext,
}

impl RenderContext {
    /// The placeholder pairs for content expansion. `columns` is the
    /// pre-joined block of per-column fragments.
    pub fn placeholder_values<'a>(&'a self, columns: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            ("author", &self.author),
            ("version", &self.version),
            ("date", &self.date),
            ("dialect", &self.dialect),
            ("mysql", self.mysql),
            ("postgres", self.postgres),
            ("table_name", &self.table.name),
            ("table_comment", &self.table.comment),
            ("columns", columns),
        ]
    }
}

/// The table as the templates see it.
#[derive(Debug, Clone, Default)]
pub struct TableContext {
    pub name: String,
    pub comment: String,
    pub columns: Vec<ColumnContext>,
}

/// One column, pre-rendered: exactly one of the family fragments is
/// non-empty (or none, for an unrecognized type).
#[derive(Debug, Clone, Default)]
pub struct ColumnContext {
    pub name: String,
    pub type_name: String,
    pub comment: String,
    /// Formatted default-value clause, empty when the column has no default.
    pub default_clause: String,

    pub auto_increment: bool,
    pub nullable: bool,
    pub update_timestamp: bool,

    pub length: u32,
    pub precision: u32,
    pub scale: u32,

    pub fragments: ColumnFragments,
}

impl ColumnContext {
    /// The single fragment this column contributes to the changelog, empty
    /// for columns outside every template family.
    pub fn fragment(&self) -> &str {
        self.fragments.selected()
    }
}

/// The seventeen family fragment slots. Selection fills exactly one.
#[derive(Debug, Clone, Default)]
pub struct ColumnFragments {
    pub primary: String,
    pub bigint: String,
    pub tinyint: String,
    pub smallint: String,
    pub mediumint: String,
    pub int: String,
    pub float: String,
    pub double: String,
    pub decimal: String,
    pub char_: String,
    pub varchar: String,
    pub text: String,
    pub date: String,
    pub time: String,
    pub datetime: String,
    pub timestamp: String,
    pub update_timestamp: String,
}

impl ColumnFragments {
    pub fn selected(&self) -> &str {
        [
            &self.primary,
            &self.update_timestamp,
            &self.bigint,
            &self.tinyint,
            &self.smallint,
            &self.mediumint,
            &self.int,
            &self.float,
            &self.double,
            &self.decimal,
            &self.char_,
            &self.varchar,
            &self.text,
            &self.date,
            &self.time,
            &self.datetime,
            &self.timestamp,
        ]
        .into_iter()
        .find(|fragment| !fragment.is_empty())
        .map(String::as_str)
        .unwrap_or("")
    }
}
