//! Structural model built from DDL text: database -> tables -> columns.

/// Parse product returned by a dialect parser.
#[derive(Debug, Clone)]
pub struct Ast {
    /// The raw SQL the parser was given
    pub sql: String,
    /// The individual statements after comment stripping and splitting
    pub statements: Vec<String>,
    /// The structural model
    pub database: Database,
}

/// Name used when no table carried a database-qualified name.
pub const UNKNOWN_DATABASE: &str = "Unknown";

/// A parsed database: a name plus its tables in statement order.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub name: String,
    pub tables: Vec<Table>,
}

/// A parsed table definition.
///
/// `ALTER TABLE ... COMMENT = '...'` statements produce a stub with
/// `alter_statement: true` that is merged into the matching table by name.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub database: String,
    pub name: String,
    pub comment: String,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
    pub create_statement: bool,
    pub alter_statement: bool,
}

/// A parsed column definition.
///
/// `length`, `precision` and `scale` are present only when a parenthetical
/// size clause was parsed; render-time defaults are 0, 10 and 0.
///
/// `primary_key` and `auto_increment` are tracked separately on purpose:
/// the primary column template is selected by `auto_increment` alone, so a
/// `PRIMARY KEY` column without `AUTO_INCREMENT` renders as a plain column
/// of its type family.
#[derive(Debug, Clone, Default)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub type_kind: ColumnTypeKind,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub not_null: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub auto_increment: bool,
    pub default: String,
    pub update_timestamp: bool,
    pub comment: String,
}

/// Index placeholder carried through to the render context.
#[derive(Debug, Clone, Default)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
}

/// Column type family, resolved once at parse time from the declared type
/// name. Template dispatch pattern-matches on this instead of re-comparing
/// type-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnTypeKind {
    BigInt,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Float,
    Double,
    Decimal,
    Char,
    Varchar,
    Text,
    Date,
    Time,
    Datetime,
    Timestamp,
    /// Recognized as a data type by the dialect but outside the sixteen
    /// template families; renders no column fragment.
    #[default]
    Other,
}

impl ColumnTypeKind {
    /// Resolve a declared type name (case-insensitive) to its family.
    ///
    /// Postgres synonyms map onto the closest MySQL-named family.
    pub fn from_type_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "bigint" | "bigserial" => ColumnTypeKind::BigInt,
            "tinyint" => ColumnTypeKind::TinyInt,
            "smallint" => ColumnTypeKind::SmallInt,
            "mediumint" => ColumnTypeKind::MediumInt,
            "int" | "integer" | "serial" => ColumnTypeKind::Int,
            "float" | "real" | "float4" => ColumnTypeKind::Float,
            "double" | "float8" => ColumnTypeKind::Double,
            "decimal" | "numeric" => ColumnTypeKind::Decimal,
            "char" => ColumnTypeKind::Char,
            "varchar" => ColumnTypeKind::Varchar,
            "text" => ColumnTypeKind::Text,
            "date" => ColumnTypeKind::Date,
            "time" => ColumnTypeKind::Time,
            "datetime" => ColumnTypeKind::Datetime,
            "timestamp" | "timestamptz" => ColumnTypeKind::Timestamp,
            _ => ColumnTypeKind::Other,
        }
    }
}
