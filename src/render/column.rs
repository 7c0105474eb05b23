//! Column template mapper: turns a parsed column into its one pre-rendered
//! fragment plus a formatted default-value clause.

use crate::model::{Column, ColumnTypeKind};
use crate::parser::lexer::strip_quotes;

use super::context::{ColumnContext, ColumnFragments};
use super::templates;

const DEFAULT_LENGTH: u32 = 0;
const DEFAULT_PRECISION: u32 = 10;
const DEFAULT_SCALE: u32 = 0;

/// Build the render-ready view of one column.
pub fn build_column_context(column: &Column) -> ColumnContext {
    let mut ctx = ColumnContext {
        name: column.name.clone(),
        type_name: column.data_type.to_lowercase(),
        comment: column.comment.clone(),
        default_clause: format_default_clause(column),
        auto_increment: column.auto_increment,
        nullable: !column.not_null,
        update_timestamp: column.update_timestamp,
        length: column.length.unwrap_or(DEFAULT_LENGTH),
        precision: column.precision.unwrap_or(DEFAULT_PRECISION),
        scale: column.scale.unwrap_or(DEFAULT_SCALE),
        fragments: ColumnFragments::default(),
    };
    ctx.fragments = render_fragments(&ctx, column.type_kind);
    ctx
}

/// Format the default-value clause, applied once before family dispatch.
///
/// Timestamp-family columns and ON UPDATE columns take a computed default,
/// datetime-family columns a date-literal default, everything else a plain
/// literal. An empty unquoted default emits no clause.
pub fn format_default_clause(column: &Column) -> String {
    let value = strip_quotes(&column.default);
    if value.is_empty() {
        return String::new();
    }

    if column.type_kind == ColumnTypeKind::Timestamp || column.update_timestamp {
        format!("defaultValueComputed=\"{value}\"")
    } else if column.type_kind == ColumnTypeKind::Datetime {
        format!("defaultValueDate=\"{value}\"")
    } else {
        format!("defaultValue=\"{value}\"")
    }
}

/// Fill exactly one fragment slot.
///
/// `auto_increment` wins over everything (the primary family is keyed on it,
/// not on `primary_key`), the ON UPDATE flag wins over the type family, and
/// otherwise the type kind picks its template. `Other` fills nothing.
fn render_fragments(ctx: &ColumnContext, kind: ColumnTypeKind) -> ColumnFragments {
    let mut fragments = ColumnFragments::default();

    if ctx.auto_increment {
        fragments.primary = render(templates::PRIMARY_COLUMN, ctx);
        return fragments;
    }
    if ctx.update_timestamp {
        fragments.update_timestamp = render(templates::UPDATE_TIMESTAMP_COLUMN, ctx);
        return fragments;
    }

    match kind {
        ColumnTypeKind::BigInt => fragments.bigint = render(templates::BIGINT_COLUMN, ctx),
        ColumnTypeKind::TinyInt => fragments.tinyint = render(templates::TINYINT_COLUMN, ctx),
        ColumnTypeKind::SmallInt => fragments.smallint = render(templates::SMALLINT_COLUMN, ctx),
        ColumnTypeKind::MediumInt => {
            fragments.mediumint = render(templates::MEDIUMINT_COLUMN, ctx)
        }
        ColumnTypeKind::Int => fragments.int = render(templates::INT_COLUMN, ctx),
        ColumnTypeKind::Float => fragments.float = render(templates::FLOAT_COLUMN, ctx),
        ColumnTypeKind::Double => fragments.double = render(templates::DOUBLE_COLUMN, ctx),
        ColumnTypeKind::Decimal => fragments.decimal = render(templates::DECIMAL_COLUMN, ctx),
        ColumnTypeKind::Char => fragments.char_ = render(templates::CHAR_COLUMN, ctx),
        ColumnTypeKind::Varchar => fragments.varchar = render(templates::VARCHAR_COLUMN, ctx),
        ColumnTypeKind::Text => fragments.text = render(templates::TEXT_COLUMN, ctx),
        ColumnTypeKind::Date => fragments.date = render(templates::DATE_COLUMN, ctx),
        ColumnTypeKind::Time => fragments.time = render(templates::TIME_COLUMN, ctx),
        ColumnTypeKind::Datetime => fragments.datetime = render(templates::DATETIME_COLUMN, ctx),
        ColumnTypeKind::Timestamp => {
            fragments.timestamp = render(templates::TIMESTAMP_COLUMN, ctx)
        }
        ColumnTypeKind::Other => {}
    }

    fragments
}

fn render(template: &str, ctx: &ColumnContext) -> String {
    let auto_increment = bool_literal(ctx.auto_increment);
    let nullable = bool_literal(ctx.nullable);
    let length = ctx.length.to_string();
    let precision = ctx.precision.to_string();
    let scale = ctx.scale.to_string();

    templates::substitute(
        template,
        &[
            ("name", &ctx.name),
            ("type", &ctx.type_name),
            ("comment", &ctx.comment),
            ("default", &ctx.default_clause),
            ("auto_increment", auto_increment),
            ("nullable", nullable),
            ("length", &length),
            ("precision", &precision),
            ("scale", &scale),
        ],
    )
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
