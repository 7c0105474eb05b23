//! Fixed column fragment templates and placeholder substitution.
//!
//! Rendering is literal placeholder substitution; the templates carry no
//! conditional logic. A column with an empty default clause leaves a stray
//! `" >"` behind, which the assembler's tidy pass collapses to `">"`.

/// Rendered when `auto_increment` is set, regardless of type family.
pub const PRIMARY_COLUMN: &str = r#"<column name="{{name}}" type="${type.{{type}}}" remarks="{{comment}}" autoIncrement="{{auto_increment}}">
                <constraints primaryKey="true" nullable="false"/>
            </column>"#;

pub const BIGINT_COLUMN: &str = r#"<column name="{{name}}" type="${type.bigint}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const TINYINT_COLUMN: &str = r#"<column name="{{name}}" type="${type.tinyint}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const SMALLINT_COLUMN: &str = r#"<column name="{{name}}" type="${type.smallint}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const MEDIUMINT_COLUMN: &str = r#"<column name="{{name}}" type="${type.mediumint}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const INT_COLUMN: &str = r#"<column name="{{name}}" type="${type.int}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const FLOAT_COLUMN: &str = r#"<column name="{{name}}" type="${type.float}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const DOUBLE_COLUMN: &str = r#"<column name="{{name}}" type="${type.double}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const DECIMAL_COLUMN: &str = r#"<column name="{{name}}" type="${type.decimal}({{precision}}, {{scale}})" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const CHAR_COLUMN: &str = r#"<column name="{{name}}" type="${type.char}({{length}})" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const VARCHAR_COLUMN: &str = r#"<column name="{{name}}" type="${type.varchar}({{length}})" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

/// Text columns carry no default clause.
pub const TEXT_COLUMN: &str = r#"<column name="{{name}}" type="${type.text}" remarks="{{comment}}">
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const DATE_COLUMN: &str = r#"<column name="{{name}}" type="${type.date}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const TIME_COLUMN: &str = r#"<column name="{{name}}" type="${type.time}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const DATETIME_COLUMN: &str = r#"<column name="{{name}}" type="${type.datetime}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

pub const TIMESTAMP_COLUMN: &str = r#"<column name="{{name}}" type="${type.timestamp}" remarks="{{comment}}" {{default}}>
                <constraints nullable="{{nullable}}"/>
            </column>"#;

/// Selected by the ON UPDATE CURRENT_TIMESTAMP flag, not by type name.
pub const UPDATE_TIMESTAMP_COLUMN: &str = r#"<column name="{{name}}" type="${type.timestamp}" remarks="{{comment}}"
                    defaultValueComputed="CURRENT_TIMESTAMP">
                <constraints nullable="{{nullable}}"/>
            </column>"#;

/// Replace every `{{key}}` placeholder with its value. Unknown placeholders
/// are left in place.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in values {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let rendered = substitute("{{a}}-{{b}}-{{a}}", &[("a", "x"), ("b", "y")]);
        assert_eq!(rendered, "x-y-x");
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders() {
        let rendered = substitute("{{known}} {{unknown}}", &[("known", "v")]);
        assert_eq!(rendered, "v {{unknown}}");
    }

    #[test]
    fn test_primary_fragment_shape() {
        let rendered = substitute(
            PRIMARY_COLUMN,
            &[
                ("name", "id"),
                ("type", "bigint"),
                ("comment", "Primary Key"),
                ("auto_increment", "true"),
            ],
        );
        assert_eq!(
            rendered,
            "<column name=\"id\" type=\"${type.bigint}\" remarks=\"Primary Key\" autoIncrement=\"true\">\n                <constraints primaryKey=\"true\" nullable=\"false\"/>\n            </column>"
        );
    }
}
