//! File-level rendering tests against a temp directory, plus a full
//! end-to-end run through the public entry point.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use ddl2changelog::model::Database;
use ddl2changelog::parser::{Registry, MYSQL};
use ddl2changelog::render::{self, AssetSet, RenderArgs, FIXED_TEMPLATE_NAME};
use ddl2changelog::{generate_changelogs, GenerateOptions};

fn parse(sql: &str) -> Database {
    let registry = Registry::with_defaults();
    registry.acquire(MYSQL).unwrap().parse(sql).unwrap().database
}

fn args(output_dir: PathBuf) -> RenderArgs {
    RenderArgs {
        author: "amy".to_string(),
        version: "1.0.0".to_string(),
        dialect: MYSQL.to_string(),
        cwd: PathBuf::from("."),
        output_dir,
        ..RenderArgs::default()
    }
}

fn synthetic_assets() -> AssetSet {
    AssetSet::from_entries([
        (
            "liquibase.properties.tmpl".to_string(),
            "driver=org.test.Driver\n".to_string(),
        ),
        (
            format!("changelog/{FIXED_TEMPLATE_NAME}.xml.tmpl"),
            "<changeSet author=\"{{author}}\">\n{{columns}}\n</changeSet>\n".to_string(),
        ),
    ])
}

#[test]
fn test_normal_assets_written_verbatim_without_suffix() {
    let dir = TempDir::new().unwrap();
    let database = parse("create table t (id int);");

    let written =
        render::generate(&database, &synthetic_assets(), &args(dir.path().to_path_buf()))
            .unwrap();

    let properties = dir.path().join("liquibase.properties");
    assert!(written.contains(&properties));
    assert_eq!(
        fs::read_to_string(&properties).unwrap(),
        "driver=org.test.Driver\n"
    );
}

#[test]
fn test_table_asset_renamed_and_substituted() {
    let dir = TempDir::new().unwrap();
    let database = parse("create table orders (id bigint auto_increment not null comment 'PK');");

    render::generate(&database, &synthetic_assets(), &args(dir.path().to_path_buf())).unwrap();

    let changelog = dir.path().join("changelog/orders_1.0.0.xml");
    let content = fs::read_to_string(&changelog).unwrap();
    assert!(content.contains("author=\"amy\""));
    assert!(content.contains("name=\"id\""));
    assert!(content.contains("autoIncrement=\"true\""));
    assert!(!content.contains("{{"));
}

#[test]
fn test_excludes_win_over_includes() {
    let dir = TempDir::new().unwrap();
    let database = parse("create table orders (id int); create table users (id int);");

    let mut args = args(dir.path().to_path_buf());
    args.includes = vec!["ORDERS".to_string(), "users".to_string()];
    args.excludes = vec!["Orders".to_string()];

    render::generate(&database, &synthetic_assets(), &args).unwrap();

    assert!(!dir.path().join("changelog/orders_1.0.0.xml").exists());
    assert!(dir.path().join("changelog/users_1.0.0.xml").exists());
}

#[test]
fn test_includes_filter_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let database = parse("create table orders (id int); create table users (id int);");

    let mut args = args(dir.path().to_path_buf());
    args.includes = vec!["USERS".to_string()];

    render::generate(&database, &synthetic_assets(), &args).unwrap();

    assert!(!dir.path().join("changelog/orders_1.0.0.xml").exists());
    assert!(dir.path().join("changelog/users_1.0.0.xml").exists());
}

#[test]
fn test_blank_lines_collapsed_in_rendered_output() {
    let dir = TempDir::new().unwrap();
    let database = parse("create table t (id int, x geometry);");

    let assets = AssetSet::from_entries([(
        format!("changelog/{FIXED_TEMPLATE_NAME}.xml.tmpl"),
        "<a>\n\n\n{{columns}}\n</a>".to_string(),
    )]);

    render::generate(&database, &assets, &args(dir.path().to_path_buf())).unwrap();

    let content = fs::read_to_string(dir.path().join("changelog/t_1.0.0.xml")).unwrap();
    assert!(!content.contains("\n\n"));
    assert!(!content.contains(" >"));
}

#[cfg(unix)]
#[test]
fn test_written_files_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let database = parse("create table t (id int);");

    render::generate(&database, &synthetic_assets(), &args(dir.path().to_path_buf())).unwrap();

    let mode = fs::metadata(dir.path().join("liquibase.properties"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_end_to_end_with_embedded_templates_and_config() {
    let dir = TempDir::new().unwrap();

    let sql_path = dir.path().join("schema.sql");
    fs::write(
        &sql_path,
        r#"
create table shop.orders
(
    id          bigint auto_increment               not null comment 'Order ID' primary key,
    order_no    varchar(32)                         not null comment 'Order No.',
    update_time timestamp default CURRENT_TIMESTAMP not null on update CURRENT_TIMESTAMP comment 'Updated'
) COMMENT = 'ORDERS';

create table shop.audit_log (id bigint not null);
"#,
    )
    .unwrap();

    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{
            "project": {"author": "beth", "version": "2.1.0"},
            "database": {"excludes": ["audit_log"]}
        }"#,
    )
    .unwrap();

    let output_dir = dir.path().join("out");
    let written = generate_changelogs(GenerateOptions {
        sql_path,
        output_dir: Some(output_dir.clone()),
        config_path: Some(config_path),
        ..GenerateOptions::default()
    })
    .unwrap();

    // two normal assets plus one table survives the exclude filter
    assert_eq!(written.len(), 3);
    assert!(output_dir.join("liquibase.properties").exists());
    assert!(output_dir.join("changelog-master.xml").exists());
    assert!(!output_dir.join("changelog/audit_log_2.1.0.xml").exists());

    let changelog =
        fs::read_to_string(output_dir.join("changelog/orders_2.1.0.xml")).unwrap();
    assert!(changelog.contains("author=\"beth\""));
    assert!(changelog.contains("tableName=\"orders\""));
    assert!(changelog.contains("remarks=\"ORDERS\""));
    assert!(changelog.contains("autoIncrement=\"true\""));
    assert!(changelog.contains("defaultValueComputed=\"CURRENT_TIMESTAMP\""));
    // the changeSet id carries the date stamp and version
    assert!(changelog.contains("_create_table_orders_2.1.0"));
}
