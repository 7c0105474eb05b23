//! Changelog assembly: filtering tables, building render contexts and
//! writing the rendered template assets to disk.

pub mod assets;
pub mod column;
pub mod context;
pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ChangelogError;
use crate::model::{Database, Table};
use crate::parser::{MYSQL, POSTGRES};
use crate::util::list_contains_ci;

pub use assets::AssetSet;
pub use column::build_column_context;
pub use context::{ColumnContext, ColumnFragments, RenderContext, TableContext};

/// Per-table template assets carry this fixed name; it is replaced with
/// `<table>_<version>` in both path and content.
pub const FIXED_TEMPLATE_NAME: &str = "template_employee_1.0.0";

/// Suffix stripped from every asset path on write.
pub const TMPL_SUFFIX: &str = ".tmpl";

const DATE_FORMAT: &str = "%Y%m%d";

static EXTRA_NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Everything the assembler needs besides the parsed database and assets.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub author: String,
    pub version: String,
    pub dialect: String,
    pub cwd: PathBuf,
    pub output_dir: PathBuf,
    /// When non-empty, only these tables are rendered.
    pub includes: Vec<String>,
    /// Tables never rendered, checked before includes.
    pub excludes: Vec<String>,
    /// Declared for config parity; not consulted during rendering.
    pub prefixes: Vec<String>,
}

/// Render the whole changelog set for a parsed database.
///
/// Normal assets are written first, then one rendered set per surviving
/// table in parse order. The first failure aborts the remaining iteration.
/// Returns the written paths.
pub fn generate(
    database: &Database,
    assets: &AssetSet,
    args: &RenderArgs,
) -> Result<Vec<PathBuf>, ChangelogError> {
    let mut written = write_normal_assets(assets, &args.output_dir)?;

    for table in &database.tables {
        if !args.excludes.is_empty() && list_contains_ci(&args.excludes, &table.name) {
            continue;
        }
        if !args.includes.is_empty() && !list_contains_ci(&args.includes, &table.name) {
            continue;
        }

        let ctx = build_render_context(args, table);
        written.extend(write_table_assets(&ctx, assets, &args.output_dir)?);
    }

    Ok(written)
}

/// Build the transient per-table context, rendering every column through
/// the template mapper.
pub fn build_render_context(args: &RenderArgs, table: &Table) -> RenderContext {
    RenderContext {
        author: args.author.clone(),
        version: args.version.clone(),
        date: Local::now().format(DATE_FORMAT).to_string(),
        dialect: args.dialect.clone(),
        mysql: MYSQL,
        postgres: POSTGRES,
        cwd: args.cwd.display().to_string(),
        path: args.output_dir.display().to_string(),
        table: TableContext {
            name: table.name.clone(),
            comment: table.comment.clone(),
            columns: table.columns.iter().map(build_column_context).collect(),
        },
    }
}

/// Write every asset outside the per-table set verbatim, with only the
/// `.tmpl` suffix stripped from its path.
fn write_normal_assets(
    assets: &AssetSet,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ChangelogError> {
    fs::create_dir_all(output_dir).map_err(|source| ChangelogError::OutputDirCreate {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for (path, content) in assets.iter() {
        if path.contains(FIXED_TEMPLATE_NAME) {
            continue;
        }

        let target = output_dir.join(strip_tmpl_suffix(path));
        ensure_parent_dir(&target)?;
        write_file(&target, content)?;
        written.push(target);
    }

    Ok(written)
}

/// Render and write every per-table asset for one table.
fn write_table_assets(
    ctx: &RenderContext,
    assets: &AssetSet,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ChangelogError> {
    let target_name = format!("{}_{}", ctx.table.name, ctx.version);
    let columns = join_column_fragments(&ctx.table);

    let mut written = Vec::new();
    for (path, content) in assets.iter() {
        if !path.contains(FIXED_TEMPLATE_NAME) {
            continue;
        }

        let rel_path = path.replace(FIXED_TEMPLATE_NAME, &target_name);
        let target = output_dir.join(strip_tmpl_suffix(&rel_path));
        ensure_parent_dir(&target)?;

        let content = content.replace(FIXED_TEMPLATE_NAME, &target_name);
        let content = templates::substitute(&content, &ctx.placeholder_values(&columns));
        write_file(&target, &tidy(&content))?;
        written.push(target);
    }

    Ok(written)
}

/// Concatenate each column's selected fragment; columns outside every
/// family contribute nothing.
fn join_column_fragments(table: &TableContext) -> String {
    table
        .columns
        .iter()
        .map(ColumnContext::fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n            ")
}

/// Collapse runs of two or more newlines and drop the stray space left
/// before `>` by an empty default clause.
fn tidy(content: &str) -> String {
    let content = content.trim();
    let content = EXTRA_NEWLINES_RE.replace_all(content, "\n");
    content.replace(" >", ">")
}

fn strip_tmpl_suffix(path: &str) -> &str {
    path.strip_suffix(TMPL_SUFFIX).unwrap_or(path)
}

fn ensure_parent_dir(target: &Path) -> Result<(), ChangelogError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| ChangelogError::OutputDirCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ChangelogError> {
    let write_err = |source| ChangelogError::ChangelogWrite {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, content).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(write_err)?;
    }

    Ok(())
}
