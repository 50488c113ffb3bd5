use crate::cli::{SchemaArgs, ScriptArgs};
use relsql::{Schema, SchemaConfig};
use std::path::Path;

fn load(path: &Path) -> anyhow::Result<Schema> {
    let config = SchemaConfig::load(path)
        .map_err(|e| anyhow::anyhow!("failed to load config file {}: {e}", path.display()))?;
    config
        .build()
        .map_err(|e| anyhow::anyhow!("invalid schema in {}: {e}", path.display()))
}

/// Join statements into a script, one terminated statement per block.
fn script(statements: &[String]) -> String {
    statements
        .iter()
        .map(|s| format!("{s};\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit(statements: &[String], output: Option<&Path>) -> anyhow::Result<()> {
    let text = script(statements);
    match output {
        Some(path) => std::fs::write(path, text)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

pub fn check(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = load(&args.config)?;
    println!(
        "{}: {} table(s), {} index(es), param style {}",
        args.config.display(),
        schema.tables().len(),
        schema.indexes().len(),
        schema.param_style()
    );
    Ok(())
}

pub fn ddl(args: ScriptArgs) -> anyhow::Result<()> {
    let schema = load(&args.config)?;
    emit(&schema.bootstrap(), args.output.as_deref())
}

pub fn drop(args: ScriptArgs) -> anyhow::Result<()> {
    let schema = load(&args.config)?;
    emit(&schema.teardown(), args.output.as_deref())
}
