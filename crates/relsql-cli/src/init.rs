use crate::cli::InitArgs;
use std::path::Path;

const TEMPLATE: &str = r#"# Placeholder convention: qmark | numeric | named | format | pyformat
param_style = "qmark"

[[tables]]
name = "users"
columns = [
    "id INTEGER PRIMARY KEY",
    "email TEXT NOT NULL",
    "name TEXT",
]
unique = [["email"]]
# primary_key = ["id"]
# options = ["STRICT"]

[[indexes]]
name = "users_name_idx"
table = "users"
columns = ["name"]
unique = false
"#;

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    write_template(&args.config)?;
    println!("wrote {}", args.config.display());
    Ok(())
}

fn write_template(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    std::fs::write(path, TEMPLATE.trim_start())
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}
