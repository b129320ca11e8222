use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing simplistic…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    // Opening the store creates the schema.
    let store = TaskStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    if let Err(e) = store.audit(
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 simplistic initialization completed!");
    Ok(())
}
