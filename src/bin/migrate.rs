use bakery_works::{Config, init_tracing, run_migrations};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level, config.logging.json_format);

    match run_migrations(&config.database).await {
        Ok(()) => println!("Migrations applied to {}", config.database.name),
        Err(err) => {
            eprintln!("Migration failed: {err}");
            std::process::exit(1);
        }
    }
}
