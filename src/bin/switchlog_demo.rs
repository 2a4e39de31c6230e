use switchlog::{create_output_with_config, LogConfig, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Fixed app.log / logs.json unless SWITCHLOG_FILE_PATH / SWITCHLOG_JSON_PATH are set
    let config = LogConfig::from_env()?;

    println!("=== Simple Logger Demo ===\n");

    println!("1. Logging to console:");
    let mut logger = Logger::new(create_output_with_config("console", &config)?);
    logger.info("App started")?;
    logger.warning("Low memory")?;
    logger.error("File not found")?;

    print_separator();

    println!("2. Switching to file logging:");
    logger.change_output(create_output_with_config("file", &config)?);
    logger.info("Now logging to file")?;
    logger.error("Database connection failed")?;
    println!("Check '{}' file!", config.outputs.file.path.display());

    print_separator();

    println!("3. Switching to JSON logging:");
    logger.change_output(create_output_with_config("json", &config)?);
    logger.info("Now logging to JSON")?;
    logger.warning("API rate limit reached")?;
    println!("Check '{}' file!", config.outputs.structured.path.display());

    print_separator();

    println!("4. Using multiple loggers at once:");
    let console_logger = Logger::new(create_output_with_config("console", &config)?);
    let file_logger = Logger::new(create_output_with_config("file", &config)?);
    console_logger.info("This goes to console")?;
    file_logger.info("This goes to file")?;

    println!("\nDone! Check the files to see the saved logs.");
    Ok(())
}

fn print_separator() {
    println!("\n{}\n", "-".repeat(30));
}
