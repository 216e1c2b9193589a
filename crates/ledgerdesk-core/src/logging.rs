use tracing::Level;

/// Install the default subscriber for embedders that do not bring their own.
///
/// Setting `LEDGERDESK_DEBUG_LOG` appends DEBUG output to that file;
/// otherwise only warnings reach stderr. Calling this twice is harmless.
pub fn init_tracing() {
    if let Ok(log_path) = std::env::var("LEDGERDESK_DEBUG_LOG") {
        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let _ = tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(Level::DEBUG)
                .with_target(true)
                .with_ansi(false)
                .try_init();
            return;
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .try_init();
}
