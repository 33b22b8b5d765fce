use sts_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_logger_owns_the_process_subscriber() {
    let logger = Logger::builder()
        .name("sts-server")
        .env_filter("sts_kernel=debug")
        .init()
        .expect("console logger should install the subscriber");
    assert!(logger.guard().is_none(), "console output runs without a background writer");

    tracing::debug!(target: "sts_kernel", "root configuration bound");

    let err = Logger::builder()
        .name("sts-server-reload")
        .level(LevelFilter::TRACE)
        .init()
        .expect_err("the process subscriber is already installed");

    assert!(matches!(err, LoggerError::Subscriber { context: None, .. }));
    assert!(err.to_string().starts_with("Tracing subscriber error: "));
}
