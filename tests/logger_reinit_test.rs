use data_sync::DataError;

#[test]
fn test_second_download_reports_logger_init_error() {
    let first = data_sync::download();
    assert!(first.is_ok());

    let second = data_sync::download();
    assert!(matches!(second, Err(DataError::LoggerInit { .. })));
}
