/// Routes `log` output through the test harness. Set `RUST_LOG=equality=trace`
/// to see why a comparison failed.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
