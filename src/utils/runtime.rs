use anyhow::Result;

/// Everything runs on one thread: the only async work is the quote request and the pomodoro
/// ticks.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
