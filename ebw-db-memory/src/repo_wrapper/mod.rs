mod read_only;

type Result<T> = std::result::Result<T, ebw_core::repositories::Error>;

/// Writes require an exclusive connection and a transaction.
fn read_only_violation() -> ebw_core::repositories::Error {
    ebw_core::repositories::Error::Other(anyhow::anyhow!(
        "write access requires an exclusive transaction"
    ))
}
