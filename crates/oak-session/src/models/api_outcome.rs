/// Common shape of every remote API result: a success flag plus a
/// human-readable message.
pub trait ApiOutcome {
    /// Failed result carrying `message` and nothing else
    fn failure(message: impl Into<String>) -> Self;

    fn is_success(&self) -> bool;

    fn message(&self) -> &str;
}
