use challenge_core::tracing::init_tracing;

#[test]
fn init_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!(target: "challenge_core", "tracing initialized twice without panicking");
}
