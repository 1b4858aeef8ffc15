// End-to-end tests for the VoiceCast Backend API
//
// Each test gets its own server on an ephemeral port, wired exactly like the
// binary. Most suites run over an in-memory store; test_postgres runs the
// Postgres repositories against a private database in a shared container.

mod test_postgres;
mod test_pricing;
