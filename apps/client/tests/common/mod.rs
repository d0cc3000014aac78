#![allow(dead_code)]

// Logging is auto-installed for every test binary that declares this module.
#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}
