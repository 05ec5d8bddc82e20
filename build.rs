fn main() {
    // Only the ESP-IDF target has an environment to forward; host builds
    // (replay binary, tests) skip it.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
