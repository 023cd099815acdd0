fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The form-store proto shipped with this crate is normally compiled here
    // via `tonic-build`, which shells out to `protoc`. Because `protoc` is not
    // available in every build environment, the generated Rust module is
    // instead checked in at `src/backend/proto_generated.rs` and included
    // directly. We still watch the proto file so a stale checked-in copy is
    // easy to spot when the schema changes.
    println!("cargo:rerun-if-changed=proto/formhive.proto");

    Ok(())
}
