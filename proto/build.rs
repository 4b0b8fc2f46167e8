#[cfg(feature = "generate")]
fn main() {
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src")
        .compile_protos(&["proto/topigo.proto"], &["proto"])
        .unwrap();
}

#[cfg(not(feature = "generate"))]
fn main() {}
