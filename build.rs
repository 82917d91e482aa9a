fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(true)
        .build_client(true) // The generated client backs src/client.rs and the tests
        .compile(&["proto/io_service.proto"], &["proto"])?;
    Ok(())
}
