fn main() -> anyhow::Result<()> {
    zls_build::run()
}
