fn main() -> anyhow::Result<()> {
    fwmon::run()
}
