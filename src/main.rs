fn main() -> eframe::Result<()> {
    env_logger::init();
    specgrid::run()
}
