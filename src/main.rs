fn main() {
    vprog::app::cli::run();
}
