fn main() {
    reqsweep::cli::run();
}
