fn main() {
    clayton_bot::run();
}
