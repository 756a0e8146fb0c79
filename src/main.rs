fn main() {
    vefod_site::run();
}
