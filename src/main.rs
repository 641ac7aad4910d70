fn main() {
    #[cfg(feature = "csr")]
    portfolio::start();
}
