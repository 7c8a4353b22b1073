fn main() -> Result<(), Box<dyn std::error::Error>> {
    dsa_sage::cli::main()
}
