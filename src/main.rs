fn main() {
    if let Err(e) = gen_api::main_cli() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
