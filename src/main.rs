use cli_chess::console;

fn main() {
    console::run();
}
