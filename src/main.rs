use crate::shell::start_shell;

mod device;
mod driver;
mod shell;
mod utils;

fn main() {
    start_shell();
}
