//! Test derive on an enum error.

use attribute_accessor::Object;

#[derive(Object)]
enum Mode {
    Adhoc,
    Infrastructure,
}

fn main() {}
