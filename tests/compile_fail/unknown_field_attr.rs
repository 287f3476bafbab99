//! Test unknown field attribute error.

use attribute_accessor::Object;

#[derive(Object)]
struct Device {
    #[object(skip)]
    mtu: u16,
}

fn main() {}
