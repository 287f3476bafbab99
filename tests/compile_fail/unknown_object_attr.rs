//! Test unknown type attribute error.

use attribute_accessor::Object;

#[derive(Object)]
#[object(label = "wifi")]
struct Device {
    mtu: u16,
}

fn main() {}
