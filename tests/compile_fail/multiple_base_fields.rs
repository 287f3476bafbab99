//! Test two base fields error.

use attribute_accessor::Object;

#[derive(Object)]
struct Device {
    mtu: u16,
}

#[derive(Object)]
struct DualDevice {
    #[object(base)]
    first: Device,
    #[object(base)]
    second: Device,
}

fn main() {}
