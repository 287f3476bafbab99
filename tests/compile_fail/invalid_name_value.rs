//! Test non-string name value error.

use attribute_accessor::Object;

#[derive(Object)]
#[object(name = 5)]
struct Device;

fn main() {}
