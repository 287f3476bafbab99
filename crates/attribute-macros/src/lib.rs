//! Attribute accessor proc macros.
//!
//! # Macros
//!
//! - `#[derive(Object)]` - Implement `TypeInfo` and `ObjectBase` for a struct
//!
//! Generated code refers to `::attribute_accessor`, so use the macro through
//! its re-export in that crate.
//!
//! # Example
//!
//! ```ignore
//! use attribute_accessor::Object;
//!
//! #[derive(Object)]
//! #[object(name = "WifiDevice")]
//! pub struct WifiDevice {
//!     #[object(base)]
//!     device: Device,
//!     channel: u8,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod derive_object;

/// Derive `TypeInfo` and `ObjectBase` for a struct.
///
/// # Attributes
///
/// - `#[object(name = "...")]` - Override the type name (default: Rust struct name)
///
/// # Field Attributes
///
/// - `#[object(base)]` - The field holds the parent object; accessors bound to
///   the parent type reach it through the derived `base`/`base_mut`. At most
///   one field may be marked.
#[proc_macro_derive(Object, attributes(object))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    derive_object::derive_object_impl(input)
}
