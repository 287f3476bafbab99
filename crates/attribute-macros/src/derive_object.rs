//! Implementation of the `#[derive(Object)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input};

use crate::attrs::{FieldAttrs, TypeAttrs};

pub fn derive_object_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_object_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_object_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attrs = TypeAttrs::from_attrs(&input.attrs)?;
    let type_name = attrs.name.clone().unwrap_or_else(|| name.to_string());
    let base = find_base_field(input)?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let base_methods = match base {
        Some(member) => quote! {
            fn base(&self) -> ::core::option::Option<&dyn ::attribute_accessor::ObjectBase> {
                ::core::option::Option::Some(&self.#member)
            }

            fn base_mut(&mut self) -> ::core::option::Option<&mut dyn ::attribute_accessor::ObjectBase> {
                ::core::option::Option::Some(&mut self.#member)
            }
        },
        None => quote! {},
    };

    Ok(quote! {
        impl #impl_generics ::attribute_accessor::TypeInfo for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }
        }

        impl #impl_generics ::attribute_accessor::ObjectBase for #name #ty_generics #where_clause {
            fn object_type_name(&self) -> &'static str {
                #type_name
            }

            #base_methods
        }
    })
}

/// Find the field marked `#[object(base)]`, if any.
fn find_base_field(input: &DeriveInput) -> syn::Result<Option<Member>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Object)] is only supported on structs",
        ));
    };

    let mut base: Option<Member> = None;
    let fields: Vec<_> = match &data.fields {
        Fields::Named(fields) => fields.named.iter().collect(),
        Fields::Unnamed(fields) => fields.unnamed.iter().collect(),
        Fields::Unit => Vec::new(),
    };

    for (index, field) in fields.into_iter().enumerate() {
        let field_attrs = FieldAttrs::from_attrs(&field.attrs)?;
        if !field_attrs.base {
            continue;
        }

        if base.is_some() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "only one field can be marked #[object(base)]",
            ));
        }

        base = Some(match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        });
    }

    Ok(base)
}
