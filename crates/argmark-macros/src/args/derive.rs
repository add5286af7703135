//! Implementation of the `#[derive(Args)]` macro.
//!
//! Generates an `argmark::Args` implementation: a schema built once per type
//! and cached, and a `slot_mut` lookup from declaration name to field.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_arg_attrs, parse_container_attrs, Form};

/// Main implementation of the Args derive macro.
pub fn args_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Args cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Args can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Args can only be derived for structs",
            ))
        }
    };

    let container = parse_container_attrs(&input.attrs)?;

    let program_name = container
        .name
        .unwrap_or_else(|| struct_name.unraw().to_string().to_lowercase());
    let mut meta_calls = vec![quote! { .name(#program_name) }];
    if let Some(about) = &container.about {
        meta_calls.push(quote! { .about(#about) });
    }
    match &container.version {
        Some(version) => meta_calls.push(quote! { .version(#version) }),
        None if container.version_enabled => meta_calls.push(quote! { .version_flag() }),
        None => {}
    }
    if container.help {
        meta_calls.push(quote! { .help() });
    }

    let mut declarations: Vec<TokenStream> = Vec::new();
    let mut slot_arms: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_arg_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let arg_name = field_ident.unraw().to_string();
        let ty = &field.ty;

        let mut builder = quote! {
            ::argmark::ArgumentDeclaration::new(
                #arg_name,
                <#ty as ::argmark::ArgValue>::VALUE_TYPE,
            )
        };
        match attrs.short {
            Some(Form::Auto) => builder.extend(quote! { .auto_short() }),
            Some(Form::Explicit(c)) => builder.extend(quote! { .short(#c) }),
            None => {}
        }
        match attrs.long {
            Some(Form::Auto) => builder.extend(quote! { .auto_long() }),
            Some(Form::Explicit(long)) => builder.extend(quote! { .long(#long) }),
            None => {}
        }
        if attrs.required {
            builder.extend(quote! { .required() });
        }
        if let Some(desc) = &attrs.description {
            builder.extend(quote! { .description(#desc) });
        }

        declarations.push(builder);
        slot_arms.push(quote! {
            #arg_name => ::core::option::Option::Some(&mut self.#field_ident),
        });
    }

    let expanded = quote! {
        impl ::argmark::Args for #struct_name {
            fn schema() -> ::argmark::Result<&'static ::argmark::Schema> {
                static SCHEMA: ::argmark::__private::OnceCell<::argmark::Schema> =
                    ::argmark::__private::OnceCell::new();
                SCHEMA.get_or_try_init(|| {
                    ::argmark::Schema::builder()
                        #(#meta_calls)*
                        #(.arg(#declarations))*
                        .build()
                })
            }

            fn slot_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn ::argmark::ArgSlot> {
                match name {
                    #(#slot_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> Result<String> {
        let input: DeriveInput = syn::parse_str(src)?;
        args_derive_impl(input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_rejects_enum() {
        let err = expand("enum Cli { A }").unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let err = expand("struct Cli(String);").unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_generics() {
        let err = expand("struct Cli<T> { value: T }").unwrap_err();
        assert!(err.to_string().contains("generic"));
    }

    #[test]
    fn test_default_program_name() {
        let out = expand("struct MyTool { file: String }").unwrap();
        assert!(out.contains("\"mytool\""));
        assert!(!out.contains("\"MyTool\""));
    }

    #[test]
    fn test_skip_field_has_no_slot() {
        let out = expand(
            r#"struct Cli {
                file: String,
                #[arg(skip)]
                cache: Vec<u8>,
            }"#,
        )
        .unwrap();
        assert!(out.contains("\"file\""));
        assert!(!out.contains("\"cache\""));
    }

    #[test]
    fn test_raw_identifier_name() {
        let out = expand("struct Cli { #[arg(long)] r#type: String }").unwrap();
        assert!(out.contains("\"type\""));
        assert!(out.contains("auto_long"));
    }
}
