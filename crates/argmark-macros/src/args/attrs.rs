//! Attribute parsing for the Args derive macro.
//!
//! This module provides parsers for the container-level `#[argmark(...)]`
//! attribute and the field-level `#[arg(...)]` attribute.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Lit, Meta, MetaNameValue, Result, Token,
};

/// How a flag form is specified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form<T> {
    /// Derived from the field name: `#[arg(short)]`.
    Auto,
    /// Given explicitly: `#[arg(short = 'n')]`.
    Explicit(T),
}

/// Field-level attributes from `#[arg(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ArgAttr {
    pub short: Option<Form<char>>,
    pub long: Option<Form<String>>,
    pub required: bool,
    pub description: Option<String>,
    pub skip: bool,
}

/// Container-level attributes from `#[argmark(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ContainerAttr {
    pub name: Option<String>,
    pub about: Option<String>,
    pub version: Option<String>,
    pub version_enabled: bool,
    pub help: bool,
}

fn lit_of(nv: &MetaNameValue) -> Option<&Lit> {
    match &nv.value {
        Expr::Lit(ExprLit { lit, .. }) => Some(lit),
        _ => None,
    }
}

fn string_value(nv: &MetaNameValue, key: &str) -> Result<String> {
    match lit_of(nv) {
        Some(Lit::Str(s)) => Ok(s.value()),
        _ => Err(Error::new(
            nv.value.span(),
            format!("{} must be a string literal", key),
        )),
    }
}

fn char_value(nv: &MetaNameValue) -> Result<char> {
    let (value, span) = match lit_of(nv) {
        Some(Lit::Char(c)) => return Ok(c.value()),
        Some(Lit::Str(s)) => (s.value(), s.span()),
        _ => {
            return Err(Error::new(
                nv.value.span(),
                "short must be a char or string literal",
            ))
        }
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::new(span, "short must be a single character")),
    }
}

impl Parse for ArgAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ArgAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("short") {
                        attr.short = Some(Form::Auto);
                    } else if p.is_ident("long") {
                        attr.long = Some(Form::Auto);
                    } else if p.is_ident("required") {
                        attr.required = true;
                    } else if p.is_ident("skip") {
                        attr.skip = true;
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "unknown arg attribute. Expected: short, long, required, desc, or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) => {
                    if nv.path.is_ident("short") {
                        attr.short = Some(Form::Explicit(char_value(nv)?));
                    } else if nv.path.is_ident("long") {
                        let long = string_value(nv, "long")?;
                        if long.is_empty() {
                            return Err(Error::new(nv.value.span(), "long must not be empty"));
                        }
                        attr.long = Some(Form::Explicit(long));
                    } else if nv.path.is_ident("desc") || nv.path.is_ident("description") {
                        attr.description = Some(string_value(nv, "desc")?);
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: short, long, or desc",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown arg attribute. Expected: short, long, required, desc = \"...\", or skip",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("help") => attr.help = true,
                Meta::Path(p) if p.is_ident("version") => attr.version_enabled = true,
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attr.name = Some(string_value(nv, "name")?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("about") => {
                    attr.about = Some(string_value(nv, "about")?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("version") => {
                    attr.version = Some(string_value(nv, "version")?);
                    attr.version_enabled = true;
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown argmark attribute. Expected: name = \"...\", about = \"...\", version, version = \"...\", or help",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[arg(...)]` attributes from a field's attributes.
pub fn parse_arg_attrs(attrs: &[Attribute]) -> Result<ArgAttr> {
    for attr in attrs {
        if attr.path().is_ident("arg") {
            return attr.parse_args::<ArgAttr>();
        }
    }
    Ok(ArgAttr::default())
}

/// Extract the `#[argmark(...)]` attribute from a struct's attributes.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    let mut found: Option<ContainerAttr> = None;
    for attr in attrs {
        if attr.path().is_ident("argmark") {
            if found.is_some() {
                return Err(Error::new(
                    attr.span(),
                    "only one #[argmark(...)] attribute is allowed",
                ));
            }
            found = Some(attr.parse_args::<ContainerAttr>()?);
        }
    }
    Ok(found.unwrap_or_default())
}
