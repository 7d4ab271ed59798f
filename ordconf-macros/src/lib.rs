use ordconf_build::{RenderOptions, render_items};
use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, Result, Token, parse_macro_input};

/// Expand the ordered configuration items for a type, in place.
///
/// ```ignore
/// pub mod widget_configuration {
///     use super::Widget;
///     ordconf::ordered_configuration!(Widget, pointer, document);
/// }
/// ```
///
/// The first argument names the configurable type, which must be in scope.
/// The optional `pointer` flag hands steps a `&mut` reference instead of a
/// clone; `document` attaches doc comments. The expansion defines `Config`,
/// `Configuration`, `Configurator` and friends, so invoke it inside a module of
/// its own.
#[proc_macro]
pub fn ordered_configuration(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as ConfigurationInvocation);

    match render_items(&invocation.options()) {
        Ok(tokens) => tokens.into(),
        Err(err) => Error::new(invocation.configurable.span(), err).to_compile_error().into(),
    }
}

struct ConfigurationInvocation {
    configurable: Ident,
    is_pointer: bool,
    document: bool,
}

impl ConfigurationInvocation {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            // Only reaches the file header, which the macro does not emit.
            package: "main".to_string(),
            configurable: self.configurable.to_string(),
            is_pointer: self.is_pointer,
            document: self.document,
        }
    }
}

impl Parse for ConfigurationInvocation {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::new(Span::call_site(), "expected the configurable type name"));
        }

        let configurable: Ident = input.parse()?;
        let mut is_pointer = false;
        let mut document = false;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let flag: Ident = input.parse()?;
            let seen = match flag.to_string().as_str() {
                "pointer" => std::mem::replace(&mut is_pointer, true),
                "document" => std::mem::replace(&mut document, true),
                other => {
                    return Err(Error::new(
                        flag.span(),
                        format!("unknown flag `{other}`, expected `pointer` or `document`"),
                    ));
                }
            };
            if seen {
                return Err(Error::new(flag.span(), format!("duplicate flag `{flag}`")));
            }
        }

        Ok(Self {
            configurable,
            is_pointer,
            document,
        })
    }
}
