//! Fixed skeleton of the generated configuration module.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::error::GenerateError;

/// Names a configurable type may not take: items the skeleton defines and
/// the prelude names its signatures rely on.
const RESERVED_NAMES: &[&str] = &[
    "Config",
    "ConfigError",
    "ConfigFn",
    "Configuration",
    "Configurator",
    "Step",
    "DEFAULT_ORDER",
    "builtin_configuration_example",
    "builtins",
    "configure_all",
    "default_config",
    "external_configuration_example",
    "new_config",
    "new_configuration",
    "Box",
    "Clone",
    "F",
    "Fn",
    "Ok",
    "Result",
    "Send",
    "Sync",
    "Vec",
    "bool",
    "i32",
    "std",
    "usize",
];

/// Fields, parameters and functions in scope wherever the binding is.
const SKELETON_LOCALS: &[&str] = &[
    "builtins",
    "config",
    "configs",
    "configuration",
    "configured",
    "fns",
    "list",
    "order",
    "run",
];

/// Parameters substituted into the configuration skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Module that will contain the generated file.
    pub package: String,
    /// Name of the type the configuration steps act on.
    pub configurable: String,
    /// Pass the target to each step as `&mut` instead of by value.
    pub is_pointer: bool,
    /// Emit doc comments on the public items.
    pub document: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            configurable: "Item".to_string(),
            is_pointer: false,
            document: false,
        }
    }
}

impl RenderOptions {
    pub fn new(package: impl Into<String>, configurable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            configurable: configurable.into(),
            ..Self::default()
        }
    }

    /// Parameter name used for the target in generated signatures.
    ///
    /// `GuildMember` becomes `guild_member`. Names that collide with a keyword
    /// or with a local of the skeleton get a trailing underscore.
    pub fn binding(&self) -> String {
        let name = to_snake_case(&self.configurable);
        if syn::parse_str::<Ident>(&name).is_ok() && !SKELETON_LOCALS.contains(&name.as_str()) {
            name
        } else {
            format!("{name}_")
        }
    }

    /// Path of the enclosing module as seen from the crate root.
    fn module_path(&self) -> String {
        if self.package == "main" {
            "crate".to_string()
        } else {
            format!("crate::{}", self.package)
        }
    }

    fn validate(&self) -> Result<Ident, GenerateError> {
        parse_ident("package", &self.package)?;
        let target = parse_ident("configurable", &self.configurable)?;
        if RESERVED_NAMES.contains(&self.configurable.as_str()) {
            return Err(GenerateError::ReservedName {
                value: self.configurable.clone(),
            });
        }
        Ok(target)
    }
}

fn parse_ident(field: &'static str, value: &str) -> Result<Ident, GenerateError> {
    syn::parse_str::<Ident>(value).map_err(|_| GenerateError::invalid_identifier(field, value))
}

/// Emits `#[doc]` lines only when documentation was requested.
struct Docs {
    enabled: bool,
}

impl Docs {
    fn line(&self, text: impl AsRef<str>) -> TokenStream {
        if !self.enabled {
            return TokenStream::new();
        }
        let text = format!(" {}", text.as_ref());
        quote! { #[doc = #text] }
    }
}

/// Render the configuration items without a file header or imports.
///
/// The configurable type is referenced by its bare name, so the caller must
/// have it in scope. Used directly by the `ordered_configuration!` macro.
pub fn render_items(options: &RenderOptions) -> Result<TokenStream, GenerateError> {
    let target = options.validate()?;
    let binding = format_ident!("{}", options.binding());
    let unused_binding = format_ident!("_{}", binding);
    let name = &options.configurable;
    let docs = Docs {
        enabled: options.document,
    };

    let (arg_ty, held_ty, held_target, step_arg, passing) = if options.is_pointer {
        (
            quote! { &mut #target },
            quote! { &mut #target },
            quote! { &mut self.#binding },
            quote! { #binding },
            format!("a mutable reference to `{name}`"),
        )
    } else {
        (
            quote! { #target },
            quote! { &#target },
            quote! { &self.#binding },
            quote! { #binding.clone() },
            format!("a clone of `{name}`"),
        )
    };

    let doc_error = docs.line("Error returned by a failing configuration step.");
    let doc_fn = docs.line(format!("A function taking {passing} and returning an error."));
    let doc_default_order = docs.line("Order given to steps created without an explicit order.");
    let doc_config = docs.line("A trait providing `order` and `configure` functions.");
    let doc_order = docs.line("Returns an integer used for ordering; lower runs first.");
    let doc_configure = docs.line(format!("Provided {passing}, runs any defined functionality, returning any error."));
    let doc_default_config = docs.line("Returns a `Config` with an order of 50 and the provided function.");
    let doc_new_config = docs.line("Returns a `Config` with the provided order and function.");
    let doc_configuration = docs.line("A trait providing facility for multiple configuration options.");
    let doc_add = docs.line("Adds any number of `Config` to the configuration.");
    let doc_add_fn = docs.line("Adds any number of functions, each with the default order of 50.");
    let doc_configure_all = docs.line(
        "Runs all configuration in order, returning any encountered error immediately.",
    );
    let doc_configured = docs.line("Returns whether a call to `configure` has ever completed without error.");
    let doc_configurator = docs.line(format!("Holds a `{name}` and the `Config` steps to run against it."));
    let doc_new_configuration = docs.line(format!(
        "Creates a configuration for `{name}` seeded with the built-in steps, then `configs`."
    ));
    let doc_get = docs.line(format!("Returns the configured `{name}`."));
    let doc_get_mut = docs.line(format!("Returns the configured `{name}` mutably."));
    let doc_into_inner = docs.line(format!("Consumes the configuration, returning the `{name}`."));
    let doc_len = docs.line("Number of registered steps, built-ins included.");
    let doc_is_empty = docs.line("Returns whether no steps are registered.");
    let doc_external = docs.line(format!(
        "An externally available step, ordered after defaults, to provide to a new `{name}`."
    ));

    Ok(quote! {
        #doc_error
        pub type ConfigError = Box<dyn std::error::Error + Send + Sync + 'static>;

        #doc_fn
        pub type ConfigFn = Box<dyn Fn(#arg_ty) -> Result<(), ConfigError>>;

        #doc_default_order
        pub const DEFAULT_ORDER: i32 = 50;

        #doc_config
        pub trait Config {
            #doc_order
            fn order(&self) -> i32;

            #doc_configure
            fn configure(&self, #binding: #arg_ty) -> Result<(), ConfigError>;
        }

        struct Step {
            order: i32,
            run: ConfigFn,
        }

        impl Config for Step {
            fn order(&self) -> i32 {
                self.order
            }

            fn configure(&self, #binding: #arg_ty) -> Result<(), ConfigError> {
                (self.run)(#binding)
            }
        }

        #doc_default_config
        pub fn default_config<F>(run: F) -> Box<dyn Config>
        where
            F: Fn(#arg_ty) -> Result<(), ConfigError> + 'static,
        {
            new_config(DEFAULT_ORDER, run)
        }

        #doc_new_config
        pub fn new_config<F>(order: i32, run: F) -> Box<dyn Config>
        where
            F: Fn(#arg_ty) -> Result<(), ConfigError> + 'static,
        {
            Box::new(Step {
                order,
                run: Box::new(run),
            })
        }

        #doc_configuration
        pub trait Configuration {
            #doc_add
            fn add(&mut self, configs: Vec<Box<dyn Config>>);

            #doc_add_fn
            fn add_fn(&mut self, fns: Vec<ConfigFn>);

            #doc_configure_all
            fn configure(&mut self) -> Result<(), ConfigError>;

            #doc_configured
            fn configured(&self) -> bool;
        }

        #doc_configurator
        pub struct Configurator {
            #binding: #target,
            configured: bool,
            list: Vec<Box<dyn Config>>,
        }

        #doc_new_configuration
        pub(crate) fn new_configuration(#binding: #target, configs: Vec<Box<dyn Config>>) -> Configurator {
            let mut configuration = Configurator {
                #binding,
                configured: false,
                list: builtins(),
            };
            configuration.add(configs);
            configuration
        }

        impl Configurator {
            #doc_get
            pub fn get(&self) -> &#target {
                &self.#binding
            }

            #doc_get_mut
            pub fn get_mut(&mut self) -> &mut #target {
                &mut self.#binding
            }

            #doc_into_inner
            pub fn into_inner(self) -> #target {
                self.#binding
            }

            #doc_len
            pub fn len(&self) -> usize {
                self.list.len()
            }

            #doc_is_empty
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }
        }

        impl Configuration for Configurator {
            fn add(&mut self, configs: Vec<Box<dyn Config>>) {
                self.list.extend(configs);
            }

            fn add_fn(&mut self, fns: Vec<ConfigFn>) {
                self.list.extend(
                    fns.into_iter()
                        .map(|run| Box::new(Step { order: DEFAULT_ORDER, run }) as Box<dyn Config>),
                );
            }

            fn configure(&mut self) -> Result<(), ConfigError> {
                // sort_by_key is stable: equal orders keep registration order.
                self.list.sort_by_key(|config| config.order());
                configure_all(#held_target, &self.list)?;
                self.configured = true;
                Ok(())
            }

            fn configured(&self) -> bool {
                self.configured
            }
        }

        fn configure_all(#binding: #held_ty, configs: &[Box<dyn Config>]) -> Result<(), ConfigError> {
            for config in configs {
                config.configure(#step_arg)?;
            }
            Ok(())
        }

        fn builtins() -> Vec<Box<dyn Config>> {
            vec![new_config(0, builtin_configuration_example)]
        }

        fn builtin_configuration_example(#unused_binding: #arg_ty) -> Result<(), ConfigError> {
            Ok(())
        }

        #doc_external
        pub fn external_configuration_example() -> Box<dyn Config> {
            new_config(100, |_: #arg_ty| Ok(()))
        }
    })
}

/// Render a complete `configuration.rs` file, formatted with `prettyplease`.
pub fn render_file(options: &RenderOptions) -> Result<String, GenerateError> {
    let items = render_items(options)?;
    let target = format_ident!("{}", options.configurable);
    let header: Vec<TokenStream> = file_header(options)
        .into_iter()
        .map(|line| quote! { #![doc = #line] })
        .collect();

    let output = quote! {
        #(#header)*

        #![allow(dead_code)]

        use super::#target;

        #items
    };

    let syntax_tree: syn::File = syn::parse2(output)?;
    Ok(prettyplease::unparse(&syntax_tree))
}

fn file_header(options: &RenderOptions) -> Vec<String> {
    let name = &options.configurable;
    let package = &options.package;
    let mut lines = vec![
        format!(" Ordered configuration for `{name}` in `{package}`."),
        String::new(),
        " Generated by ordconf. Do not edit manually.".to_string(),
    ];

    if options.document {
        let module = options.module_path();
        let passing = if options.is_pointer {
            format!("`&mut {name}`")
        } else {
            format!("`{name}` (cloned for each step)")
        };
        lines.extend([
            String::new(),
            format!(" This file provides configuration functionality for `{name}` of `{package}`."),
            String::new(),
            format!(" - `ConfigFn`: a function taking {passing} and returning an error."),
            " - `Config`: a trait that provides ordering and `ConfigFn` functionality.".to_string(),
            " - `Configuration`: a trait that aggregates multiple `Config`.".to_string(),
            String::new(),
            " An example use:".to_string(),
            String::new(),
            " ```ignore".to_string(),
            format!(" use {module}::configuration::{{new_configuration, Config, ConfigError, Configuration}};"),
            format!(" use {module}::{name};"),
            String::new(),
            format!(" pub fn new(configs: Vec<Box<dyn Config>>) -> Result<{name}, ConfigError> {{"),
            format!("     let mut configuration = new_configuration({name}::default(), configs);"),
            "     configuration.configure()?;".to_string(),
            "     Ok(configuration.into_inner())".to_string(),
            " }".to_string(),
            " ```".to_string(),
        ]);
    }

    lines
}

/// Convert PascalCase to snake_case, keeping acronyms together.
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let boundary = match i.checked_sub(1).and_then(|p| chars.get(p)) {
                Some(prev) => {
                    prev.is_lowercase()
                        || prev.is_ascii_digit()
                        || (prev.is_uppercase() && chars.get(i + 1).is_some_and(|next| next.is_lowercase()))
                }
                None => false,
            };
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
