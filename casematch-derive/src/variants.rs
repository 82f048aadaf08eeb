//! Implementation of the `#[derive(Variants)]` macro.
//!
//! This module contains the procedural macro implementation that generates
//! a predicate and two extractors for every enum variant.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Variants derive macro.
pub fn derive_variants_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_variants(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Variants can only be derived for enums, not structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Variants cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the methods for all variants of an enum.
fn generate_enum_variants<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let methods: Vec<TokenStream2> = variants.map(generate_variant_methods).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}

/// The pieces of a variant the generated methods are assembled from.
struct VariantShape<'a> {
    /// A pattern binding every field of the variant to `bindings`.
    pattern: TokenStream2,
    /// One binding per field, in declaration order.
    bindings: Vec<Ident>,
    /// One type per field, in declaration order.
    types: Vec<&'a Type>,
}

impl<'a> VariantShape<'a> {
    fn of(variant: &'a Variant) -> Self {
        let variant_name = &variant.ident;
        let types: Vec<&Type> = variant.fields.iter().map(|field| &field.ty).collect();
        let bindings: Vec<Ident> = (0..types.len())
            .map(|index| format_ident!("field{}", index))
            .collect();

        let pattern = match &variant.fields {
            // Unit variant: e.g., `Quit`
            Fields::Unit => quote! { Self::#variant_name },

            // Tuple variant: e.g., `KeyPress(char)`
            Fields::Unnamed(_) => quote! { Self::#variant_name(#(#bindings),*) },

            // Struct variant: e.g., `Click { x: i32, y: i32 }`
            Fields::Named(fields) => {
                let field_names = fields.named.iter().filter_map(|field| field.ident.as_ref());
                quote! { Self::#variant_name { #(#field_names: #bindings),* } }
            }
        };

        Self {
            pattern,
            bindings,
            types,
        }
    }

    /// The extracted value: `()`, the single field, or a tuple of fields.
    fn value(&self) -> TokenStream2 {
        match self.bindings.as_slice() {
            [] => quote! { () },
            [single] => quote! { #single },
            bindings => quote! { (#(#bindings),*) },
        }
    }

    /// The type of the owned extracted value.
    fn owned_type(&self) -> TokenStream2 {
        match self.types.as_slice() {
            [] => quote! { () },
            [single] => quote! { #single },
            types => quote! { (#(#types),*) },
        }
    }

    /// The type of the borrowed extracted value.
    fn borrowed_type(&self) -> TokenStream2 {
        match self.types.as_slice() {
            [] => quote! { () },
            [single] => quote! { &#single },
            types => quote! { (#(&#types),*) },
        }
    }
}

/// Generates `is_*`, `as_*` and `into_*` for a single variant.
fn generate_variant_methods(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let snake_name = to_snake_case(&variant_name.unraw().to_string());
    let is_method = format_ident!("is_{}", snake_name);
    let as_method = format_ident!("as_{}", snake_name);
    let into_method = format_ident!("into_{}", snake_name);

    let shape = VariantShape::of(variant);
    let pattern = &shape.pattern;
    let value = shape.value();
    let owned_type = shape.owned_type();
    let borrowed_type = shape.borrowed_type();

    let is_doc = format!("Returns `true` if this is the `{variant_name}` variant.");
    let as_doc = format!("Borrows the fields of the `{variant_name}` variant, if it is this variant.");
    let into_doc = format!(
        "Moves out the fields of the `{variant_name}` variant, or gives `self` back unchanged."
    );

    quote! {
        #[doc = #is_doc]
        #[inline]
        #[must_use]
        pub const fn #is_method(&self) -> bool {
            matches!(self, Self::#variant_name { .. })
        }

        #[doc = #as_doc]
        #[inline]
        #[must_use]
        pub const fn #as_method(&self) -> ::core::option::Option<#borrowed_type> {
            match self {
                #pattern => ::core::option::Option::Some(#value),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            }
        }

        #[doc = #into_doc]
        ///
        /// # Errors
        ///
        /// Returns `self` if it is a different variant.
        #[inline]
        pub fn #into_method(self) -> ::core::result::Result<#owned_type, Self> {
            match self {
                #pattern => ::core::result::Result::Ok(#value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            }
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase()
                    || previous_char.is_ascii_digit()
                    || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
