use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Expr, Meta, Type, parse_macro_input};

/// Derives `resolve(&self, theme: &Theme) -> &T` for a fieldless enum.
///
/// The enum carries `#[field(T)]` naming the resolved type, and every
/// variant carries `#[theme(path.to.field)]`, a field path rooted at the
/// theme.
#[proc_macro_derive(IntoThemeField, attributes(theme, field))]
pub fn into_theme_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(Error::new_spanned(
            name,
            "#[derive(IntoThemeField)] can only be used on enums",
        ));
    };

    let field_type = get_enum_field_type(&input)?;

    let variant_matches = data_enum
        .variants
        .iter()
        .map(|variant| {
            if !variant.fields.is_empty() {
                return Err(Error::new_spanned(
                    variant,
                    "#[derive(IntoThemeField)] variants can't carry data",
                ));
            }

            let ident = &variant.ident;
            let field_path = get_theme_expr(&variant.attrs, variant)?;

            Ok(quote! {
                #name::#ident => &theme.#field_path,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #name {
            pub fn resolve<'a>(&self, theme: &'a ::dashboard_theme::Theme) -> &'a #field_type {
                match self {
                    #(#variant_matches)*
                }
            }
        }
    })
}

fn get_theme_expr(attrs: &[Attribute], variant: &syn::Variant) -> syn::Result<Expr> {
    let Some(theme_attr) = attrs.iter().find(|attr| attr.path().is_ident("theme")) else {
        return Err(Error::new_spanned(
            variant,
            "variant is missing #[theme(...)] attribute",
        ));
    };

    match &theme_attr.meta {
        Meta::List(list) => syn::parse2(list.tokens.clone()),
        _ => Err(Error::new_spanned(theme_attr, "#[theme(...)] must be a list")),
    }
}

fn get_enum_field_type(input: &DeriveInput) -> syn::Result<Type> {
    let Some(field_attr) = input.attrs.iter().find(|attr| attr.path().is_ident("field")) else {
        return Err(Error::new_spanned(
            &input.ident,
            "enum is missing #[field(...)] attribute",
        ));
    };

    match &field_attr.meta {
        Meta::List(meta_list) => syn::parse2::<Type>(meta_list.tokens.clone()),
        _ => Err(Error::new_spanned(
            field_attr,
            "#[field(...)] must be a list, like #[field(Px)]",
        )),
    }
}
