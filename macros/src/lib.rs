use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derive `optval::Element` for a type that implements `Display`.
///
/// The type must also implement `Clone`, `PartialEq` and `Hash`. A type that
/// has a null state of its own can point at a `fn(&self) -> bool` method
/// which reports it:
///
/// ```rust,ignore
/// #[derive(Clone, PartialEq, Eq, Hash, Element)]
/// #[element(null = is_unnamed)]
/// struct Name(String);
/// ```
#[proc_macro_derive(Element, attributes(element))]
pub fn element(item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::DeriveInput);

    let null_fn = match gather_null_fn(&item.attrs) {
        Ok(null_fn) => null_fn,
        Err(err) => return err.to_compile_error().into(),
    };

    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) =
        item.generics.split_for_impl();

    let is_null = null_fn.map(|null_fn| {
        quote!(
            fn is_null(&self) -> bool {
                Self::#null_fn(self)
            }

            fn as_any(&self) -> Option<&dyn std::any::Any> {
                if Self::#null_fn(self) {
                    None
                } else {
                    Some(self as &dyn std::any::Any)
                }
            }
        )
    });

    let expanded = quote!(
        impl #impl_generics optval::Element for #ident #ty_generics #where_clause {
            #is_null

            fn hash_element(&self, mut state: &mut dyn std::hash::Hasher) {
                std::hash::Hash::hash(self, &mut state)
            }

            fn fmt_element(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    );

    TokenStream::from(expanded)
}

fn gather_null_fn(attrs: &[syn::Attribute]) -> syn::Result<Option<syn::Ident>> {
    let mut null_fn = None;

    for attr in attrs {
        if !attr.path().is_ident("element") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("null") {
                null_fn = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported element attribute"))
            }
        })?;
    }

    Ok(null_fn)
}
